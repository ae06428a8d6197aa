//! Kill-radius collision checks
//!
//! Every check is a strict `<` against a fixed radius and ignores dead ships.

use glam::Vec2;

use super::state::Ship;
use crate::consts::*;

/// True if two points are closer than `radius`
#[inline]
pub fn within(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Check if a ship fell into the black hole
pub fn ship_black_hole_collision(ship: &Ship) -> bool {
    ship.alive && within(ship.pos, BLACK_HOLE_POS, BLACK_HOLE_KILL_RADIUS)
}

/// Check if two ships rammed each other
pub fn ship_ship_collision(a: &Ship, b: &Ship) -> bool {
    a.alive && b.alive && within(a.pos, b.pos, SHIP_COLLISION_RADIUS)
}
