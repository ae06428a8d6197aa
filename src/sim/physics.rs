//! Ship kinematics
//!
//! Thrust along the facing, inverse-square black hole pull, explicit Euler
//! integration and toroidal wraparound at the screen edges.

use glam::Vec2;

use super::state::Ship;
use crate::consts::*;

/// Gravitational force magnitude at a given distance from the black hole
///
/// Distances under `MIN_GRAVITY_DISTANCE` are clamped so a ship sitting
/// exactly on the center never divides by zero.
#[inline]
pub fn gravity_force(distance: f32) -> f32 {
    let d = distance.max(MIN_GRAVITY_DISTANCE);
    GRAVITY_NUMERATOR / (d * d)
}

/// Acceleration the black hole imparts on a ship at `pos`
pub fn gravity_acceleration(pos: Vec2) -> Vec2 {
    let to_hole = BLACK_HOLE_POS - pos;
    let distance = to_hole.length();
    if distance < MIN_GRAVITY_DISTANCE {
        log::warn!("Ship at {:?} inside gravity clamp radius", pos);
    }
    to_hole.normalize_or_zero() * (gravity_force(distance) / SHIP_MASS)
}

/// Add thrust along the facing if the ship's thrust flag is set
pub fn apply_thrust(ship: &mut Ship, dt: f32) {
    if ship.thrusting {
        ship.vel += ship.facing() * ship.thrust_acc * dt;
    }
}

/// Pull the ship toward the black hole and integrate position
pub fn apply_gravity(ship: &mut Ship, dt: f32) {
    ship.vel += gravity_acceleration(ship.pos) * dt;
    ship.pos += ship.vel * dt;
}

/// Teleport to the opposite edge when a screen edge is crossed
///
/// Snaps to the exact edge coordinate rather than wrapping by modulo.
pub fn wrap_position(pos: &mut Vec2) {
    if pos.x > SCREEN_WIDTH {
        pos.x = 0.0;
    }
    if pos.x < 0.0 {
        pos.x = SCREEN_WIDTH;
    }
    if pos.y > SCREEN_HEIGHT {
        pos.y = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = SCREEN_HEIGHT;
    }
}

/// Advance one ship by `dt`. Dead ships are left untouched.
pub fn step_ship(ship: &mut Ship, dt: f32) {
    if !ship.alive {
        return;
    }
    apply_thrust(ship, dt);
    apply_gravity(ship, dt);
    ship.angle += ship.angle_vel * dt;
    wrap_position(&mut ship.pos);
}
