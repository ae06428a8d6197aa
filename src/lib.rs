//! Space Shooter - a black hole arcade duel
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (gravity, ships, bullets, enemy AI, collisions)
//! - `render`: Draw contract the host renderer implements
//! - `platform`: Resource discovery for the host
//! - `settings`: Presentation preferences

pub mod error;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use error::StartupError;
pub use settings::Settings;
pub use sim::{GamePhase, InputSnapshot, Session};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Screen dimensions (world units == pixels)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Black hole sits at the screen center and never moves
    pub const BLACK_HOLE_POS: Vec2 = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0);
    /// G * M_blackhole * M_ship folded into one numerator
    pub const GRAVITY_NUMERATOR: f32 = 5000.0 * 10.0 * 1000.0;
    /// Ship mass (divisor from force to acceleration)
    pub const SHIP_MASS: f32 = 10.0;
    /// Distances below this are clamped before the inverse-square division
    pub const MIN_GRAVITY_DISTANCE: f32 = 1.0;
    /// Black hole sprite spin (degrees/s of host time)
    pub const BLACK_HOLE_SPIN: f32 = 50.0;

    /// Ship tuning (shared by player and enemy)
    pub const SHIP_ROT_SPEED: f32 = 100.0; // deg/s
    pub const SHIP_THRUST_ACC: f32 = 200.0; // units/s²
    pub const SHIP_SIZE: f32 = 32.0;

    pub const PLAYER_START_POS: Vec2 = Vec2::new(20.0, SCREEN_HEIGHT / 2.0);
    pub const PLAYER_START_ANGLE: f32 = 0.0;
    pub const ENEMY_START_POS: Vec2 = Vec2::new(SCREEN_WIDTH - 20.0, SCREEN_HEIGHT / 2.0);
    pub const ENEMY_START_ANGLE: f32 = 180.0;

    /// Bullets
    pub const BULLET_CAPACITY: usize = 100;
    pub const BULLET_SPEED: f32 = 400.0;
    pub const FIRE_COOLDOWN: f32 = 0.3;

    /// Kill radii (strict `<` comparisons)
    pub const BLACK_HOLE_KILL_RADIUS: f32 = 32.0;
    pub const SHIP_COLLISION_RADIUS: f32 = 16.0;
    pub const BULLET_HIT_RADIUS: f32 = 12.0;
    pub const BULLET_BLACK_HOLE_RADIUS: f32 = 32.0;

    /// Enemy AI phase timings (seconds unless noted)
    pub const AI_INITIAL_THRUST: f32 = 1.0;
    pub const AI_IDLE_TO_THRUST: f32 = 1.0;
    pub const AI_ROTATE_MIN_MS: i32 = 500;
    pub const AI_ROTATE_MAX_MS: i32 = 1000;
    pub const AI_ROTATE_TO_IDLE: f32 = 0.5;

    /// Explosion animation
    pub const EXPLOSION_FRAMES: u32 = 4;
    pub const EXPLOSION_FRAME_SIZE: f32 = 32.0;
    /// Render frames between animation steps
    pub const EXPLOSION_FRAME_INTERVAL: u32 = 6;
    pub const MAX_EXPLOSIONS: usize = 16;

    /// How long the controls hint stays on screen
    pub const HINT_DURATION: f32 = 5.0;
}

/// Unit vector for a facing angle in degrees
#[inline]
pub fn deg_to_dir(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Interpolate between two angles (degrees) along the shortest arc
pub fn lerp_angle(start: f32, end: f32, t: f32) -> f32 {
    let difference = (end - start + 180.0).rem_euclid(360.0) - 180.0;
    start + difference * t
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
