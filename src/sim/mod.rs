//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - Host-supplied `dt`, trusted as-is
//! - Injected random source only
//! - No rendering or platform dependencies

pub mod bullets;
pub mod collision;
pub mod enemy_ai;
pub mod explosion;
pub mod physics;
pub mod rng;
pub mod session;
pub mod state;

pub use bullets::{BulletPool, BulletReport};
pub use collision::{ship_black_hole_collision, ship_ship_collision};
pub use enemy_ai::{AiPhase, EnemyAi};
pub use explosion::{Explosion, Explosions};
pub use physics::{gravity_acceleration, gravity_force, step_ship, wrap_position};
pub use rng::{RandomSource, seeded};
pub use session::{Session, SessionSnapshot};
pub use state::{Bullet, GamePhase, InputSnapshot, Ship};
