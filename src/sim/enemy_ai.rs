//! Scripted enemy pilot
//!
//! A closed Thrust -> Rotate -> Idle -> Thrust loop on a countdown timer.
//! The enemy never aims or evades; it only drives its own control flags.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::Ship;
use crate::consts::*;

/// Enemy behavior phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiPhase {
    Idle,
    Thrust,
    /// Turning at rotation speed times `direction` (-1, 0 or +1)
    Rotate { direction: i32 },
}

impl AiPhase {
    /// The phase that follows this one and how long it lasts
    pub fn next(self, rng: &mut impl RandomSource) -> (AiPhase, f32) {
        match self {
            AiPhase::Idle => (AiPhase::Thrust, AI_IDLE_TO_THRUST),
            AiPhase::Thrust => {
                let ms = rng.range_i32(AI_ROTATE_MIN_MS, AI_ROTATE_MAX_MS);
                let duration = (ms as f32 / 1000.0).round();
                let direction = rng.range_i32(-1, 1);
                (AiPhase::Rotate { direction }, duration)
            }
            AiPhase::Rotate { .. } => (AiPhase::Idle, AI_ROTATE_TO_IDLE),
        }
    }

    /// Write this phase's control flags onto the ship
    pub fn apply(self, ship: &mut Ship) {
        match self {
            AiPhase::Idle => {
                ship.thrusting = false;
                ship.angle_vel = 0.0;
            }
            AiPhase::Thrust => {
                ship.thrusting = true;
                ship.angle_vel = 0.0;
            }
            AiPhase::Rotate { direction } => {
                ship.thrusting = false;
                ship.angle_vel = ship.rot_speed * direction as f32;
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyAi {
    phase: AiPhase,
    /// Seconds left in the phase; non-positive means the phase is over
    timer: f32,
}

impl Default for EnemyAi {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyAi {
    pub fn new() -> Self {
        Self {
            phase: AiPhase::Thrust,
            timer: AI_INITIAL_THRUST,
        }
    }

    pub fn phase(&self) -> AiPhase {
        self.phase
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Count the phase down, switch phase once it runs out, and steer the ship
    pub fn update(&mut self, dt: f32, ship: &mut Ship, rng: &mut impl RandomSource) {
        if !ship.alive {
            return;
        }

        self.timer -= dt;
        if self.timer <= 0.0 {
            let (phase, duration) = self.phase.next(rng);
            log::debug!("Enemy AI {:?} -> {:?} for {:.2}s", self.phase, phase, duration);
            self.phase = phase;
            self.timer = duration;
        }

        self.phase.apply(ship);
    }
}
