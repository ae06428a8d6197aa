//! Entity records and the game phase
//!
//! Plain data. Behavior lives in the sibling modules that mutate these.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::deg_to_dir;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Gameplay,
    /// Player ship destroyed
    Lose,
    /// Enemy ship destroyed
    Victory,
}

impl GamePhase {
    /// Lose and Victory only end with a reset
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Gameplay)
    }
}

/// A ship, player or enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub alive: bool,
    pub is_player: bool,
    /// Thrust requested for the next physics step
    pub thrusting: bool,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Facing in degrees, never normalized
    pub angle: f32,
    /// Degrees per second
    pub angle_vel: f32,
    pub rot_speed: f32,
    pub thrust_acc: f32,
    /// Seconds until the next shot is allowed
    pub fire_cooldown: f32,
}

impl Ship {
    fn new(is_player: bool, pos: Vec2, angle: f32) -> Self {
        Self {
            alive: true,
            is_player,
            thrusting: false,
            pos,
            vel: Vec2::ZERO,
            angle,
            angle_vel: 0.0,
            rot_speed: SHIP_ROT_SPEED,
            thrust_acc: SHIP_THRUST_ACC,
            fire_cooldown: 0.0,
        }
    }

    pub fn player() -> Self {
        Self::new(true, PLAYER_START_POS, PLAYER_START_ANGLE)
    }

    pub fn enemy() -> Self {
        Self::new(false, ENEMY_START_POS, ENEMY_START_ANGLE)
    }

    /// Unit vector along the current facing
    #[inline]
    pub fn facing(&self) -> Vec2 {
        deg_to_dir(self.angle)
    }

    /// Mark the ship dead. Returns false if it was already dead.
    pub fn destroy(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        self.thrusting = false;
        self.angle_vel = 0.0;
        true
    }
}

/// A projectile slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub active: bool,
    pub pos: Vec2,
    /// Degrees, fixed at spawn
    pub angle: f32,
    pub speed: f32,
}

impl Bullet {
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        deg_to_dir(self.angle) * self.speed
    }
}

/// Held-key state polled by the host once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub fire: bool,
    /// One-shot edge: reset was pressed this frame
    pub reset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_positions() {
        let player = Ship::player();
        assert!(player.alive);
        assert!(player.is_player);
        assert_eq!(player.pos, PLAYER_START_POS);
        assert_eq!(player.vel, Vec2::ZERO);

        let enemy = Ship::enemy();
        assert!(!enemy.is_player);
        assert_eq!(enemy.angle, ENEMY_START_ANGLE);
    }

    #[test]
    fn test_destroy_once() {
        let mut ship = Ship::player();
        ship.thrusting = true;
        assert!(ship.destroy());
        assert!(!ship.alive);
        assert!(!ship.thrusting);
        assert!(!ship.destroy());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Gameplay.is_terminal());
        assert!(GamePhase::Lose.is_terminal());
        assert!(GamePhase::Victory.is_terminal());
    }
}
