//! Fixed-capacity bullet pool
//!
//! Slots are allocated once and reused in place. Spawning is first-fit over
//! the slot array; a full pool silently drops the shot.

use serde::{Deserialize, Serialize};

use super::state::{Bullet, Ship};
use crate::consts::*;
use crate::distance;

/// What happened to the target during one bullet update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BulletReport {
    /// A bullet came within hit radius of the target
    pub target_hit: bool,
    /// Bullets retired this update for any reason
    pub expired: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletPool {
    slots: Vec<Bullet>,
}

impl Default for BulletPool {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletPool {
    pub fn new() -> Self {
        Self {
            slots: vec![Bullet::default(); BULLET_CAPACITY],
        }
    }

    /// Fire from the shooter's position along its facing.
    ///
    /// Gated by the shooter's cooldown. Returns true if a bullet was spawned.
    pub fn shoot(&mut self, shooter: &mut Ship) -> bool {
        if !shooter.alive || shooter.fire_cooldown > 0.0 {
            return false;
        }

        let Some(slot) = self.slots.iter_mut().find(|b| !b.active) else {
            log::debug!("Bullet pool exhausted, shot dropped");
            return false;
        };

        *slot = Bullet {
            active: true,
            pos: shooter.pos,
            angle: shooter.angle,
            speed: BULLET_SPEED,
        };
        shooter.fire_cooldown = FIRE_COOLDOWN;
        true
    }

    /// Count the shooter's cooldown down. Runs every frame whether or not it fired.
    pub fn tick_cooldown(shooter: &mut Ship, dt: f32) {
        shooter.fire_cooldown = (shooter.fire_cooldown - dt).max(0.0);
    }

    /// Advance every active bullet and retire the ones that left the screen,
    /// fell into the black hole, or struck the target.
    pub fn update_all(&mut self, dt: f32, target: &Ship) -> BulletReport {
        let mut report = BulletReport::default();
        let mut target_alive = target.alive;

        for bullet in self.slots.iter_mut().filter(|b| b.active) {
            bullet.pos += bullet.velocity() * dt;

            let off_screen = bullet.pos.x < 0.0
                || bullet.pos.x > SCREEN_WIDTH
                || bullet.pos.y < 0.0
                || bullet.pos.y > SCREEN_HEIGHT;
            let swallowed = distance(bullet.pos, BLACK_HOLE_POS) < BULLET_BLACK_HOLE_RADIUS;
            let hit = target_alive && distance(bullet.pos, target.pos) < BULLET_HIT_RADIUS;

            if hit {
                report.target_hit = true;
                target_alive = false;
            }
            if off_screen || swallowed || hit {
                bullet.active = false;
                report.expired += 1;
            }
        }

        report
    }

    /// Deactivate every slot
    pub fn clear(&mut self) {
        for bullet in &mut self.slots {
            bullet.active = false;
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.active).count()
    }

    pub fn active(&self) -> impl Iterator<Item = &Bullet> {
        self.slots.iter().filter(|b| b.active)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn shooter_at(pos: Vec2, angle: f32) -> Ship {
        let mut ship = Ship::player();
        ship.pos = pos;
        ship.angle = angle;
        ship
    }

    fn far_target() -> Ship {
        let mut enemy = Ship::enemy();
        enemy.pos = Vec2::new(10.0, 10.0);
        enemy
    }

    #[test]
    fn test_cooldown_gates_second_shot() {
        let mut pool = BulletPool::new();
        let mut ship = Ship::player();

        assert!(pool.shoot(&mut ship));
        BulletPool::tick_cooldown(&mut ship, 0.1);
        assert!(!pool.shoot(&mut ship));
        assert_eq!(pool.active_count(), 1);

        BulletPool::tick_cooldown(&mut ship, FIRE_COOLDOWN);
        assert!(pool.shoot(&mut ship));
        assert_eq!(pool.active_count(), 2);
    }

    #[test]
    fn test_pool_capacity_is_fixed() {
        let mut pool = BulletPool::new();
        let mut ship = Ship::player();

        for _ in 0..BULLET_CAPACITY {
            ship.fire_cooldown = 0.0;
            assert!(pool.shoot(&mut ship));
        }
        assert_eq!(pool.active_count(), BULLET_CAPACITY);

        ship.fire_cooldown = 0.0;
        assert!(!pool.shoot(&mut ship));
        assert_eq!(pool.active_count(), BULLET_CAPACITY);
        assert_eq!(pool.capacity(), BULLET_CAPACITY);
    }

    #[test]
    fn test_first_free_slot_is_reused() {
        let mut pool = BulletPool::new();
        let mut ship = shooter_at(Vec2::new(5.0, 5.0), 180.0);
        assert!(pool.shoot(&mut ship));

        // Heads off the left edge in one step
        let report = pool.update_all(0.1, &far_target());
        assert_eq!(report.expired, 1);
        assert_eq!(pool.active_count(), 0);

        ship.fire_cooldown = 0.0;
        assert!(pool.shoot(&mut ship));
        assert!(pool.slots[0].active);
    }

    #[test]
    fn test_dead_ship_cannot_shoot() {
        let mut pool = BulletPool::new();
        let mut ship = Ship::player();
        ship.destroy();
        assert!(!pool.shoot(&mut ship));
    }

    #[test]
    fn test_bullet_hits_target() {
        let mut pool = BulletPool::new();
        let mut ship = shooter_at(Vec2::new(200.0, 100.0), 0.0);
        pool.shoot(&mut ship);

        let mut target = Ship::enemy();
        target.pos = Vec2::new(210.0, 100.0);

        let report = pool.update_all(0.01, &target);
        assert!(report.target_hit);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_dead_target_is_ignored() {
        let mut pool = BulletPool::new();
        let mut ship = shooter_at(Vec2::new(200.0, 100.0), 0.0);
        pool.shoot(&mut ship);

        let mut target = Ship::enemy();
        target.pos = Vec2::new(210.0, 100.0);
        target.destroy();

        let report = pool.update_all(0.01, &target);
        assert!(!report.target_hit);
        assert_eq!(pool.active_count(), 1);
    }

    #[test]
    fn test_black_hole_swallows_bullet() {
        let mut pool = BulletPool::new();
        let mut ship = shooter_at(BLACK_HOLE_POS - Vec2::new(40.0, 0.0), 0.0);
        pool.shoot(&mut ship);

        pool.update_all(0.05, &far_target());
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut pool = BulletPool::new();
        let mut ship = Ship::player();
        pool.shoot(&mut ship);
        pool.clear();
        assert_eq!(pool.active_count(), 0);
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_capacity(attempts in 0usize..300) {
            let mut pool = BulletPool::new();
            let mut ship = Ship::player();
            for _ in 0..attempts {
                ship.fire_cooldown = 0.0;
                pool.shoot(&mut ship);
            }
            prop_assert_eq!(pool.active_count(), attempts.min(BULLET_CAPACITY));
        }
    }
}
