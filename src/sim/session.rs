//! Game session controller
//!
//! Owns every entity and subsystem. The host calls `handle_input`, then
//! `advance(dt)`, then reads the query surface (and calls
//! `advance_animations`) while drawing.

use rand_pcg::Pcg32;
use serde::Serialize;

use super::bullets::BulletPool;
use super::collision::{ship_black_hole_collision, ship_ship_collision};
use super::enemy_ai::EnemyAi;
use super::explosion::{Explosion, Explosions};
use super::physics::step_ship;
use super::rng::{RandomSource, seeded};
use super::state::{Bullet, GamePhase, InputSnapshot, Ship};
use crate::consts::*;

/// Read-only copy of everything the renderer needs
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub hint_timer: f32,
    pub player: Ship,
    pub enemy: Ship,
    pub bullets: Vec<Bullet>,
    pub explosions: Vec<Explosion>,
}

pub struct Session<R = Pcg32> {
    player: Ship,
    enemy: Ship,
    bullets: BulletPool,
    ai: EnemyAi,
    explosions: Explosions,
    phase: GamePhase,
    /// Seconds the controls hint stays visible
    hint_timer: f32,
    rng: R,
}

impl Session<Pcg32> {
    /// New session driven by a seeded PCG stream
    pub fn new(seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self::with_rng(seeded(seed))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            player: Ship::player(),
            enemy: Ship::enemy(),
            bullets: BulletPool::new(),
            ai: EnemyAi::new(),
            explosions: Explosions::new(),
            phase: GamePhase::Gameplay,
            hint_timer: HINT_DURATION,
            rng,
        }
    }

    /// Put ships, bullets, enemy AI and phase back to their starting state.
    ///
    /// Explosions already playing are left alone.
    pub fn reset(&mut self) {
        self.player = Ship::player();
        self.enemy = Ship::enemy();
        self.bullets.clear();
        self.ai = EnemyAi::new();
        self.phase = GamePhase::Gameplay;
        self.hint_timer = HINT_DURATION;
        log::info!("Session reset");
    }

    /// Map polled key state onto the player's controls
    pub fn handle_input(&mut self, input: &InputSnapshot) {
        if input.reset {
            self.reset();
            return;
        }
        if !self.player.alive {
            return;
        }

        self.player.thrusting = input.thrust;
        self.player.angle_vel = if input.rotate_right {
            self.player.rot_speed
        } else if input.rotate_left {
            -self.player.rot_speed
        } else {
            0.0
        };

        if input.fire && self.bullets.shoot(&mut self.player) {
            log::debug!("Player fired at angle {:.1}", self.player.angle);
        }
    }

    /// Run one simulation step.
    ///
    /// Order is fixed: ship physics, enemy AI, cooldowns and bullets, then
    /// black hole and ramming checks. A destruction in one check is visible
    /// to the checks after it.
    pub fn advance(&mut self, dt: f32) {
        step_ship(&mut self.player, dt);
        step_ship(&mut self.enemy, dt);

        self.ai.update(dt, &mut self.enemy, &mut self.rng);

        BulletPool::tick_cooldown(&mut self.player, dt);
        BulletPool::tick_cooldown(&mut self.enemy, dt);
        let report = self.bullets.update_all(dt, &self.enemy);
        if report.target_hit {
            self.destroy_enemy();
        }

        if ship_black_hole_collision(&self.player) {
            self.destroy_player();
        }

        // Ramming kills both. The player goes first, so a mutual kill is a loss.
        if ship_ship_collision(&self.player, &self.enemy) {
            self.destroy_player();
            self.destroy_enemy();
        }

        if self.phase == GamePhase::Gameplay {
            self.hint_timer = (self.hint_timer - dt).max(0.0);
        }
    }

    /// Step explosion sprites; call once per rendered frame
    pub fn advance_animations(&mut self) {
        self.explosions.advance();
    }

    /// Destroy the player ship. No-op if it is already dead.
    pub fn destroy_player(&mut self) {
        if self.player.destroy() {
            self.explosions.spawn(self.player.pos);
            self.end_with(GamePhase::Lose);
        }
    }

    /// Destroy the enemy ship. No-op if it is already dead.
    pub fn destroy_enemy(&mut self) {
        if self.enemy.destroy() {
            self.explosions.spawn(self.enemy.pos);
            self.end_with(GamePhase::Victory);
        }
    }

    /// Leave Gameplay for a terminal phase; terminal phases never change
    fn end_with(&mut self, phase: GamePhase) {
        if self.phase.is_terminal() {
            return;
        }
        log::info!("Game over: {:?}", phase);
        self.phase = phase;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn hint_timer(&self) -> f32 {
        self.hint_timer
    }

    pub fn player(&self) -> &Ship {
        &self.player
    }

    pub fn enemy(&self) -> &Ship {
        &self.enemy
    }

    pub fn bullets(&self) -> &BulletPool {
        &self.bullets
    }

    pub fn ai(&self) -> &EnemyAi {
        &self.ai
    }

    pub fn explosions(&self) -> &Explosions {
        &self.explosions
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            hint_timer: self.hint_timer,
            player: self.player.clone(),
            enemy: self.enemy.clone(),
            bullets: self.bullets.active().copied().collect(),
            explosions: self.explosions.playing().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy_ai::AiPhase;
    use glam::Vec2;

    struct Scripted(Vec<i32>);

    impl RandomSource for Scripted {
        fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
            let v = if self.0.is_empty() { lo } else { self.0.remove(0) };
            v.clamp(lo, hi)
        }
    }

    fn session() -> Session<Scripted> {
        Session::with_rng(Scripted(vec![]))
    }

    fn fire() -> InputSnapshot {
        InputSnapshot {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_black_hole_boundary_end_to_end() {
        let mut s = session();
        s.player.pos = BLACK_HOLE_POS + Vec2::new(32.0, 0.0);
        s.advance(0.0);
        assert!(s.player.alive);
        assert_eq!(s.phase(), GamePhase::Gameplay);

        s.player.pos = BLACK_HOLE_POS + Vec2::new(31.99, 0.0);
        s.advance(0.0);
        assert!(!s.player.alive);
        assert_eq!(s.phase(), GamePhase::Lose);
    }

    #[test]
    fn test_player_destroyed_once() {
        let mut s = session();
        s.destroy_player();
        assert_eq!(s.phase(), GamePhase::Lose);
        assert_eq!(s.explosions().len(), 1);

        s.destroy_player();
        assert_eq!(s.phase(), GamePhase::Lose);
        assert_eq!(s.explosions().len(), 1);
    }

    #[test]
    fn test_enemy_destroyed_is_victory() {
        let mut s = session();
        s.destroy_enemy();
        assert_eq!(s.phase(), GamePhase::Victory);

        // Terminal phases stick
        s.destroy_player();
        assert_eq!(s.phase(), GamePhase::Victory);
        assert!(!s.player.alive);
    }

    #[test]
    fn test_ramming_resolves_to_lose() {
        let mut s = session();
        s.player.pos = Vec2::new(200.0, 200.0);
        s.enemy.pos = Vec2::new(205.0, 200.0);
        s.advance(0.0);

        assert!(!s.player.alive);
        assert!(!s.enemy.alive);
        assert_eq!(s.phase(), GamePhase::Lose);
        assert_eq!(s.explosions().playing().count(), 2);
    }

    #[test]
    fn test_bullet_kills_enemy() {
        let mut s = session();
        s.enemy.pos = s.player.pos + Vec2::new(48.0, 0.0);

        s.handle_input(&fire());
        assert_eq!(s.bullets().active_count(), 1);

        s.advance(0.1);
        assert!(!s.enemy.alive);
        assert_eq!(s.bullets().active_count(), 0);
        assert_eq!(s.phase(), GamePhase::Victory);
    }

    #[test]
    fn test_fire_respects_cooldown() {
        let mut s = session();
        s.handle_input(&fire());
        s.handle_input(&fire());
        assert_eq!(s.bullets().active_count(), 1);

        s.advance(FIRE_COOLDOWN);
        s.handle_input(&fire());
        assert_eq!(s.bullets().active_count(), 2);
    }

    #[test]
    fn test_input_maps_to_controls() {
        let mut s = session();
        s.handle_input(&InputSnapshot {
            thrust: true,
            rotate_left: true,
            ..Default::default()
        });
        assert!(s.player.thrusting);
        assert_eq!(s.player.angle_vel, -SHIP_ROT_SPEED);

        s.handle_input(&InputSnapshot::default());
        assert!(!s.player.thrusting);
        assert_eq!(s.player.angle_vel, 0.0);
    }

    #[test]
    fn test_wraparound_through_advance() {
        let mut s = session();
        s.player.pos = Vec2::new(SCREEN_WIDTH - 0.5, SCREEN_HEIGHT / 2.0);
        s.player.vel = Vec2::new(100.0, 0.0);
        s.advance(0.1);
        assert_eq!(s.player.pos.x, 0.0);
    }

    #[test]
    fn test_enemy_ai_phase_change_end_to_end() {
        let mut s = Session::with_rng(Scripted(vec![700, 1]));
        assert_eq!(s.ai().phase(), AiPhase::Thrust);

        s.advance(0.5);
        assert_eq!(s.ai().phase(), AiPhase::Thrust);
        s.advance(0.5);
        assert_eq!(s.ai().phase(), AiPhase::Rotate { direction: 1 });
        assert_eq!(s.enemy().angle_vel, SHIP_ROT_SPEED);
    }

    #[test]
    fn test_reset_restores_start_state() {
        let mut s = session();
        s.handle_input(&fire());
        s.advance(0.2);
        s.destroy_player();
        assert_eq!(s.phase(), GamePhase::Lose);

        s.handle_input(&InputSnapshot {
            reset: true,
            ..Default::default()
        });

        assert_eq!(s.phase(), GamePhase::Gameplay);
        assert!(s.player().alive);
        assert!(s.enemy().alive);
        assert_eq!(s.player().pos, PLAYER_START_POS);
        assert_eq!(s.player().angle, PLAYER_START_ANGLE);
        assert_eq!(s.player().vel, Vec2::ZERO);
        assert_eq!(s.enemy().pos, ENEMY_START_POS);
        assert_eq!(s.enemy().angle, ENEMY_START_ANGLE);
        assert_eq!(s.enemy().vel, Vec2::ZERO);
        assert_eq!(s.bullets().active_count(), 0);
        assert_eq!(s.ai().phase(), AiPhase::Thrust);
        assert_eq!(s.hint_timer(), HINT_DURATION);
        // Explosions survive a reset
        assert_eq!(s.explosions().len(), 1);
    }

    #[test]
    fn test_hint_timer_counts_down_in_gameplay_only() {
        let mut s = session();
        s.advance(1.0);
        assert!((s.hint_timer() - (HINT_DURATION - 1.0)).abs() < 1e-5);

        s.destroy_enemy();
        let frozen = s.hint_timer();
        s.advance(1.0);
        assert_eq!(s.hint_timer(), frozen);
    }

    #[test]
    fn test_seeded_sessions_are_deterministic() {
        let mut a = Session::new(99);
        let mut b = Session::new(99);
        for _ in 0..240 {
            a.advance(1.0 / 60.0);
            b.advance(1.0 / 60.0);
        }
        assert_eq!(a.enemy().pos, b.enemy().pos);
        assert_eq!(a.ai().phase(), b.ai().phase());
    }

    #[test]
    fn test_snapshot_lists_active_entities() {
        let mut s = session();
        s.handle_input(&fire());
        let snap = s.snapshot();
        assert_eq!(snap.bullets.len(), 1);
        assert!(snap.explosions.is_empty());
        assert_eq!(snap.phase, GamePhase::Gameplay);
    }
}
