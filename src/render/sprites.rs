//! Sprite draw calls for a session frame
//!
//! The host owns the window and the atlas texture; it implements
//! `SpriteRenderer` and this module decides what goes where.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, SessionSnapshot, Ship};

/// Axis-aligned rectangle (atlas source or screen destination)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Destination rect whose rotation origin sits on `center`
    fn centered(center: Vec2, size: f32) -> Self {
        Self::new(center.x, center.y, size, size)
    }
}

/// Regions of the shared atlas texture
pub mod atlas {
    use super::Rect;

    pub const SHIP: Rect = Rect::new(0.0, 0.0, 32.0, 32.0);
    pub const THRUST_FLAME: Rect = Rect::new(32.0, 0.0, 32.0, 32.0);
    pub const BLACK_HOLE: Rect = Rect::new(64.0, 0.0, 32.0, 32.0);
    pub const ENEMY_SHIP: Rect = Rect::new(96.0, 0.0, 32.0, 32.0);
    pub const BULLET: Rect = Rect::new(128.0, 0.0, 8.0, 8.0);

    /// One frame of the horizontal explosion strip
    pub fn explosion_frame(frame: u32) -> Rect {
        Rect::new(frame as f32 * 32.0, 32.0, 32.0, 32.0)
    }
}

/// Tints and text colors
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const HINT: [f32; 4] = [0.7, 0.7, 0.8, 1.0];
    pub const LOSE: [f32; 4] = [1.0, 0.3, 0.2, 1.0];
    pub const VICTORY: [f32; 4] = [0.3, 1.0, 0.4, 1.0];
}

/// Rendered size of the black hole sprite
const BLACK_HOLE_DRAW_SIZE: f32 = 128.0;
/// Flame sits this far behind the ship center
const FLAME_OFFSET: f32 = 16.0;
const TEXT_SIZE: f32 = 20.0;

/// Drawing backend provided by the host
pub trait SpriteRenderer {
    /// Draw `src` from the atlas into `dest`, rotated by `rotation` degrees
    /// around `origin` (relative to the dest top-left).
    fn draw_sprite(&mut self, src: Rect, dest: Rect, origin: Vec2, rotation: f32, tint: [f32; 4]);

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]);
}

/// Host timing info for cosmetic effects
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInfo {
    /// Seconds since the host started
    pub elapsed: f64,
    pub fps: u32,
}

/// Banner text for the current phase, if any
pub fn status_text(phase: GamePhase, hint_timer: f32, settings: &Settings) -> Option<(&'static str, [f32; 4])> {
    match phase {
        GamePhase::Gameplay if settings.show_help_hint && hint_timer > 0.0 => Some((
            "Arrows to steer and thrust, Space to fire, R to restart",
            colors::HINT,
        )),
        GamePhase::Gameplay => None,
        GamePhase::Lose => Some(("Ship destroyed! Press R to restart", colors::LOSE)),
        GamePhase::Victory => Some(("Victory! Press R to play again", colors::VICTORY)),
    }
}

fn draw_ship(out: &mut impl SpriteRenderer, ship: &Ship, src: Rect, settings: &Settings) {
    if !ship.alive {
        return;
    }
    let origin = Vec2::splat(SHIP_SIZE / 2.0);
    out.draw_sprite(src, Rect::centered(ship.pos, SHIP_SIZE), origin, ship.angle, colors::WHITE);

    if ship.thrusting && !settings.reduced_motion {
        let flame_pos = ship.pos - ship.facing() * FLAME_OFFSET;
        out.draw_sprite(
            atlas::THRUST_FLAME,
            Rect::centered(flame_pos, SHIP_SIZE),
            origin,
            ship.angle,
            colors::WHITE,
        );
    }
}

/// Emit every draw call for one frame
pub fn draw_frame(
    out: &mut impl SpriteRenderer,
    snapshot: &SessionSnapshot,
    settings: &Settings,
    frame: FrameInfo,
) {
    draw_ship(out, &snapshot.player, atlas::SHIP, settings);
    draw_ship(out, &snapshot.enemy, atlas::ENEMY_SHIP, settings);

    let bullet_origin = Vec2::new(atlas::BULLET.w / 2.0, atlas::BULLET.h / 2.0);
    for bullet in &snapshot.bullets {
        out.draw_sprite(
            atlas::BULLET,
            Rect::new(bullet.pos.x, bullet.pos.y, atlas::BULLET.w, atlas::BULLET.h),
            bullet_origin,
            bullet.angle,
            colors::WHITE,
        );
    }

    let spin = if settings.spin_black_hole && !settings.reduced_motion {
        (frame.elapsed * BLACK_HOLE_SPIN as f64) as f32
    } else {
        0.0
    };
    out.draw_sprite(
        atlas::BLACK_HOLE,
        Rect::centered(BLACK_HOLE_POS, BLACK_HOLE_DRAW_SIZE),
        Vec2::splat(BLACK_HOLE_DRAW_SIZE / 2.0),
        spin,
        colors::WHITE,
    );

    for explosion in &snapshot.explosions {
        out.draw_sprite(
            atlas::explosion_frame(explosion.frame),
            Rect::new(explosion.pos.x, explosion.pos.y, EXPLOSION_FRAME_SIZE, EXPLOSION_FRAME_SIZE),
            Vec2::ZERO,
            0.0,
            colors::WHITE,
        );
    }

    if let Some((text, color)) = status_text(snapshot.phase, snapshot.hint_timer, settings) {
        out.draw_text(text, Vec2::new(20.0, 20.0), TEXT_SIZE, color);
    }

    if settings.show_fps {
        let fps = format!("{} FPS", frame.fps);
        out.draw_text(&fps, Vec2::new(SCREEN_WIDTH - 100.0, 20.0), TEXT_SIZE, colors::WHITE);
    }
}
