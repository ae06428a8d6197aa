//! Explosion sprite animations
//!
//! Stepped on render frames, not simulation time. Finished entries stay in
//! the list and are recycled by later spawns; the list never grows past
//! `MAX_EXPLOSIONS`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub frame: u32,
    pub frame_count: u32,
    /// Top-left corner of the sprite
    pub pos: Vec2,
    pub stopped: bool,
}

impl Explosion {
    /// A fresh animation centered on `center`
    pub fn at(center: Vec2) -> Self {
        Self {
            frame: 0,
            frame_count: EXPLOSION_FRAMES,
            pos: center - Vec2::splat(EXPLOSION_FRAME_SIZE / 2.0),
            stopped: false,
        }
    }

    fn step(&mut self) {
        if self.stopped {
            return;
        }
        self.frame += 1;
        if self.frame >= self.frame_count {
            self.stopped = true;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Explosions {
    entries: Vec<Explosion>,
    /// Render frames seen since creation
    render_frames: u32,
}

impl Explosions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start an explosion at `center`. Returns false if every slot is still playing.
    pub fn spawn(&mut self, center: Vec2) -> bool {
        let explosion = Explosion::at(center);

        if let Some(slot) = self.entries.iter_mut().find(|e| e.stopped) {
            *slot = explosion;
        } else if self.entries.len() < MAX_EXPLOSIONS {
            self.entries.push(explosion);
        } else {
            log::warn!("Explosion list full, dropping explosion at {:?}", center);
            return false;
        }

        log::debug!("Explosion spawned at {:?}", center);
        true
    }

    /// Called once per render frame
    pub fn advance(&mut self) {
        self.render_frames = self.render_frames.wrapping_add(1);
        if !self.render_frames.is_multiple_of(EXPLOSION_FRAME_INTERVAL) {
            return;
        }
        for explosion in &mut self.entries {
            explosion.step();
        }
    }

    /// Animations still on screen
    pub fn playing(&self) -> impl Iterator<Item = &Explosion> {
        self.entries.iter().filter(|e| !e.stopped)
    }

    /// All retained entries, finished ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
