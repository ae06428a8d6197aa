//! GPU-ready sprite instances
//!
//! A `SpriteRenderer` that records draw calls as flat `#[repr(C)]` records,
//! for hosts that upload one instance buffer per frame.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::sprites::{Rect, SpriteRenderer};

/// One textured quad
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Atlas region: x, y, w, h
    pub src: [f32; 4],
    /// Screen region: x, y, w, h
    pub dest: [f32; 4],
    pub origin: [f32; 2],
    /// Degrees
    pub rotation: f32,
    pub _pad: f32,
    pub tint: [f32; 4],
}

impl SpriteInstance {
    pub fn new(src: Rect, dest: Rect, origin: Vec2, rotation: f32, tint: [f32; 4]) -> Self {
        Self {
            src: [src.x, src.y, src.w, src.h],
            dest: [dest.x, dest.y, dest.w, dest.h],
            origin: origin.to_array(),
            rotation,
            _pad: 0.0,
            tint,
        }
    }
}

/// Text is left to the host's font renderer
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub pos: Vec2,
    pub size: f32,
    pub color: [f32; 4],
}

/// Per-frame collection of instances and text
#[derive(Debug, Default)]
pub struct InstanceBatch {
    pub instances: Vec<SpriteInstance>,
    pub texts: Vec<TextItem>,
}

impl InstanceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop last frame's contents, keeping the allocations
    pub fn clear(&mut self) {
        self.instances.clear();
        self.texts.clear();
    }

    /// Raw bytes for an instance buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl SpriteRenderer for InstanceBatch {
    fn draw_sprite(&mut self, src: Rect, dest: Rect, origin: Vec2, rotation: f32, tint: [f32; 4]) {
        self.instances
            .push(SpriteInstance::new(src, dest, origin, rotation, tint));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: [f32; 4]) {
        self.texts.push(TextItem {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
