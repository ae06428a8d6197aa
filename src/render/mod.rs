//! Rendering contract
//!
//! The host draws sprites from a single atlas. This module turns a session
//! snapshot into draw calls.

pub mod instance;
pub mod sprites;

pub use instance::{InstanceBatch, SpriteInstance, TextItem};
pub use sprites::{FrameInfo, Rect, SpriteRenderer, atlas, draw_frame, status_text};
