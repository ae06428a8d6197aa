//! Presentation preferences
//!
//! Gameplay tuning is fixed in `consts`; these only change what gets drawn.
//! The host decides where the JSON comes from.

use serde::{Deserialize, Serialize};

use crate::error::StartupError;

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show the controls hint at the start of a round
    pub show_help_hint: bool,
    /// Show FPS counter
    pub show_fps: bool,
    /// Rotate the black hole sprite over time
    pub spin_black_hole: bool,
    /// Reduced motion (no spin, no thrust flame)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_help_hint: true,
            show_fps: false,
            spin_black_hole: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Parse settings; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, StartupError> {
        let settings = serde_json::from_str(json).map_err(StartupError::InvalidSettings)?;
        log::info!("Loaded settings");
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain struct of bools, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
