//! Startup failures reported to the host
//!
//! The simulation itself never fails; only asset and settings loading can.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StartupError {
    /// No `resources` directory in any searched location
    ResourceDirNotFound { searched: Vec<PathBuf> },
    /// Resource directory exists but the atlas image is missing
    MissingAtlas { path: PathBuf },
    InvalidSettings(serde_json::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceDirNotFound { searched } => {
                write!(f, "resource directory not found (searched {} locations", searched.len())?;
                for path in searched {
                    write!(f, ", {}", path.display())?;
                }
                write!(f, ")")
            }
            Self::MissingAtlas { path } => write!(f, "atlas image missing: {}", path.display()),
            Self::InvalidSettings(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidSettings(err) => Some(err),
            _ => None,
        }
    }
}
