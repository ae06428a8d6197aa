//! Platform glue the host shares
//!
//! Locates the `resources` directory holding the sprite atlas. Searched from
//! the working directory and the executable's directory, walking up a few
//! parents so `cargo run` from a workspace also finds it.

use std::path::{Path, PathBuf};

use crate::error::StartupError;

pub const RESOURCE_DIR: &str = "resources";
pub const ATLAS_FILE: &str = "atlas.png";
/// Parent directories checked above each search root
const MAX_PARENT_DEPTH: usize = 3;

/// Find `resources` under any root or its first few ancestors
pub fn find_resource_dir(roots: &[PathBuf]) -> Result<PathBuf, StartupError> {
    let mut searched = Vec::new();

    for root in roots {
        for dir in root.ancestors().take(MAX_PARENT_DEPTH + 1) {
            let candidate = dir.join(RESOURCE_DIR);
            if candidate.is_dir() {
                log::info!("Using resource directory {}", candidate.display());
                return Ok(candidate);
            }
            searched.push(candidate);
        }
    }

    Err(StartupError::ResourceDirNotFound { searched })
}

/// Path to the atlas inside a resource directory, which must exist
pub fn atlas_path(resource_dir: &Path) -> Result<PathBuf, StartupError> {
    let path = resource_dir.join(ATLAS_FILE);
    if path.is_file() {
        Ok(path)
    } else {
        Err(StartupError::MissingAtlas { path })
    }
}

/// Default search: working directory, then the executable's directory
pub fn locate_atlas() -> Result<PathBuf, StartupError> {
    let mut roots = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }
    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    let dir = find_resource_dir(&roots)?;
    atlas_path(&dir)
}
