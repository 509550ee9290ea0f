//! Save-data storage stub
//!
//! Resolves where save data would live and marks storage ready. Nothing is
//! read or written yet.

use std::path::{Path, PathBuf};

use log::info;

/// Directory name under the platform data dir
const APP_DIR: &str = "mobile-game-template";

#[derive(Debug, Clone, Default)]
pub struct Storage {
    dir: Option<PathBuf>,
    ready: bool,
}

impl Storage {
    /// Resolve the save directory. Safe to call more than once.
    pub fn init(&mut self) {
        if self.ready {
            return;
        }
        self.dir = data_dir();
        match &self.dir {
            Some(dir) => info!("Storage ready at {}", dir.display()),
            None => info!("Storage ready (no data directory on this platform)"),
        }
        self.ready = true;
    }

    #[allow(dead_code)]
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> Option<&Path> {
        self.dir.as_deref()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}

#[cfg(target_arch = "wasm32")]
fn data_dir() -> Option<PathBuf> {
    None
}
