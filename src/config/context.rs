// src/config/context.rs

use std::path::{Path, PathBuf};

/// Ambient process state that config resolution depends on.
///
/// Resolution never calls `std::env::current_dir` itself; it reads from a
/// context, so tests can point it at any directory (or at none).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingContext {
    current_dir: Option<PathBuf>,
    home_dir: Option<PathBuf>,
}

impl WorkingContext {
    /// Capture the current directory and home directory of this process.
    ///
    /// Either may be missing (deleted cwd, no `$HOME`); that is not an error
    /// until something actually needs it.
    pub fn from_process() -> Self {
        Self {
            current_dir: std::env::current_dir().ok(),
            home_dir: dirs::home_dir(),
        }
    }

    /// A context with neither directory known.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }

    pub fn current_dir(&self) -> Option<&Path> {
        self.current_dir.as_deref()
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }
}
