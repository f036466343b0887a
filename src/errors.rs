// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Missing and malformed config files get their own variants so callers (and
//! logs) can tell "nothing there" apart from "something there, but broken".

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirError {
    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("cannot determine working directory: {0}")]
    WorkingDir(String),
}

impl AirError {
    /// True for the "file does not exist" case, as opposed to a file that
    /// exists but could not be read or parsed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AirError::ConfigNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, AirError>;
