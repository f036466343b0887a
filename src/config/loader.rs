// src/config/loader.rs

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::context::WorkingContext;
use crate::config::defaults::{default_config, DEFAULT_CONFIG_FILE};
use crate::config::model::RawConfig;
use crate::config::resolved::Config;
use crate::errors::{AirError, Result};
use crate::fs::{FileSystem, RealFileSystem};

/// Where the config should come from.
///
/// `Found` is a caller-supplied path and must load. `NotProvided` means "look
/// for `.air.conf` in the current directory, and quietly fall back to the
/// built-in config if that does not work out".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLookup {
    Found(PathBuf),
    NotProvided,
}

impl ConfigLookup {
    /// Map a command-line style argument: empty means not provided, anything
    /// else is used verbatim.
    pub fn from_arg(path: &str) -> Self {
        if path.is_empty() {
            ConfigLookup::NotProvided
        } else {
            ConfigLookup::Found(PathBuf::from(path))
        }
    }
}

impl From<Option<PathBuf>> for ConfigLookup {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => ConfigLookup::Found(path),
            _ => ConfigLookup::NotProvided,
        }
    }
}

/// Read and parse a config document. No normalization happens here.
pub fn load_from_path(fs: &dyn FileSystem, path: &Path) -> Result<RawConfig> {
    let contents = fs.read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            AirError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AirError::ConfigRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    toml::from_str(&contents).map_err(|source| AirError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolves a [`Config`] from a filesystem and a working context.
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader<'a> {
    fs: &'a dyn FileSystem,
    ctx: &'a WorkingContext,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(fs: &'a dyn FileSystem, ctx: &'a WorkingContext) -> Self {
        Self { fs, ctx }
    }

    /// `.air.conf` in the context's current directory, if that is known.
    pub fn conventional_path(&self) -> Option<PathBuf> {
        self.ctx.current_dir().map(|dir| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Load, fall back and normalize.
    ///
    /// Errors for an explicit path always surface. For the implicit lookup,
    /// read and parse failures are logged and replaced by the built-in
    /// config. Normalization errors surface in both cases.
    pub fn resolve(&self, lookup: ConfigLookup) -> Result<Config> {
        match lookup {
            ConfigLookup::Found(path) => {
                let raw = load_from_path(self.fs, &path)?;
                info!(path = %path.display(), "loaded config file");
                Config::normalize(raw, self.ctx)
            }
            ConfigLookup::NotProvided => self.resolve_implicit(),
        }
    }

    fn resolve_implicit(&self) -> Result<Config> {
        let Some(path) = self.conventional_path() else {
            debug!("working directory unavailable, using built-in config");
            return Ok(Config::without_root_expansion(default_config()));
        };

        let raw = match load_from_path(self.fs, &path) {
            Ok(raw) => {
                info!(path = %path.display(), "loaded config file");
                raw
            }
            Err(err) if err.is_not_found() => {
                debug!(path = %path.display(), "no config file, using built-in config");
                default_config()
            }
            Err(err) => {
                warn!(error = %err, "ignoring config file, using built-in config");
                default_config()
            }
        };

        Config::normalize(raw, self.ctx)
    }
}

/// Resolve against the real filesystem and this process's directories.
///
/// `path` follows the command-line convention: `""` triggers the implicit
/// `.air.conf` lookup.
pub fn resolve(path: &str) -> Result<Config> {
    let ctx = WorkingContext::from_process();
    ConfigLoader::new(&RealFileSystem, &ctx).resolve(ConfigLookup::from_arg(path))
}
