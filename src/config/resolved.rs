// src/config/resolved.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::context::WorkingContext;
use crate::config::defaults::DEFAULT_TMP_DIR;
use crate::config::model::{BuildSection, ColorRole, ColorSection, RawConfig};
use crate::errors::{AirError, Result};
use crate::paths::{clean_path, expand_path, join_path, relative_path};

/// A normalized configuration, ready for the watcher, builder, runner and
/// logger.
///
/// Produced only by [`Config::normalize`] (or the loader). There are no
/// setters: once built the value is read-only, so it can be shared across
/// threads by reference or behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    raw: RawConfig,
    root: PathBuf,
}

impl Config {
    /// Normalize a raw configuration:
    ///
    /// 1. expand `root` to an absolute, cleaned path (`~`, `.`, `..`),
    /// 2. fill in `tmp_dir` if it is empty,
    /// 3. clean every `build.exclude_dir` entry in place, keeping order and
    ///    duplicates.
    ///
    /// Fails when `root` is relative and the context has no current
    /// directory to resolve it against, or when the expanded root is not
    /// valid UTF-8.
    pub fn normalize(raw: RawConfig, ctx: &WorkingContext) -> Result<Config> {
        let root = expand_path(&raw.root, ctx)?
            .into_os_string()
            .into_string()
            .map_err(|root| AirError::NonUtf8Path(PathBuf::from(root)))?;
        Ok(Self::finish(raw, root))
    }

    /// Like [`Config::normalize`] but leaves `root` exactly as written.
    ///
    /// Only used for the built-in fallback when the working directory is
    /// unknown; the `"."` root is then interpreted by whoever uses it.
    pub(crate) fn without_root_expansion(raw: RawConfig) -> Config {
        let root = raw.root.clone();
        Self::finish(raw, root)
    }

    fn finish(mut raw: RawConfig, root: String) -> Config {
        if raw.tmp_dir.is_empty() {
            raw.tmp_dir = DEFAULT_TMP_DIR.to_string();
        }
        for dir in raw.build.exclude_dir.iter_mut() {
            *dir = clean_path(dir);
        }
        let root_path = PathBuf::from(&root);
        raw.root = root;
        Config {
            raw,
            root: root_path,
        }
    }

    /// The normalized values in their document shape.
    pub fn raw(&self) -> &RawConfig {
        &self.raw
    }

    pub fn into_raw(self) -> RawConfig {
        self.raw
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn watch_dir(&self) -> &str {
        &self.raw.watch_dir
    }

    pub fn tmp_dir(&self) -> &str {
        &self.raw.tmp_dir
    }

    pub fn build(&self) -> &BuildSection {
        &self.raw.build
    }

    pub fn color(&self) -> &ColorSection {
        &self.raw.color
    }

    /// Directory the watcher should observe: `watch_dir` under root, or root
    /// itself when `watch_dir` is empty.
    pub fn watch_root(&self) -> PathBuf {
        if self.raw.watch_dir.is_empty() {
            self.root.clone()
        } else {
            self.full_path(&self.raw.watch_dir)
        }
    }

    pub fn build_log_path(&self) -> PathBuf {
        join_path(&self.tmp_path(), &self.raw.build.log)
    }

    pub fn build_delay(&self) -> Duration {
        Duration::from_millis(self.raw.build.delay)
    }

    /// `path` joined onto root and cleaned.
    pub fn full_path(&self, path: impl AsRef<Path>) -> PathBuf {
        join_path(&self.root, path)
    }

    pub fn bin_path(&self) -> PathBuf {
        self.full_path(&self.raw.build.bin)
    }

    pub fn tmp_path(&self) -> PathBuf {
        self.full_path(&self.raw.tmp_dir)
    }

    /// `path` relative to root, or `None` if there is no such relative path
    /// (e.g. a different volume on Windows).
    pub fn relative_path(&self, path: impl AsRef<Path>) -> Option<PathBuf> {
        relative_path(&self.root, path.as_ref())
    }

    /// Color name for every role, keyed by role.
    pub fn color_info(&self) -> BTreeMap<ColorRole, &str> {
        ColorRole::ALL
            .iter()
            .map(|&role| (role, self.raw.color.get(role)))
            .collect()
    }
}
