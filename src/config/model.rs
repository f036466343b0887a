// src/config/model.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::paths::clean_path;

/// Configuration as read from a TOML document.
///
/// ```toml
/// root = "."
/// watch_dir = ""
/// tmp_dir = "tmp"
///
/// [build]
/// bin = "tmp/main"
/// cmd = "go build -o ./tmp/main main.go"
/// log = "build-errors.log"
/// include_ext = ["go", "tpl", "tmpl", "html"]
/// exclude_dir = ["assets", "tmp", "vendor"]
/// delay = 1000
///
/// [color]
/// main = "magenta"
/// watcher = "cyan"
/// build = "yellow"
/// runner = "green"
/// app = "white"
/// ```
///
/// Every key is optional. A missing key takes the field's zero value (empty
/// string, empty list, `0`), *not* the built-in default for that field; the
/// built-in defaults only apply when no document is used at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Base directory every other relative path is resolved against.
    pub root: String,

    /// Subdirectory of `root` to watch instead of `root` itself.
    pub watch_dir: String,

    /// Subdirectory of `root` for build artifacts and logs.
    pub tmp_dir: String,

    pub build: BuildSection,

    pub color: ColorSection,
}

/// `[build]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Binary produced by `cmd`, relative to root.
    pub bin: String,

    /// Shell command that builds `bin`.
    pub cmd: String,

    /// Build log filename, placed inside the tmp dir.
    pub log: String,

    /// File extensions (without the dot) that trigger a rebuild.
    pub include_ext: Vec<String>,

    /// Directory names never watched.
    pub exclude_dir: Vec<String>,

    /// Delay before rebuilding after a change, in milliseconds.
    pub delay: u64,
}

impl BuildSection {
    /// Whether `ext` is one of the watched extensions. A leading `.` is
    /// ignored, so `"go"` and `".go"` are equivalent.
    pub fn includes_ext(&self, ext: &str) -> bool {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.include_ext.iter().any(|e| e == ext)
    }

    /// Whether `dir` is one of the excluded directories. Both sides are
    /// compared in cleaned form.
    pub fn excludes_dir(&self, dir: &str) -> bool {
        let dir = clean_path(dir);
        self.exclude_dir.iter().any(|d| clean_path(d) == dir)
    }
}

/// `[color]` section: one color name per logical output role.
///
/// Names are passed through untouched; nothing checks them against a palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSection {
    pub main: String,
    pub watcher: String,
    pub build: String,
    pub runner: String,
    pub app: String,
}

impl ColorSection {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::Main => &self.main,
            ColorRole::Watcher => &self.watcher,
            ColorRole::Build => &self.build,
            ColorRole::Runner => &self.runner,
            ColorRole::App => &self.app,
        }
    }
}

/// The fixed set of roles that get their own log color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorRole {
    Main,
    Watcher,
    Build,
    Runner,
    App,
}

impl ColorRole {
    pub const ALL: [ColorRole; 5] = [
        ColorRole::Main,
        ColorRole::Watcher,
        ColorRole::Build,
        ColorRole::Runner,
        ColorRole::App,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorRole::Main => "main",
            ColorRole::Watcher => "watcher",
            ColorRole::Build => "build",
            ColorRole::Runner => "runner",
            ColorRole::App => "app",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
