// src/config/defaults.rs

//! Built-in configuration used when no config file applies.

use crate::config::model::{BuildSection, ColorSection, RawConfig};

/// Filename looked up in the current directory when no `-c` path is given.
pub const DEFAULT_CONFIG_FILE: &str = ".air.conf";

/// Tmp dir used when a config leaves `tmp_dir` empty.
pub const DEFAULT_TMP_DIR: &str = "tmp";

#[cfg(not(windows))]
const DEFAULT_BUILD_CMD: &str = "go build -o ./tmp/main main.go";
#[cfg(windows)]
const DEFAULT_BUILD_CMD: &str = "go build -o ./tmp/main.exe main.go";

/// The complete built-in configuration.
pub fn default_config() -> RawConfig {
    let build = BuildSection {
        bin: "tmp/main".to_string(),
        cmd: DEFAULT_BUILD_CMD.to_string(),
        log: "build-errors.log".to_string(),
        include_ext: to_strings(&["go", "tpl", "tmpl", "html"]),
        exclude_dir: to_strings(&["assets", "tmp", "vendor"]),
        delay: 1000,
    };
    let color = ColorSection {
        main: "magenta".to_string(),
        watcher: "cyan".to_string(),
        build: "yellow".to_string(),
        runner: "green".to_string(),
        app: "white".to_string(),
    };
    RawConfig {
        root: ".".to_string(),
        watch_dir: String::new(),
        tmp_dir: DEFAULT_TMP_DIR.to_string(),
        build,
        color,
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
