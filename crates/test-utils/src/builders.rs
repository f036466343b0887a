#![allow(dead_code)]

use air::config::{Config, RawConfig, WorkingContext};

/// Builder for `RawConfig` to simplify test setup.
///
/// Starts from the all-zero config, the same shape an empty TOML document
/// parses into.
pub struct RawConfigBuilder {
    config: RawConfig,
}

impl RawConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfig::default(),
        }
    }

    /// Start from the built-in defaults instead of zero values.
    pub fn from_defaults() -> Self {
        Self {
            config: air::config::default_config(),
        }
    }

    pub fn root(mut self, root: &str) -> Self {
        self.config.root = root.to_string();
        self
    }

    pub fn watch_dir(mut self, dir: &str) -> Self {
        self.config.watch_dir = dir.to_string();
        self
    }

    pub fn tmp_dir(mut self, dir: &str) -> Self {
        self.config.tmp_dir = dir.to_string();
        self
    }

    pub fn bin(mut self, bin: &str) -> Self {
        self.config.build.bin = bin.to_string();
        self
    }

    pub fn cmd(mut self, cmd: &str) -> Self {
        self.config.build.cmd = cmd.to_string();
        self
    }

    pub fn log(mut self, log: &str) -> Self {
        self.config.build.log = log.to_string();
        self
    }

    pub fn include_ext(mut self, ext: &str) -> Self {
        self.config.build.include_ext.push(ext.to_string());
        self
    }

    pub fn exclude_dir(mut self, dir: &str) -> Self {
        self.config.build.exclude_dir.push(dir.to_string());
        self
    }

    pub fn delay(mut self, millis: u64) -> Self {
        self.config.build.delay = millis;
        self
    }

    pub fn build(self) -> RawConfig {
        self.config
    }

    /// Build and normalize against a context whose current dir is `cwd`.
    pub fn normalize_in(self, cwd: &str) -> Config {
        let ctx = WorkingContext::detached().with_current_dir(cwd);
        Config::normalize(self.config, &ctx).expect("Failed to normalize config from builder")
    }
}

impl Default for RawConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
