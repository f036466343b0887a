// src/config/mod.rs

//! Configuration resolution.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`) and built-in values
//!   (`defaults.rs`).
//! - Locate and load a config file, or fall back (`loader.rs`).
//! - Normalize paths and expose derived accessors (`resolved.rs`).

pub mod context;
pub mod defaults;
pub mod loader;
pub mod model;
pub mod resolved;

pub use context::WorkingContext;
pub use defaults::{default_config, DEFAULT_CONFIG_FILE, DEFAULT_TMP_DIR};
pub use loader::{load_from_path, resolve, ConfigLoader, ConfigLookup};
pub use model::{BuildSection, ColorRole, ColorSection, RawConfig};
pub use resolved::Config;
