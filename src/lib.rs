// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod paths;

use std::fmt::Write as _;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{Config, ConfigLoader, ConfigLookup, WorkingContext};
use crate::fs::RealFileSystem;

/// High-level entry point used by `main.rs`.
///
/// Resolves the config once (explicit `-c` path, or the implicit `.air.conf`
/// lookup) and prints it. Watching, building and running live in other
/// components that consume the resolved [`Config`].
pub fn run(args: CliArgs) -> Result<()> {
    let ctx = WorkingContext::from_process();
    let lookup = ConfigLookup::from(args.config);
    let cfg = ConfigLoader::new(&RealFileSystem, &ctx).resolve(lookup)?;

    if args.toml {
        let text = toml::to_string_pretty(cfg.raw()).context("serializing config to TOML")?;
        print!("{text}");
    } else {
        print!("{}", render_summary(&cfg));
    }

    debug!("config report complete");
    Ok(())
}

/// Human-readable report of a resolved config and its derived paths.
pub fn render_summary(cfg: &Config) -> String {
    let build = cfg.build();
    let mut out = String::new();

    let _ = writeln!(out, "air config");
    let _ = writeln!(out, "  root        = {}", cfg.root().display());
    let _ = writeln!(out, "  watch root  = {}", cfg.watch_root().display());
    let _ = writeln!(out, "  tmp path    = {}", cfg.tmp_path().display());
    let _ = writeln!(out, "  bin path    = {}", cfg.bin_path().display());
    let _ = writeln!(out, "  build log   = {}", cfg.build_log_path().display());
    let _ = writeln!(out, "  build delay = {:?}", cfg.build_delay());
    let _ = writeln!(out, "  build cmd   = {}", build.cmd);
    let _ = writeln!(out, "  include_ext = {:?}", build.include_ext);
    let _ = writeln!(out, "  exclude_dir = {:?}", build.exclude_dir);
    let _ = writeln!(out);

    let _ = writeln!(out, "colors:");
    for (role, color) in cfg.color_info() {
        let _ = writeln!(out, "  {role:<8} {color}");
    }

    out
}
