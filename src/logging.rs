// src/logging.rs

//! Logging setup for `air` using `tracing` + `tracing-subscriber`.
//!
//! `--log-level` sets one level for everything. Without it, `AIR_LOG` is read
//! as an `EnvFilter` directive list, so the config loader can be singled out:
//!
//! ```text
//! AIR_LOG=air::config=debug air      # show why .air.conf was skipped
//! AIR_LOG=warn,air::config::loader=trace air
//! ```
//!
//! With neither, only `info` and above is shown. Logs go to stderr; stdout
//! carries the config report.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "AIR_LOG";

const DEFAULT_DIRECTIVES: &str = "info";

/// Initialise the global logging subscriber from the CLI flag and `AIR_LOG`.
///
/// Call once at startup. Malformed `AIR_LOG` directives are an error rather
/// than being silently ignored.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let filter = build_filter(cli_level, env.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Pick the filter: the CLI level wins, then non-blank `env_directives`,
/// then the `info` default.
pub fn build_filter(cli_level: Option<LogLevel>, env_directives: Option<&str>) -> Result<EnvFilter> {
    if let Some(level) = cli_level {
        return Ok(EnvFilter::new(level_directive(level)));
    }

    match env_directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid {LOG_ENV} directives: {directives:?}")),
        None => Ok(EnvFilter::new(DEFAULT_DIRECTIVES)),
    }
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}
