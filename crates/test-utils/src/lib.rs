pub mod builders;

use std::sync::Once;

use air::logging::{build_filter, LOG_ENV};
use tracing_subscriber::fmt;

static INIT: Once = Once::new();

/// Route `air` logs into the test harness.
///
/// Uses the same filter rules as the binary, so `AIR_LOG=air::config=debug`
/// shows the loader's fallback decisions. Output is captured per test and
/// only printed for failures (or with `-- --nocapture`).
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV).ok();
        let Ok(filter) = build_filter(None, directives.as_deref()) else {
            return;
        };

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
