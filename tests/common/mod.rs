#![allow(dead_code)]

pub use air_test_utils::builders::RawConfigBuilder;
pub use air_test_utils::init_tracing;

use air::config::WorkingContext;

/// Context rooted at `/work` with home `/home/dev`.
pub fn work_ctx() -> WorkingContext {
    WorkingContext::detached()
        .with_current_dir("/work")
        .with_home_dir("/home/dev")
}
