//! Tracing setup for the `budget` binary
//!
//! Log output goes to stderr so it never mixes with command output. The
//! filter comes from `BUDGET_LOG` (same syntax as `RUST_LOG`) and defaults to
//! warnings only.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BUDGET_LOG";

const DEFAULT_FILTER: &str = "budget_tracker=warn";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber; later calls are no-ops
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
