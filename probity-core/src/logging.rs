//! Test logging bootstrap
//!
//! Assertion failures and filler seeds are emitted through `tracing`. Tests
//! that want to see them call [`init_test_logging`] once; the output goes
//! through libtest's capture so it only shows for failing tests.

use std::sync::Once;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "probity=debug,warn";

static INIT: Once = Once::new();

/// Install a test-friendly subscriber. Safe to call from every test.
///
/// Returns `false` when another global subscriber was already installed.
pub fn init_test_logging() -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        installed = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init()
            .is_ok();
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_test_logging();
        assert!(!init_test_logging());
        tracing::debug!(target: "probity", "logging initialized");
    }
}
