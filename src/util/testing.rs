//! Shared logging for unit and integration tests
//!
//! Call [`init_test_setup`] from a `#[ctor::ctor]` in each test binary. Output
//! goes through the test writer, so it only shows for failing tests or with
//! `--nocapture`.

use std::sync::Once;

use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset: everything this crate emits, wire frames included.
const DEFAULT_TEST_FILTER: &str = "rain8net=trace";

/// Targets whose events never reach test output.
const QUIET_TARGETS: [&str; 1] = ["serialport"];

static TEST_LOGGING: Once = Once::new();

/// Install the test subscriber once per process; later calls are no-ops.
pub fn init_test_setup() {
    TEST_LOGGING.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
        let quiet = filter_fn(|metadata| {
            !QUIET_TARGETS
                .iter()
                .any(|target| metadata.target().starts_with(target))
        });

        let layer = fmt::layer()
            .with_test_writer()
            .with_target(true)
            .without_time()
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(quiet)
            .with_filter(env_filter);

        // another harness may have installed a subscriber first
        if tracing_subscriber::registry().with(layer).try_init().is_ok() {
            tracing::debug!("test logging ready ({DEFAULT_TEST_FILTER} unless RUST_LOG is set)");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_repeated_calls_when_initialising_then_second_is_noop() {
        init_test_setup();
        init_test_setup();
        assert!(TEST_LOGGING.is_completed());
    }
}
