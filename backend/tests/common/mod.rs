//! Shared test helpers

use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness (visible with --nocapture)
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Sample sequence used across tests
pub const WORDS: [&str; 5] = ["hello", "to", "you", "my", "friend"];
