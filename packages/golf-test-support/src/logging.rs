//! Tracing subscriber shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static SUBSCRIBER: OnceCell<()> = OnceCell::new();

/// Install a test-writer subscriber once per process.
///
/// `TEST_LOG` selects the filter, falling back to `RUST_LOG` and then `warn`.
/// Calling it again, or after another subscriber was installed, is a no-op.
pub fn init() {
    SUBSCRIBER.get_or_init(|| {
        let directives = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "warn".to_string());

        let _ = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
