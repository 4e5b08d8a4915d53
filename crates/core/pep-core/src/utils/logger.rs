//! Logging utilities

use once_cell::sync::OnceCell;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Logger wrapper for component-specific logging
#[derive(Clone)]
pub struct Logger {
    namespace: String,
}

impl Logger {
    /// Create a new logger with a namespace
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Log a success message (info level with prefix)
    pub fn success(&self, message: &str) {
        info!("[{}] ✓ {}", self.namespace, message);
    }
}

/// Initialize the global logging system
///
/// `RUST_LOG` wins when set; otherwise `PEP_LOG_LEVEL` (default `info`).
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let level = std::env::var("PEP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| level.into());

        // Another subscriber may already be installed by the host process.
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    });
}
