//! Development-time tracing for debugging the SDK and its callers.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to stderr.
//!   Not part of the agent's log contract.
//!
//! - **Structured log records ([`crate::log`])**: One JSON line per call on
//!   stdout/stderr. Always written, unaffected by `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format. Calling it twice is a no-op.
///
/// # Example
/// ```bash
/// RUST_LOG=aegis_sdk=debug cargo run -p simple-task
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Both demos and their tests may call this more than once; a second
    // global subscriber is refused, and the first one stays in place.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
