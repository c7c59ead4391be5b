//! Logging setup shared by the Gilded Rose crates.

/// Initialize process-wide tracing output.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber construction (filters, formatting).
pub mod tracing;

pub use self::tracing::json_subscriber;
pub use tracing_subscriber::EnvFilter;
