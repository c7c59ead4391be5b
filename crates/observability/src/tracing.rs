//! Tracing subscriber initialization.
//!
//! The domain crates only emit `tracing` events; whoever hosts them decides
//! whether anything is listening. This module is the default listener.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// One JSON object per event, written to `writer` and filtered by `filter`.
///
/// Event fields land under the `fields` key; the target is omitted.
pub fn json_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl ::tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(SystemTime)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

/// Install [`json_subscriber`] on stdout, filtered by `RUST_LOG` (default `info`).
///
/// Returns quietly if a global subscriber is already set.
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = json_subscriber(filter, std::io::stdout).try_init();
}
