//! Log subscriber setup for binaries.
//!
//! The library only emits `tracing` events; it never installs a subscriber.
//! Binaries call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "welcome_screen=info,simulator=info";

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter { EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)) }

/// Install a `fmt` subscriber on stderr.
///
/// A second call (or a subscriber installed elsewhere) is reported through
/// the existing subscriber and otherwise ignored.
pub fn init() {
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(env_filter()).with_writer(std::io::stderr).try_init() {
        tracing::warn!(%err, "log subscriber already installed");
    }
}
