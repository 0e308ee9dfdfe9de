//! Opt-in logging setup for applications embedding the client.
//!
//! The library only emits `tracing` events; nothing is configured at load time. Hosts that
//! want output call [`init_logging`] once (requires the `tracing-subscriber` feature).

/// Filter used when `RUST_LOG` is unset: crate events at `info`, HTTP stack at `warn`.
pub const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,hyper_util=warn,rustls=warn";

/// Installs a fmt subscriber filtered by `RUST_LOG`, or [`DEFAULT_FILTER`].
///
/// Safe to call more than once; later calls leave the existing subscriber in place.
#[cfg(feature = "tracing-subscriber")]
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt().with_env_filter(filter).try_init();
}
