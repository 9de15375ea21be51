//! Diagnostic logging for the benchmark programs.
//!
//! Logs go to stderr so that stdout carries only the program's results.
//! The level comes from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Install the global `tracing` subscriber.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::warn!("logging initialised twice");
    }
}
