//! Logging setup
//!
//! Logs go to stderr through env_logger so they never interleave with
//! table output on stdout. The level defaults to `warn` and follows
//! `RUST_LOG` when set.

use env_logger::Env;

const DEFAULT_FILTER: &str = "warn";

/// Initialize the global logger
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp_secs()
        .init();
}
