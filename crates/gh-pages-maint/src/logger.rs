//! Terminal logging using env_logger
//!
//! Lines go to stderr as `[timestamp LEVEL target] message`. The level
//! defaults to `info` and can be changed with `RUST_LOG`, e.g.
//! `RUST_LOG=debug cleanup-old-prs`.

use env_logger::{Builder, Env};

/// Initialize logging for a command line run
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let result = Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    if result.is_err() {
        log::debug!("Logger already initialized");
    }
}
