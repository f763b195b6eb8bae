// entroscan/src/logger.rs
//! Logger bootstrap for the `entroscan` binary.
//!
//! Logs always go to stderr; stdout carries only the scan report.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter applied when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Initializes the global logger.
///
/// `Some(level)` pins every module to `level` and ignores `RUST_LOG`.
/// `None` honours `RUST_LOG`, falling back to `warn`. Calling this more than
/// once is harmless; only the first call takes effect.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = match level {
        Some(level) => {
            let mut builder = Builder::new();
            builder.filter_level(level);
            builder
        }
        None => Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)),
    };

    let _ = builder
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
}
