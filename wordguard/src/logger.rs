// wordguard/src/logger.rs
//! Logger initialization for the wordguard CLI.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`.
///
/// `level` forces a level for every module; `None` defers to `RUST_LOG`,
/// falling back to `warn`. Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}
