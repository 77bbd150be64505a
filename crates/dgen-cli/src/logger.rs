//! stderr logging for the binary

use env_logger::{Builder, Env};
use log::{LevelFilter, SetLoggerError};

/// Map the number of `-v` flags to a level: warn, info, debug, then trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG`, when set, refines the `-v` level.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    Builder::new()
        .filter_level(level_for(verbosity))
        .parse_env(Env::default())
        .format_timestamp(None)
        .try_init()
}
