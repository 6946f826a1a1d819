//! Logging setup for the command line: `env_logger` on stderr, with the level
//! taken from the `-v` count.

use env_logger::{Builder, Target};
use log::LevelFilter;

/// Maps `-v` repetitions to a level: none is warn, then info, debug, trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Builds the stderr logger for `verbosity` without installing it.
pub fn builder(verbosity: u8) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level_for(verbosity))
        .target(Target::Stderr);
    builder
}

pub fn init(verbosity: u8) {
    builder(verbosity).init();
}
