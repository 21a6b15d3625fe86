// rangecut/src/logger.rs
//! Logging setup for the rangecut CLI.
//!
//! Messages go to stderr as `[LEVEL target] message`. `RUST_LOG` is honoured
//! unless an explicit level is passed in, which always wins.

use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger. Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::new();
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });

    match std::env::var("RUST_LOG") {
        Ok(spec) if !spec.trim().is_empty() => {
            builder.parse_filters(&spec);
        }
        _ => {
            builder.filter_level(LevelFilter::Warn);
        }
    }

    if let Some(level) = level {
        builder.filter_level(level);
    }

    let _ = builder.target(env_logger::Target::Stderr).try_init();
}

/// Picks the effective level from the global CLI flags.
///
/// `None` leaves the decision to `RUST_LOG`.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug && !disable_debug {
        Some(LevelFilter::Debug)
    } else if disable_debug {
        let from_env = std::env::var("RUST_LOG")
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();
        if from_env.contains("debug") || from_env.contains("trace") {
            Some(LevelFilter::Info)
        } else {
            None
        }
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_from_flags(true, true, false), Some(LevelFilter::Off));
    }

    #[test]
    fn debug_flag_forces_debug() {
        assert_eq!(level_from_flags(false, true, false), Some(LevelFilter::Debug));
    }
}
