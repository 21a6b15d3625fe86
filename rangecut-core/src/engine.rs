// rangecut-core/src/engine.rs
//! Defines the core RemovalEngine trait.
//!
//! The `RemovalEngine` trait decouples callers (the CLI, the headless helpers)
//! from the concrete range-removal implementation. Engines are pure: they take
//! an in-memory line sequence and return a fresh result, holding no state
//! between calls.
//!
//! License: MIT OR APACHE 2.0

use crate::config::ScanConfig;
use crate::removal::{ScanResult, ScanStats};

/// A trait that defines the core functionality of a removal engine.
pub trait RemovalEngine: Send + Sync {
    /// Removes every marker-delimited range from `lines`.
    ///
    /// Returns the cleaned lines, the log of removed ranges and the number of
    /// words removed. This never fails: every line falls through one of the
    /// engine's branches.
    fn scan(&self, lines: &[String]) -> ScanResult;

    /// Runs a scan but only reports the counts.
    ///
    /// Used by the `scan` command, which never writes cleaned output.
    fn analyze_for_stats(&self, lines: &[String]) -> ScanStats {
        self.scan(lines).stats()
    }

    /// Returns a reference to the engine's configuration.
    fn get_config(&self) -> &ScanConfig;
}
