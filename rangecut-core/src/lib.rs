// rangecut-core/src/lib.rs
//! # rangecut Core Library
//!
//! `rangecut-core` provides the platform-independent logic for removing
//! marker-delimited ranges from documents. Given a document as a sequence of
//! lines and a start/end marker pair, it removes everything from the first
//! start-marker occurrence through the next end-marker occurrence (possibly
//! across many lines), keeps all text outside those ranges, records each
//! removed range and counts the words removed.
//!
//! The engine is pure and stateless: it performs no I/O, holds no global
//! configuration and can be shared freely between threads.
//!
//! ## Modules
//!
//! * `config`: `MarkerSpec`, `ScanConfig` and `CollationPolicy`, with YAML loading and merging.
//! * `matchers`: compiles marker specs into literal, optionally whole-word matchers.
//! * `engine`: the `RemovalEngine` trait.
//! * `engines`: concrete engines; `RangeEngine` is the two-state range scanner.
//! * `removal`: `RemovalRange`, `ScanResult`, `ScanStats` and word counting.
//! * `collate`: the caller-owned formatting pass applied before rendering.
//! * `document`: document source and sink boundaries plus output path naming.
//! * `headless`: one-shot helpers and the `CleanReport`.
//! * `errors`: the `RangecutError` enum.
//!
//! ## Usage Example
//!
//! ```rust
//! use rangecut_core::{RangeEngine, RemovalEngine, ScanConfig};
//!
//! let config = ScanConfig::for_markers("Selected Answer:", "Answers:");
//! let engine = RangeEngine::new(config).unwrap();
//!
//! let lines: Vec<String> = [
//!     "Q1: What is 2+2?",
//!     "Selected Answer: 4",
//!     "Answers: 3, 4, 5",
//!     "Q2: next",
//! ]
//! .iter()
//! .map(|s| s.to_string())
//! .collect();
//!
//! let result = engine.scan(&lines);
//! assert_eq!(result.cleaned_lines, vec!["Q1: What is 2+2?", "", " 3, 4, 5", "Q2: next"]);
//! assert_eq!(result.removed_ranges.len(), 1);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `RangecutError`; configuration loading uses
//! `anyhow::Error` with file-path context. Scanning itself never fails.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod collate;
pub mod config;
pub mod document;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod matchers;
pub mod removal;

/// Re-exports the configuration types and helpers.
pub use config::{
    merge_config, user_config_path, validate_config, CollationPolicy, ConfigOverrides,
    MarkerSpec, ScanConfig, MAX_MARKER_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RangecutError;

/// Re-exports the engine trait and its default implementation.
pub use engine::RemovalEngine;
pub use engines::range_engine::{scan_lines, RangeEngine, RetainPolicy};

pub use matchers::compiler::{compile_marker, MarkerMatch, MarkerMatcher};

/// Re-exports result records and word counting.
pub use removal::{count_words, RemovalRange, ScanResult, ScanStats};

pub use collate::collate;

/// Re-exports the document boundary.
pub use document::{
    derive_cleaned_path, write_rendered, DocumentSink, DocumentSource, PlainTextSink,
    StringSource, TextFileSource,
};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_clean_document, headless_clean_file, headless_scan_lines, CleanReport};
