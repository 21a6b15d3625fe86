// rangecut-core/src/removal.rs
//! Provides core data structures and utility functions for recording removed
//! ranges and reporting removal statistics.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

lazy_static! {
    /// Whether removed text may appear verbatim in debug logs.
    static ref CONTENT_DEBUG_ALLOWED: bool = {
        std::env::var("RANGECUT_ALLOW_DEBUG_CONTENT")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// One closed span of removed text.
///
/// Same-line ranges carry the literal removed text. Ranges that cross lines
/// carry a line-span descriptor instead, because their text is never buffered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRange {
    /// 1-indexed line on which the range opened.
    pub start_line: usize,
    /// 1-indexed line on which the range closed (or the last line of the document).
    pub end_line: usize,
    pub content: String,
}

impl RemovalRange {
    pub fn is_single_line(&self) -> bool {
        self.start_line == self.end_line
    }
}

/// Everything a scan produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    pub cleaned_lines: Vec<String>,
    pub removed_ranges: Vec<RemovalRange>,
    pub total_removed_words: usize,
    pub total_lines: usize,
}

impl ScanResult {
    pub fn stats(&self) -> ScanStats {
        ScanStats {
            total_lines: self.total_lines,
            cleaned_lines: self.cleaned_lines.len(),
            removed_ranges: self.removed_ranges.len(),
            total_removed_words: self.total_removed_words,
        }
    }
}

/// Counts-only view of a scan, as reported to callers that do not need the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub total_lines: usize,
    pub cleaned_lines: usize,
    pub removed_ranges: usize,
    pub total_removed_words: usize,
}

/// Number of maximal runs of non-whitespace characters in `s`.
pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Descriptor recorded for a range that closed on a later line.
pub fn line_span_descriptor(start_line: usize, end_line: usize) -> String {
    format!("[Content from line {} to {}]", start_line, end_line)
}

/// Descriptor recorded for a range that never closed.
pub fn open_span_descriptor(start_line: usize) -> String {
    format!("[Content from line {} to end of document]", start_line)
}

/// Placeholder used in logs instead of removed text.
pub fn redact_content(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REMOVED]".to_string()
    } else {
        format!("[REMOVED: {} chars]", s.len())
    }
}

fn get_loggable_content(content: &str) -> String {
    if *CONTENT_DEBUG_ALLOWED {
        content.to_string()
    } else {
        redact_content(content)
    }
}

pub fn log_range_closed_debug(module_path: &str, range: &RemovalRange, words: usize) {
    debug!(
        "{} Closed range lines {}..{} ({} words): '{}'",
        module_path,
        range.start_line,
        range.end_line,
        words,
        get_loggable_content(&range.content)
    );
}

/// SHA-256 of the document lines joined by `\n`, hex encoded.
pub fn document_hash(lines: &[String]) -> String {
    let mut hasher = Sha256::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            hasher.update(b"\n");
        }
        hasher.update(line.as_bytes());
    }
    hex::encode(hasher.finalize())
}
