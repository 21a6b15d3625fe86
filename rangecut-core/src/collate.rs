//! Collation of cleaned lines before they are handed to a document sink.
//!
//! This is a formatting pass owned by the caller: the scanner never calls it,
//! and its output is not part of any scan invariant.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::CollationPolicy;

static ENUMERATED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\.").unwrap());

/// True if `line` carries an enumerated item such as `3.` or `12.`.
pub fn has_enumerated_item(line: &str) -> bool {
    ENUMERATED_ITEM.is_match(line)
}

/// Applies `policy` to `lines`, returning the lines a sink should render.
pub fn collate(lines: &[String], policy: &CollationPolicy) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines {
        let text = if policy.trim_lines {
            line.trim()
        } else {
            line.as_str()
        };
        if policy.drop_empty_lines && text.is_empty() {
            continue;
        }
        if policy.separate_enumerations && has_enumerated_item(text) {
            if let Some(prev) = out.last() {
                if !prev.trim().is_empty() {
                    out.push(String::new());
                }
            }
        }
        out.push(text.to_string());
    }

    out
}
