//! compiler.rs - Turns marker specifications into reusable matchers.
//!
//! Marker text is always literal: it is escaped before compilation, so
//! characters such as `?`, `+` or `(` inside a marker carry no special meaning.
//! Whole-word matching is a predicate applied to candidate matches rather than
//! a pattern fragment, which keeps the literal pattern and the boundary policy
//! independent of each other.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use regex::{Regex, RegexBuilder};

use crate::config::{MarkerSpec, MAX_MARKER_LENGTH};
use crate::errors::RangecutError;

/// Accepts or rejects a candidate match at `start..end` within `line`.
pub type BoundaryPredicate = fn(line: &str, start: usize, end: usize) -> bool;

/// The offset and length, in bytes, of one marker occurrence in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerMatch {
    pub index: usize,
    pub length: usize,
}

impl MarkerMatch {
    /// Byte offset just past the matched marker.
    pub fn end(&self) -> usize {
        self.index + self.length
    }
}

/// A compiled marker, ready to be matched against any number of lines.
#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    /// Name used in diagnostics (e.g. "start" or "end").
    pub name: String,
    regex: Option<Regex>,
    accept: BoundaryPredicate,
}

/// Characters that make up a word for whole-word matching.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Accepts every candidate.
pub fn any_boundary(_line: &str, _start: usize, _end: usize) -> bool {
    true
}

/// Accepts a candidate only when neither neighbouring character is a word character.
pub fn word_boundary(line: &str, start: usize, end: usize) -> bool {
    let before = line[..start].chars().next_back();
    let after = line[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}

/// Compiles a marker specification under a diagnostic name.
pub fn compile_marker(name: &str, spec: &MarkerSpec) -> Result<MarkerMatcher, RangecutError> {
    let accept: BoundaryPredicate = if spec.whole_word {
        word_boundary
    } else {
        any_boundary
    };

    if spec.text.is_empty() {
        warn!("Marker '{}' has empty text; it will never match.", name);
        return Ok(MarkerMatcher {
            name: name.to_string(),
            regex: None,
            accept,
        });
    }

    if spec.text.len() > MAX_MARKER_LENGTH {
        return Err(RangecutError::MarkerLengthExceeded(
            name.to_string(),
            spec.text.len(),
            MAX_MARKER_LENGTH,
        ));
    }

    debug!(
        "Compiling marker '{}' (case_sensitive={}, whole_word={}).",
        name, spec.case_sensitive, spec.whole_word
    );

    let regex = RegexBuilder::new(&regex::escape(&spec.text))
        .case_insensitive(!spec.case_sensitive)
        .size_limit(10 * (1 << 20))
        .build()
        .map_err(|e| RangecutError::MarkerCompilationError(name.to_string(), e))?;

    log::debug!(
        target: "rangecut_core::matcher",
        "Marker '{}' compiled successfully.",
        name
    );

    Ok(MarkerMatcher {
        name: name.to_string(),
        regex: Some(regex),
        accept,
    })
}

impl MarkerMatcher {
    /// Compiles a marker specification.
    pub fn build(spec: &MarkerSpec) -> Result<Self, RangecutError> {
        compile_marker("marker", spec)
    }

    /// True if this matcher can never produce a match.
    pub fn is_disabled(&self) -> bool {
        self.regex.is_none()
    }

    /// Finds the first accepted occurrence at or after `from_offset`.
    ///
    /// Boundary checks look at the whole line, so text before `from_offset`
    /// still counts as a neighbour.
    pub fn find(&self, line: &str, from_offset: usize) -> Option<MarkerMatch> {
        let regex = self.regex.as_ref()?;
        let mut offset = ceil_char_boundary(line, from_offset);

        while offset <= line.len() {
            let candidate = regex.find_at(line, offset)?;
            if (self.accept)(line, candidate.start(), candidate.end()) {
                return Some(MarkerMatch {
                    index: candidate.start(),
                    length: candidate.len(),
                });
            }
            offset = next_char_boundary(line, candidate.start());
        }
        None
    }
}

fn ceil_char_boundary(line: &str, offset: usize) -> usize {
    let mut offset = offset.min(line.len() + 1);
    while offset < line.len() && !line.is_char_boundary(offset) {
        offset += 1;
    }
    offset
}

fn next_char_boundary(line: &str, offset: usize) -> usize {
    line[offset..]
        .chars()
        .next()
        .map_or(line.len() + 1, |c| offset + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(text: &str, case_sensitive: bool, whole_word: bool) -> MarkerMatcher {
        let spec = MarkerSpec::new(text)
            .case_sensitive(case_sensitive)
            .whole_word(whole_word);
        MarkerMatcher::build(&spec).unwrap()
    }

    #[test]
    fn matches_literal_text_with_regex_metacharacters() {
        let m = matcher("What is 2+2?", true, false);
        assert_eq!(
            m.find("Q1: What is 2+2? Four", 0),
            Some(MarkerMatch { index: 4, length: 12 })
        );
        assert_eq!(m.find("Q1: What is 22?", 0), None);
    }

    #[test]
    fn whole_word_rejects_substring_of_larger_token() {
        let m = matcher("cat", true, true);
        assert_eq!(m.find("category", 0), None);
        assert_eq!(m.find("a category of cat", 0), Some(MarkerMatch { index: 14, length: 3 }));
        assert_eq!(m.find("cat_like", 0), None);
        assert_eq!(m.find("(cat)", 0), Some(MarkerMatch { index: 1, length: 3 }));
    }

    #[test]
    fn case_insensitive_matching() {
        let insensitive = matcher("answers:", false, false);
        assert_eq!(insensitive.find("ANSWERS: 1", 0), Some(MarkerMatch { index: 0, length: 8 }));
        let sensitive = matcher("answers:", true, false);
        assert_eq!(sensitive.find("ANSWERS: 1", 0), None);
    }

    #[test]
    fn find_respects_offset() {
        let m = matcher("ab", true, false);
        assert_eq!(m.find("ab ab", 1), Some(MarkerMatch { index: 3, length: 2 }));
        assert_eq!(m.find("ab ab", 4), None);
        assert_eq!(m.find("ab", 10), None);
    }

    #[test]
    fn boundary_uses_text_before_offset() {
        let m = matcher("dog", true, true);
        assert_eq!(m.find("catdog", 3), None);
        assert_eq!(m.find("cat dog", 3), Some(MarkerMatch { index: 4, length: 3 }));
    }

    #[test]
    fn empty_marker_never_matches() {
        let m = matcher("", true, true);
        assert!(m.is_disabled());
        assert_eq!(m.find("anything at all", 0), None);
    }

    #[test]
    fn compiled_marker_keeps_its_name() {
        let m = compile_marker("end", &MarkerSpec::new("Answers:")).unwrap();
        assert_eq!(m.name, "end");
        assert!(!m.is_disabled());
    }

    #[test]
    fn multibyte_lines_are_handled() {
        let m = matcher("fin", true, true);
        assert_eq!(m.find("café fin", 0), Some(MarkerMatch { index: 6, length: 3 }));
        assert_eq!(m.find("éfin", 1), None);
    }

    #[test]
    fn oversized_marker_is_rejected() {
        let spec = MarkerSpec::new("y".repeat(MAX_MARKER_LENGTH + 1));
        assert!(matches!(
            MarkerMatcher::build(&spec),
            Err(RangecutError::MarkerLengthExceeded(_, _, _))
        ));
    }
}
