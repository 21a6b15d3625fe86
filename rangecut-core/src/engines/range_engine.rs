// rangecut-core/src/engines/range_engine.rs
//! A `RemovalEngine` implementation built on a single-pass, two-state scanner.
//!
//! The scanner is either outside a range (`Scanning`) or inside one whose end
//! has not been seen yet (`Removing`). Each line is handled by exactly one
//! transition; end of input while `Removing` closes the range at the last line.
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::ScanConfig;
use crate::engine::RemovalEngine;
use crate::errors::RangecutError;
use crate::matchers::compiler::{compile_marker, MarkerMatcher};
use crate::removal::{
    count_words, line_span_descriptor, log_range_closed_debug, open_span_descriptor,
    RemovalRange, ScanResult,
};

/// Whether marker text itself survives in the cleaned output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetainPolicy {
    pub start_marker: bool,
    pub end_marker: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Removing { start_line: usize },
}

#[derive(Debug, Default)]
struct Accumulator {
    cleaned_lines: Vec<String>,
    removed_ranges: Vec<RemovalRange>,
    total_removed_words: usize,
}

impl Accumulator {
    fn close_range(&mut self, range: RemovalRange, words: usize) {
        log_range_closed_debug(module_path!(), &range, words);
        self.total_removed_words += words;
        self.removed_ranges.push(range);
    }
}

/// Scans `lines` once, removing each range that opens on a `start` match and
/// closes on the next `end` match.
pub fn scan_lines(
    lines: &[String],
    start: &MarkerMatcher,
    end: &MarkerMatcher,
    retain: RetainPolicy,
) -> ScanResult {
    debug!("Scanning {} lines for marker ranges.", lines.len());
    for matcher in [start, end] {
        if matcher.is_disabled() {
            debug!("The {} marker is disabled; it will never match.", matcher.name);
        }
    }

    let mut acc = Accumulator::default();
    let mut state = ScanState::Scanning;

    for (i, line) in lines.iter().enumerate() {
        let line_no = i + 1;
        state = match state {
            ScanState::Scanning => match start.find(line, 0) {
                None => {
                    acc.cleaned_lines.push(line.clone());
                    ScanState::Scanning
                }
                Some(start_match) => {
                    let kept_end = if retain.start_marker {
                        start_match.end()
                    } else {
                        start_match.index
                    };
                    let kept = &line[..kept_end];

                    match end.find(line, start_match.end()) {
                        Some(end_match) => {
                            let resume = if retain.end_marker {
                                end_match.index
                            } else {
                                end_match.end()
                            };
                            let removed = &line[kept_end..resume];
                            let words = count_words(removed);
                            acc.close_range(
                                RemovalRange {
                                    start_line: line_no,
                                    end_line: line_no,
                                    content: removed.to_string(),
                                },
                                words,
                            );
                            acc.cleaned_lines.push(format!("{}{}", kept, &line[resume..]));
                            ScanState::Scanning
                        }
                        None => {
                            debug!("Range opened on line {} without a closing marker.", line_no);
                            acc.total_removed_words += count_words(&line[kept_end..]);
                            acc.cleaned_lines.push(kept.to_string());
                            ScanState::Removing { start_line: line_no }
                        }
                    }
                }
            },
            ScanState::Removing { start_line } => match end.find(line, 0) {
                Some(end_match) => {
                    let resume = if retain.end_marker {
                        end_match.index
                    } else {
                        end_match.end()
                    };
                    let words = count_words(&line[..resume]);
                    acc.close_range(
                        RemovalRange {
                            start_line,
                            end_line: line_no,
                            content: line_span_descriptor(start_line, line_no),
                        },
                        words,
                    );
                    acc.cleaned_lines.push(line[resume..].to_string());
                    ScanState::Scanning
                }
                None => {
                    acc.total_removed_words += count_words(line);
                    ScanState::Removing { start_line }
                }
            },
        };
    }

    if let ScanState::Removing { start_line } = state {
        debug!("Range opened on line {} runs to the end of the document.", start_line);
        acc.removed_ranges.push(RemovalRange {
            start_line,
            end_line: lines.len(),
            content: open_span_descriptor(start_line),
        });
    }

    debug!(
        "Scan finished: {} ranges removed, {} words removed.",
        acc.removed_ranges.len(),
        acc.total_removed_words
    );

    ScanResult {
        cleaned_lines: acc.cleaned_lines,
        removed_ranges: acc.removed_ranges,
        total_removed_words: acc.total_removed_words,
        total_lines: lines.len(),
    }
}

/// The default engine: two compiled markers plus the retain policy.
#[derive(Debug)]
pub struct RangeEngine {
    start: MarkerMatcher,
    end: MarkerMatcher,
    config: ScanConfig,
}

impl RangeEngine {
    pub fn new(config: ScanConfig) -> Result<Self, RangecutError> {
        let start = compile_marker("start", &config.start)?;
        let end = compile_marker("end", &config.end)?;
        Ok(Self { start, end, config })
    }

    fn retain_policy(&self) -> RetainPolicy {
        RetainPolicy {
            start_marker: self.config.retain_start_marker,
            end_marker: self.config.retain_end_marker,
        }
    }
}

impl RemovalEngine for RangeEngine {
    fn scan(&self, lines: &[String]) -> ScanResult {
        scan_lines(lines, &self.start, &self.end, self.retain_policy())
    }

    fn get_config(&self) -> &ScanConfig {
        &self.config
    }
}
