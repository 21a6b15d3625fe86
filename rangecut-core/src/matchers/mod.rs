//! Marker matching for rangecut.
//!
//! This module turns `MarkerSpec`s into compiled `MarkerMatcher`s that locate a
//! marker's offset and length within a line. Matching is literal, optionally
//! case-insensitive, and optionally restricted to whole words.

pub mod compiler;
