//! Configuration management for `rangecut-core`.
//!
//! This module defines the marker specifications, the scan configuration and the
//! collation policy that are threaded explicitly into every scan. It handles
//! YAML (de)serialization and provides utilities for loading, merging and
//! validating configurations.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::RangecutError;

/// Maximum allowed length, in bytes, for a marker's text.
pub const MAX_MARKER_LENGTH: usize = 500;

/// Name of the user configuration file looked up under the config directory.
pub const USER_CONFIG_FILE_NAME: &str = "config.yaml";

/// Describes how to recognize one marker occurrence inside a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkerSpec {
    /// Literal marker text. An empty text never matches.
    pub text: String,
    /// If false, letter case is ignored while matching.
    pub case_sensitive: bool,
    /// If true, a match must not be flanked by alphanumeric or `_` characters.
    pub whole_word: bool,
}

impl Default for MarkerSpec {
    fn default() -> Self {
        Self {
            text: String::new(),
            case_sensitive: true,
            whole_word: false,
        }
    }
}

impl MarkerSpec {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn whole_word(mut self, whole_word: bool) -> Self {
        self.whole_word = whole_word;
        self
    }
}

/// Formatting applied to cleaned lines before they reach a document sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct CollationPolicy {
    /// Drop lines that are empty (after trimming, when `trim_lines` is set).
    pub drop_empty_lines: bool,
    /// Trim leading and trailing whitespace from every surviving line.
    pub trim_lines: bool,
    /// Insert a blank line before lines that carry an enumerated item such as `12.`.
    pub separate_enumerations: bool,
    /// Number of blank lines the text sink places between paragraphs.
    pub paragraph_spacing: usize,
}

impl Default for CollationPolicy {
    fn default() -> Self {
        Self {
            drop_empty_lines: true,
            trim_lines: true,
            separate_enumerations: false,
            paragraph_spacing: 1,
        }
    }
}

/// Top-level configuration for one scan: the marker pair plus the policies
/// that surround it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    pub start: MarkerSpec,
    pub end: MarkerSpec,
    /// Keep the start marker's own text in the output.
    pub retain_start_marker: bool,
    /// Keep the end marker's own text in the output.
    pub retain_end_marker: bool,
    pub collation: CollationPolicy,
}

impl ScanConfig {
    /// Builds a configuration for a marker pair with default matching options.
    pub fn for_markers(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: MarkerSpec::new(start),
            end: MarkerSpec::new(end),
            ..Self::default()
        }
    }

    /// Applies the same case sensitivity to both markers.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.start.case_sensitive = case_sensitive;
        self.end.case_sensitive = case_sensitive;
        self
    }

    /// Applies the same whole-word policy to both markers.
    pub fn with_whole_word(mut self, whole_word: bool) -> Self {
        self.start.whole_word = whole_word;
        self.end.whole_word = whole_word;
        self
    }

    pub fn with_retain_start_marker(mut self, retain: bool) -> Self {
        self.retain_start_marker = retain;
        self
    }

    pub fn with_retain_end_marker(mut self, retain: bool) -> Self {
        self.retain_end_marker = retain;
        self
    }

    pub fn with_collation(mut self, collation: CollationPolicy) -> Self {
        self.collation = collation;
        self
    }

    /// Loads a scan configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading marker configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ScanConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_config(&config)?;
        info!(
            "Loaded markers '{}' .. '{}' from file {}.",
            config.start.text,
            config.end.text,
            path.display()
        );
        Ok(config)
    }

    /// Loads the built-in study-guide preset from the embedded configuration.
    pub fn load_default_config() -> Result<Self> {
        debug!("Loading default markers from embedded string...");
        let default_yaml = include_str!("../config/default_markers.yaml");
        let config: ScanConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default markers")?;
        debug!(
            "Default markers: start='{}', end='{}'.",
            config.start.text, config.end.text
        );
        Ok(config)
    }

    /// Loads the user configuration if one exists, otherwise the built-in preset.
    pub fn load_user_or_default() -> Result<Self> {
        match user_config_path() {
            Some(path) if path.is_file() => Self::load_from_file(path),
            _ => Self::load_default_config(),
        }
    }
}

/// Location of the per-user configuration file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rangecut").join(USER_CONFIG_FILE_NAME))
}

/// Explicit, per-invocation overrides, typically taken from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub start: Option<String>,
    pub end: Option<String>,
    pub case_sensitive: Option<bool>,
    pub whole_word: Option<bool>,
    pub retain_start_marker: Option<bool>,
    pub retain_end_marker: Option<bool>,
    pub drop_empty_lines: Option<bool>,
    pub trim_lines: Option<bool>,
    pub separate_enumerations: Option<bool>,
    pub paragraph_spacing: Option<usize>,
}

/// Merges explicit overrides into a base configuration.
///
/// Matching flags apply to both markers, mirroring the single-flag scan request.
pub fn merge_config(base: ScanConfig, overrides: &ConfigOverrides) -> ScanConfig {
    let mut merged = base;

    if let Some(start) = &overrides.start {
        debug!("Overriding start marker with '{}'.", start);
        merged.start.text = start.clone();
    }
    if let Some(end) = &overrides.end {
        debug!("Overriding end marker with '{}'.", end);
        merged.end.text = end.clone();
    }
    if let Some(case_sensitive) = overrides.case_sensitive {
        merged.start.case_sensitive = case_sensitive;
        merged.end.case_sensitive = case_sensitive;
    }
    if let Some(whole_word) = overrides.whole_word {
        merged.start.whole_word = whole_word;
        merged.end.whole_word = whole_word;
    }
    if let Some(retain) = overrides.retain_start_marker {
        merged.retain_start_marker = retain;
    }
    if let Some(retain) = overrides.retain_end_marker {
        merged.retain_end_marker = retain;
    }
    if let Some(drop_empty) = overrides.drop_empty_lines {
        merged.collation.drop_empty_lines = drop_empty;
    }
    if let Some(trim) = overrides.trim_lines {
        merged.collation.trim_lines = trim;
    }
    if let Some(separate) = overrides.separate_enumerations {
        merged.collation.separate_enumerations = separate;
    }
    if let Some(spacing) = overrides.paragraph_spacing {
        merged.collation.paragraph_spacing = spacing;
    }

    merged
}

/// Validates marker integrity.
///
/// Empty markers are legal (they disable a boundary) and only produce a warning.
pub fn validate_config(config: &ScanConfig) -> Result<()> {
    let mut errors = Vec::new();

    for (name, spec) in [("start", &config.start), ("end", &config.end)] {
        if spec.text.is_empty() {
            warn!("The {} marker is empty and will never match.", name);
        } else if spec.text.len() > MAX_MARKER_LENGTH {
            errors.push(format!(
                "The {} marker is {} bytes long; the maximum is {}.",
                name,
                spec.text.len(),
                MAX_MARKER_LENGTH
            ));
        }
        if spec.whole_word && spec.text.trim().is_empty() {
            warn!("The {} marker requests whole-word matching but has no text.", name);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RangecutError::InvalidConfig(format!(
            "Marker validation failed:\n{}",
            errors.join("\n")
        ))
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_has_study_guide_markers() {
        let config = ScanConfig::load_default_config().unwrap();
        assert_eq!(config.start.text, "Selected Answer:");
        assert_eq!(config.end.text, "Answers:");
        assert!(!config.retain_start_marker);
        assert!(config.collation.drop_empty_lines);
    }

    #[test]
    fn merge_applies_flags_to_both_markers() {
        let base = ScanConfig::for_markers("BEGIN", "END");
        let overrides = ConfigOverrides {
            case_sensitive: Some(false),
            whole_word: Some(true),
            end: Some("STOP".to_string()),
            ..ConfigOverrides::default()
        };
        let merged = merge_config(base, &overrides);
        assert_eq!(merged.start.text, "BEGIN");
        assert_eq!(merged.end.text, "STOP");
        assert!(!merged.start.case_sensitive && !merged.end.case_sensitive);
        assert!(merged.start.whole_word && merged.end.whole_word);
    }

    #[test]
    fn oversized_marker_fails_validation() {
        let config = ScanConfig::for_markers("x".repeat(MAX_MARKER_LENGTH + 1), "end");
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RangecutError>(),
            Some(RangecutError::InvalidConfig(msg)) if msg.contains("start marker")
        ));
    }

    #[test]
    fn empty_marker_is_only_a_warning() {
        let config = ScanConfig::for_markers("", "end").with_whole_word(true);
        assert!(validate_config(&config).is_ok());
    }
}
