//! Command implementations and the helpers they share.

pub mod clean;
pub mod scan;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::debug;
use std::io::{self, Read};
use std::path::Path;

use rangecut_core::{
    merge_config, ConfigOverrides, DocumentSource, ScanConfig, StringSource, TextFileSource,
};

use crate::ui::output_format;
use crate::ui::theme::ThemeMap;

/// Source id reported when the document came from stdin.
pub const STDIN_SOURCE_ID: &str = "stdin";

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing success messages to stderr.
pub fn success_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_success_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>, theme: &ThemeMap) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), theme, stderr_supports_color);
}

/// Loads `--config` if given, otherwise the user config or the bundled
/// defaults, then applies the command-line overrides.
pub fn resolve_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<ScanConfig> {
    let base = match config_path {
        Some(path) => {
            debug!("Loading marker configuration from {}", path.display());
            ScanConfig::load_from_file(path)?
        }
        None => ScanConfig::load_user_or_default()?,
    };
    let merged = merge_config(base, overrides);
    rangecut_core::validate_config(&merged)?;
    Ok(merged)
}

/// Reads the document from `input_file`, or from stdin when none is given.
pub fn read_input(input_file: Option<&Path>) -> Result<(String, Vec<String>)> {
    match input_file {
        Some(path) => {
            let source = TextFileSource::new(path);
            let lines = source.extract_lines()?;
            Ok((source.source_id(), lines))
        }
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            let source = StringSource::new(STDIN_SOURCE_ID, buffer);
            Ok((source.source_id(), source.extract_lines()?))
        }
    }
}
