//! This file defines the command-line interface (CLI) for the rangecut
//! application, including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use rangecut_core::ConfigOverrides;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "rangecut",
    version = env!("CARGO_PKG_VERSION"),
    about = "Remove marker-delimited ranges from text documents",
    long_about = "rangecut removes every span of text that starts at a start marker and ends at the next end marker, possibly across many lines, keeps everything outside those spans, and reports what was removed.",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    #[arg(long = "disable-debug", global = true, help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `rangecut` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Removes marker ranges from a file or stdin and writes the cleaned document.
    #[command(about = "Removes marker ranges from a file or stdin and writes the cleaned document.")]
    Clean(CleanCommand),

    /// Reports the ranges that would be removed without writing anything.
    #[command(about = "Reports the ranges that would be removed without writing anything.")]
    Scan(ScanCommand),
}

/// Marker selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct MarkerArgs {
    /// Path to a marker configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "RANGECUT_CONFIG", help = "Path to a marker configuration file (YAML).")]
    pub config: Option<PathBuf>,

    #[arg(long = "start", short = 's', value_name = "TEXT", help = "Start marker text (overrides the configuration).")]
    pub start: Option<String>,

    #[arg(long = "end", short = 'e', value_name = "TEXT", help = "End marker text (overrides the configuration).")]
    pub end: Option<String>,

    #[arg(long = "ignore-case", overrides_with = "case_sensitive", help = "Match both markers regardless of letter case.")]
    pub ignore_case: bool,

    #[arg(long = "case-sensitive", overrides_with = "ignore_case", help = "Match both markers with exact letter case.")]
    pub case_sensitive: bool,

    #[arg(long = "whole-word", short = 'w', overrides_with = "no_whole_word", help = "Only match markers that are not part of a larger word.")]
    pub whole_word: bool,

    #[arg(long = "no-whole-word", overrides_with = "whole_word", help = "Match markers anywhere, even inside a larger word.")]
    pub no_whole_word: bool,

    #[arg(long = "retain-start", overrides_with = "no_retain_start", help = "Keep the start marker's own text in the output.")]
    pub retain_start: bool,

    #[arg(long = "no-retain-start", overrides_with = "retain_start", help = "Remove the start marker along with the range.")]
    pub no_retain_start: bool,

    #[arg(long = "retain-end", overrides_with = "no_retain_end", help = "Keep the end marker's own text in the output.")]
    pub retain_end: bool,

    #[arg(long = "no-retain-end", overrides_with = "retain_end", help = "Remove the end marker along with the range.")]
    pub no_retain_end: bool,
}

/// Formatting of the cleaned document.
#[derive(Args, Debug, Clone, Default)]
pub struct CollationArgs {
    #[arg(long = "keep-empty", overrides_with = "drop_empty", help = "Keep empty lines in the cleaned document.")]
    pub keep_empty: bool,

    #[arg(long = "drop-empty", overrides_with = "keep_empty", help = "Drop empty lines from the cleaned document.")]
    pub drop_empty: bool,

    #[arg(long = "no-trim", overrides_with = "trim", help = "Do not trim whitespace from cleaned lines.")]
    pub no_trim: bool,

    #[arg(long = "trim", overrides_with = "no_trim", help = "Trim whitespace from cleaned lines.")]
    pub trim: bool,

    #[arg(long = "separate-enumerations", overrides_with = "no_separate_enumerations", help = "Insert a blank line before numbered items such as '3.'.")]
    pub separate_enumerations: bool,

    #[arg(long = "no-separate-enumerations", overrides_with = "separate_enumerations", help = "Do not insert blank lines before numbered items.")]
    pub no_separate_enumerations: bool,

    #[arg(long = "paragraph-spacing", value_name = "N", help = "Blank lines placed between paragraphs in the output.")]
    pub paragraph_spacing: Option<usize>,
}

/// Resolves a `--flag`/`--no-flag` pair; `None` when neither was given.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (false, true) => Some(false),
        (false, false) => None,
    }
}

impl MarkerArgs {
    /// Flags only override the configuration when they are actually set.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            start: self.start.clone(),
            end: self.end.clone(),
            case_sensitive: flag_pair(self.case_sensitive, self.ignore_case),
            whole_word: flag_pair(self.whole_word, self.no_whole_word),
            retain_start_marker: flag_pair(self.retain_start, self.no_retain_start),
            retain_end_marker: flag_pair(self.retain_end, self.no_retain_end),
            ..ConfigOverrides::default()
        }
    }
}

impl CollationArgs {
    pub fn apply(&self, overrides: &mut ConfigOverrides) {
        if let Some(drop_empty) = flag_pair(self.drop_empty, self.keep_empty) {
            overrides.drop_empty_lines = Some(drop_empty);
        }
        if let Some(trim) = flag_pair(self.trim, self.no_trim) {
            overrides.trim_lines = Some(trim);
        }
        if let Some(separate) = flag_pair(self.separate_enumerations, self.no_separate_enumerations) {
            overrides.separate_enumerations = Some(separate);
        }
        if self.paragraph_spacing.is_some() {
            overrides.paragraph_spacing = self.paragraph_spacing;
        }
    }
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to this file (default: <input>_cleaned.<ext>, or stdout for stdin).")]
    pub output: Option<PathBuf>,

    #[arg(long = "stdout", conflicts_with = "output", help = "Write the cleaned document to stdout even when reading a file.")]
    pub stdout: bool,

    #[command(flatten)]
    pub markers: MarkerArgs,

    #[command(flatten)]
    pub collation: CollationArgs,

    #[arg(long, short = 'D', help = "Show a unified diff of the original and cleaned document.")]
    pub diff: bool,

    #[arg(long = "no-summary", help = "Suppress the removal summary.")]
    pub no_summary: bool,

    #[arg(long = "report-json", value_name = "FILE", help = "Write a JSON report of the clean operation to this file.")]
    pub report_json: Option<PathBuf>,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[command(flatten)]
    pub markers: MarkerArgs,

    #[arg(long = "show-ranges", help = "List every removed range, not just the totals.")]
    pub show_ranges: bool,

    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if more than N ranges are found.")]
    pub fail_over_threshold: Option<usize>,

    #[arg(long = "json-file", value_name = "FILE", help = "Export the scan statistics to a JSON file.")]
    pub json_file: Option<PathBuf>,

    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the scan statistics to stdout as JSON.")]
    pub json_stdout: bool,
}
