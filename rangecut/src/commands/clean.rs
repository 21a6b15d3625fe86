//! `clean` command: removes marker ranges and writes the cleaned document.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rangecut_core::{
    collate, headless_clean_document, CleanReport, DocumentSink, PlainTextSink, RemovalEngine,
    StringSource,
};

use crate::commands::{info_msg, success_msg};
use crate::ui::diff_viewer;
use crate::ui::removal_summary;
use crate::ui::theme::ThemeMap;

/// Options for the ergonomic run_clean_opts API
pub struct CleanOptions {
    /// Identifier of the document, a path or "stdin".
    pub source_id: String,
    pub lines: Vec<String>,
    /// `None` writes the cleaned document to stdout.
    pub output_path: Option<PathBuf>,
    pub diff: bool,
    pub no_summary: bool,
    pub report_json: Option<PathBuf>,
    pub quiet: bool,
}

/// The main operation runner for the `clean` command.
pub fn run_clean_opts(
    engine: &dyn RemovalEngine,
    opts: CleanOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting clean operation.");

    let original = original_text(&opts.lines);
    let (report, cleaned) = match &opts.output_path {
        Some(path) => clean_to_file(engine, &opts, &original, path, theme_map)?,
        None => clean_to_stdout(engine, &opts)?,
    };

    debug!(
        "Document cleaned. Lines in: {}, lines out: {}, ranges: {}",
        report.stats.total_lines, report.rendered_lines, report.stats.removed_ranges
    );

    if opts.diff {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        diff_viewer::print_diff(&original, &cleaned, &mut stdout.lock(), theme_map, supports_color)?;
    }

    if let Some(report_path) = &opts.report_json {
        write_report(&report, report_path, opts.quiet, theme_map)?;
    }

    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        removal_summary::print_summary(
            &report.stats,
            &report.ranges,
            &mut io::stderr(),
            theme_map,
            stderr_supports_color,
        )?;
    }

    info!("Clean operation completed.");
    Ok(())
}

fn original_text(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Runs the library's document pipeline against `path` and returns the
/// report plus the text that was written.
fn clean_to_file(
    engine: &dyn RemovalEngine,
    opts: &CleanOptions,
    original: &str,
    path: &Path,
    theme_map: &ThemeMap,
) -> Result<(CleanReport, String)> {
    if !opts.quiet {
        info_msg(format!("Writing cleaned document to file: {}", path.display()), theme_map);
    }
    let source = StringSource::new(opts.source_id.clone(), original);
    let sink = PlainTextSink::new(engine.get_config().collation.paragraph_spacing);
    let report = headless_clean_document(engine, &source, &sink, path)?;

    let cleaned = if opts.diff {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read back cleaned document {}", path.display()))?
    } else {
        String::new()
    };
    Ok((report, cleaned))
}

/// Cleans in memory and writes the result to stdout, unless a diff replaces it.
fn clean_to_stdout(engine: &dyn RemovalEngine, opts: &CleanOptions) -> Result<(CleanReport, String)> {
    let result = engine.scan(&opts.lines);
    let policy = &engine.get_config().collation;
    let collated = collate(&result.cleaned_lines, policy);
    let rendered = PlainTextSink::new(policy.paragraph_spacing).render(&collated)?;

    if !opts.diff {
        let mut writer = io::stdout().lock();
        writer.write_all(&rendered)?;
        writer.flush()?;
    }

    let report = CleanReport::new(&opts.source_id, None, &opts.lines, &result, collated.len());
    Ok((report, String::from_utf8_lossy(&rendered).into_owned()))
}

fn write_report(
    report: &CleanReport,
    report_path: &Path,
    quiet: bool,
    theme_map: &ThemeMap,
) -> Result<()> {
    let json = report.to_json_pretty()?;
    fs::write(report_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", report_path.display()))?;
    if !quiet {
        success_msg(format!("Clean report written to {}", report_path.display()), theme_map);
    }
    Ok(())
}
