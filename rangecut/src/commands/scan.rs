//! `scan` command: reports what `clean` would remove without writing a document.

use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use log::info;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use rangecut_core::{RemovalEngine, RemovalRange, ScanStats};

use crate::commands::{info_msg, warn_msg};
use crate::ui::removal_summary;
use crate::ui::theme::ThemeMap;

pub struct ScanOptions {
    pub source_id: String,
    pub lines: Vec<String>,
    pub show_ranges: bool,
    pub fail_over_threshold: Option<usize>,
    pub json_file: Option<PathBuf>,
    pub json_stdout: bool,
    pub quiet: bool,
}

/// Machine-readable scan output.
#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub source: &'a str,
    #[serde(flatten)]
    pub stats: ScanStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranges: Option<&'a [RemovalRange]>,
}

pub fn run_scan_opts(
    engine: &dyn RemovalEngine,
    opts: ScanOptions,
    theme_map: &ThemeMap,
) -> Result<()> {
    info!("Starting scan operation.");

    let (stats, ranges) = if opts.show_ranges {
        let result = engine.scan(&opts.lines);
        (result.stats(), result.removed_ranges)
    } else {
        (engine.analyze_for_stats(&opts.lines), Vec::new())
    };
    let report = ScanReport {
        source: &opts.source_id,
        stats,
        ranges: opts.show_ranges.then_some(ranges.as_slice()),
    };

    if opts.json_stdout || opts.json_file.is_some() {
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize scan statistics")?;
        if let Some(path) = &opts.json_file {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write scan statistics to {}", path.display()))?;
            if !opts.quiet {
                info_msg(format!("Scan statistics written to {}", path.display()), theme_map);
            }
        } else {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    } else {
        let stdout = io::stdout();
        let supports_color = stdout.is_terminal();
        removal_summary::print_summary(&stats, &ranges, &mut stdout.lock(), theme_map, supports_color)?;
    }

    if let Some(threshold) = opts.fail_over_threshold {
        if stats.removed_ranges > threshold {
            if !opts.quiet {
                warn_msg(
                    format!(
                        "Found {} ranges, above the threshold of {}.",
                        stats.removed_ranges, threshold
                    ),
                    theme_map,
                );
            }
            bail!(
                "Range count {} exceeds the threshold of {}",
                stats.removed_ranges,
                threshold
            );
        }
    }

    info!("Scan operation completed.");
    Ok(())
}
