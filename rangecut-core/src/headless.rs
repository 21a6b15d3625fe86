// File: rangecut-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the core engine in headless mode (non-UI).
//! Provides one-shot helpers for scanning an in-memory document and for the
//! full "clean this file" operation, plus the report that operation returns.

use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::collate::collate;
use crate::config::ScanConfig;
use crate::document::{
    derive_cleaned_path, write_rendered, DocumentSink, DocumentSource, PlainTextSink,
    TextFileSource,
};
use crate::engine::RemovalEngine;
use crate::engines::range_engine::RangeEngine;
use crate::errors::RangecutError;
use crate::removal::{document_hash, RemovalRange, ScanResult, ScanStats};

/// Outcome of cleaning one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    pub run_id: String,
    pub timestamp: String,
    pub source: String,
    pub output_path: Option<String>,
    /// SHA-256 of the source lines.
    pub input_hash: String,
    pub stats: ScanStats,
    /// Lines written after collation.
    pub rendered_lines: usize,
    pub ranges: Vec<RemovalRange>,
}

impl CleanReport {
    pub fn new(
        source: &str,
        output_path: Option<&Path>,
        original_lines: &[String],
        result: &ScanResult,
        rendered_lines: usize,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            source: source.to_string(),
            output_path: output_path.map(|p| p.display().to_string()),
            input_hash: document_hash(original_lines),
            stats: result.stats(),
            rendered_lines,
            ranges: result.removed_ranges.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, RangecutError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RangecutError::SerializationError(e.to_string()))
    }
}

/// Scans an in-memory document with a freshly built engine.
pub fn headless_scan_lines(
    config: ScanConfig,
    lines: &[String],
) -> Result<ScanResult, RangecutError> {
    let engine = RangeEngine::new(config)?;
    Ok(engine.scan(lines))
}

/// Reads, scans, collates, renders and writes one document.
pub fn headless_clean_document(
    engine: &dyn RemovalEngine,
    source: &dyn DocumentSource,
    sink: &dyn DocumentSink,
    output: &Path,
) -> Result<CleanReport, RangecutError> {
    let lines = source.extract_lines()?;
    let result = engine.scan(&lines);
    let collated = collate(&result.cleaned_lines, &engine.get_config().collation);
    let bytes = sink.render(&collated)?;
    write_rendered(output, &bytes)?;

    info!(
        "Cleaned {}: {} ranges, {} words removed, written to {}.",
        source.source_id(),
        result.removed_ranges.len(),
        result.total_removed_words,
        output.display()
    );

    Ok(CleanReport::new(
        &source.source_id(),
        Some(output),
        &lines,
        &result,
        collated.len(),
    ))
}

/// Cleans a text file, writing to `output` or to the derived `_cleaned` path.
pub fn headless_clean_file(
    config: ScanConfig,
    input: &Path,
    output: Option<&Path>,
) -> Result<CleanReport, RangecutError> {
    let output: PathBuf = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| derive_cleaned_path(input));
    let sink = PlainTextSink::new(config.collation.paragraph_spacing);
    let engine = RangeEngine::new(config)?;
    let source = TextFileSource::new(input);
    headless_clean_document(&engine, &source, &sink, &output)
}
