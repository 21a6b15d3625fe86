//! Document boundaries: where lines come from and where cleaned lines go.
//!
//! The engine never performs I/O itself. A `DocumentSource` produces the lines
//! to scan and a `DocumentSink` renders the collated output into bytes. Read
//! and write failures are surfaced as tagged `RangecutError`s and never retried.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::RangecutError;

/// Largest document, in bytes, a file source will load into memory.
pub const MAX_DOCUMENT_BYTES: u64 = 64 * 1024 * 1024;

/// Suffix inserted before the extension of a derived output path.
pub const CLEANED_SUFFIX: &str = "_cleaned";

/// Binary containers this crate deliberately does not parse.
const UNSUPPORTED_EXTENSIONS: &[&str] = &["docx", "doc", "odt", "pdf", "rtf"];

/// Supplies the lines of a document.
pub trait DocumentSource {
    fn extract_lines(&self) -> Result<Vec<String>, RangecutError>;

    /// Stable identifier used in reports (usually a path).
    fn source_id(&self) -> String;
}

/// Turns cleaned lines back into a persistable document.
pub trait DocumentSink {
    fn render(&self, lines: &[String]) -> Result<Vec<u8>, RangecutError>;
}

/// A UTF-8 text file on disk.
#[derive(Debug, Clone)]
pub struct TextFileSource {
    pub path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_error(&self, source: io::Error) -> RangecutError {
        RangecutError::SourceRead {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl DocumentSource for TextFileSource {
    fn extract_lines(&self) -> Result<Vec<String>, RangecutError> {
        if let Some(ext) = self.path.extension().and_then(|e| e.to_str()) {
            if UNSUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
                return Err(RangecutError::UnsupportedFormat(format!(
                    "'{}' is a .{} container; convert it to plain text first",
                    self.path.display(),
                    ext
                )));
            }
        }

        let metadata = fs::metadata(&self.path).map_err(|e| self.read_error(e))?;
        if metadata.len() > MAX_DOCUMENT_BYTES {
            return Err(self.read_error(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "document is {} bytes; the limit is {}",
                    metadata.len(),
                    MAX_DOCUMENT_BYTES
                ),
            )));
        }

        let bytes = fs::read(&self.path).map_err(|e| self.read_error(e))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| self.read_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        let lines = split_lines(&text);
        debug!("Read {} lines from {}.", lines.len(), self.path.display());
        Ok(lines)
    }

    fn source_id(&self) -> String {
        self.path.display().to_string()
    }
}

/// Text already held in memory, such as stdin.
#[derive(Debug, Clone)]
pub struct StringSource {
    pub id: String,
    pub text: String,
}

impl StringSource {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl DocumentSource for StringSource {
    fn extract_lines(&self) -> Result<Vec<String>, RangecutError> {
        Ok(split_lines(&self.text))
    }

    fn source_id(&self) -> String {
        self.id.clone()
    }
}

/// Splits text into lines, accepting both `\n` and `\r\n` endings.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}

/// Renders one paragraph per line, separated by `paragraph_spacing` blank lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSink {
    pub paragraph_spacing: usize,
}

impl PlainTextSink {
    pub fn new(paragraph_spacing: usize) -> Self {
        Self { paragraph_spacing }
    }
}

impl DocumentSink for PlainTextSink {
    fn render(&self, lines: &[String]) -> Result<Vec<u8>, RangecutError> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }
        let separator = "\n".repeat(1 + self.paragraph_spacing);
        let mut out = lines.join(&separator);
        out.push('\n');
        Ok(out.into_bytes())
    }
}

/// Persists rendered bytes, mapping any failure to `SinkWrite`.
pub fn write_rendered(path: &Path, bytes: &[u8]) -> Result<(), RangecutError> {
    debug!("Writing {} bytes to {}.", bytes.len(), path.display());
    fs::write(path, bytes).map_err(|source| RangecutError::SinkWrite {
        path: path.display().to_string(),
        source,
    })
}

/// `report.txt` becomes `report_cleaned.txt`; a path without an extension
/// just gains the suffix.
pub fn derive_cleaned_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}{}.{}", stem, CLEANED_SUFFIX, ext.to_string_lossy()),
        None => format!("{}{}", stem, CLEANED_SUFFIX),
    };
    path.with_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_path_inserts_suffix_before_extension() {
        assert_eq!(
            derive_cleaned_path(Path::new("dir/report.docx")),
            PathBuf::from("dir/report_cleaned.docx")
        );
        assert_eq!(
            derive_cleaned_path(Path::new("notes.tar.txt")),
            PathBuf::from("notes.tar_cleaned.txt")
        );
        assert_eq!(derive_cleaned_path(Path::new("README")), PathBuf::from("README_cleaned"));
    }

    #[test]
    fn plain_text_sink_spaces_paragraphs() {
        let lines = vec!["one".to_string(), "two".to_string()];
        assert_eq!(PlainTextSink::new(0).render(&lines).unwrap(), b"one\ntwo\n".to_vec());
        assert_eq!(PlainTextSink::new(1).render(&lines).unwrap(), b"one\n\ntwo\n".to_vec());
        assert!(PlainTextSink::new(1).render(&[]).unwrap().is_empty());
    }

    #[test]
    fn split_lines_handles_crlf() {
        assert_eq!(split_lines("a\r\nb\nc"), vec!["a", "b", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn binary_containers_are_rejected() {
        let err = TextFileSource::new("exam.docx").extract_lines().unwrap_err();
        assert!(matches!(err, RangecutError::UnsupportedFormat(_)));
        assert!(err.is_source_error());
    }

    #[test]
    fn missing_file_is_a_source_error() {
        let err = TextFileSource::new("definitely/not/here.txt").extract_lines().unwrap_err();
        assert!(matches!(err, RangecutError::SourceRead { .. }));
    }
}
