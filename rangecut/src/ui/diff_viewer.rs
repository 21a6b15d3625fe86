// rangecut/src/ui/diff_viewer.rs
//! Unified diff between the original document and its cleaned rendering.

use diffy::{Line as DiffLine, create_patch};
use std::io::{self, Write};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Writes a unified diff of `original` against `cleaned`.
pub fn print_diff(
    original: &str,
    cleaned: &str,
    writer: &mut dyn Write,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    let patch = create_patch(original, cleaned);
    let header = |text: &str| paint(text, ThemeEntry::DiffHeader, theme_map, enable_colors);

    writeln!(writer, "{}", header("--- Diff View ---"))?;

    if patch.hunks().is_empty() {
        writeln!(writer, "No changes detected.")?;
    }

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        writeln!(
            writer,
            "{}",
            header(&format!(
                "@@ -{},{} +{},{} @@",
                old.start(),
                old.len(),
                new.start(),
                new.len()
            ))
        )?;

        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    let text = format!("-{}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&text, ThemeEntry::DiffRemoved, theme_map, enable_colors))?;
                }
                DiffLine::Insert(s) => {
                    let text = format!("+{}", s.trim_end_matches('\n'));
                    writeln!(writer, "{}", paint(&text, ThemeEntry::DiffAdded, theme_map, enable_colors))?;
                }
                DiffLine::Context(s) => {
                    writeln!(writer, " {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    writeln!(writer, "{}", header("-----------------"))
}
