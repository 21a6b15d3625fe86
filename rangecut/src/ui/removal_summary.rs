//! Removal summary: one table row per removed range followed by the totals.

use comfy_table::{Cell, Table};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use rangecut_core::{RemovalRange, ScanStats};
use std::io::{self, Write};

use crate::ui::output_format::paint;
use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Longest removed-content preview shown in the table, in characters.
pub const PREVIEW_CHARS: usize = 60;

/// `3` for a single-line range, `3-5` otherwise.
pub fn format_span(range: &RemovalRange) -> String {
    if range.is_single_line() {
        range.start_line.to_string()
    } else {
        format!("{}-{}", range.start_line, range.end_line)
    }
}

/// Shortens `content` to at most `max_chars` characters.
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let cut: String = content.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Prints a table of `ranges` (when any are given) followed by the totals.
pub fn print_summary(
    stats: &ScanStats,
    ranges: &[RemovalRange],
    writer: &mut dyn Write,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(
        writer,
        "{}",
        paint("--- Removal Summary ---", ThemeEntry::Header, theme_map, enable_colors)
    )?;

    if stats.removed_ranges == 0 {
        writeln!(writer, "No marker ranges found.")?;
    } else if !ranges.is_empty() {
        let mut table = Table::new();
        table.load_preset(if enable_colors { UTF8_FULL } else { ASCII_FULL });
        table.set_header(vec!["#", "Lines", "Removed"]);
        let removed_color = if enable_colors {
            table.enforce_styling();
            theme_map
                .get(&ThemeEntry::RemovedText)
                .and_then(|style| style.fg.as_ref())
                .map(|color| color.to_table_color())
        } else {
            None
        };
        for (i, range) in ranges.iter().enumerate() {
            let mut removed = Cell::new(preview(&range.content, PREVIEW_CHARS));
            if let Some(color) = removed_color {
                removed = removed.fg(color);
            }
            table.add_row(vec![
                Cell::new(i + 1),
                Cell::new(format_span(range)),
                removed,
            ]);
        }
        writeln!(writer, "{table}")?;
    }

    let totals = [
        ("Total lines", stats.total_lines),
        ("Lines after removal", stats.cleaned_lines),
        ("Ranges removed", stats.removed_ranges),
        ("Words removed", stats.total_removed_words),
    ];
    for (label, value) in totals {
        writeln!(
            writer,
            "{}: {}",
            paint(label, ThemeEntry::SummaryLabel, theme_map, enable_colors),
            paint(&value.to_string(), ThemeEntry::SummaryValue, theme_map, enable_colors)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    fn range(start: usize, end: usize, content: &str) -> RemovalRange {
        RemovalRange {
            start_line: start,
            end_line: end,
            content: content.to_string(),
        }
    }

    #[test]
    fn spans_and_previews() {
        assert_eq!(format_span(&range(4, 4, "")), "4");
        assert_eq!(format_span(&range(2, 9, "")), "2-9");
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn summary_lists_ranges_and_totals() {
        let theme = ThemeStyle::default_theme_map();
        let stats = ScanStats {
            total_lines: 4,
            cleaned_lines: 4,
            removed_ranges: 1,
            total_removed_words: 4,
        };
        let ranges = vec![range(2, 3, "[Content from line 2 to 3]")];
        let mut out = Vec::new();
        print_summary(&stats, &ranges, &mut out, &theme, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("--- Removal Summary ---"));
        assert!(text.contains("2-3"));
        assert!(text.contains("[Content from line 2 to 3]"));
        assert!(text.contains("Ranges removed: 1"));
        assert!(text.contains("Words removed: 4"));
    }

    #[test]
    fn removed_text_is_coloured_when_enabled() {
        let theme = ThemeStyle::default_theme_map();
        let stats = ScanStats {
            total_lines: 1,
            cleaned_lines: 1,
            removed_ranges: 1,
            total_removed_words: 2,
        };
        let ranges = vec![range(1, 1, "[drop me]")];

        let mut coloured = Vec::new();
        print_summary(&stats, &ranges, &mut coloured, &theme, true).unwrap();
        let coloured = String::from_utf8(coloured).unwrap();
        let row = coloured.lines().find(|l| l.contains("[drop me]")).unwrap();
        assert!(row.contains('\u{1b}'));

        let mut plain = Vec::new();
        print_summary(&stats, &ranges, &mut plain, &theme, false).unwrap();
        assert!(!String::from_utf8(plain).unwrap().contains('\u{1b}'));
    }

    #[test]
    fn empty_summary_says_so() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_summary(&ScanStats::default(), &[], &mut out, &theme, false).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No marker ranges found."));
    }
}
