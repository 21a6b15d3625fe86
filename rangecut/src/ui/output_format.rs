//! Themed, colour-aware message printing.
//!
//! Colour is applied only when the caller says the target stream supports it,
//! so redirected output stays free of escape codes.

use owo_colors::OwoColorize;
use std::io::{self, Write};

use crate::ui::theme::{ThemeEntry, ThemeMap};

/// Renders `text` in the colour configured for `entry`.
pub fn paint(text: &str, entry: ThemeEntry, theme_map: &ThemeMap, enable_colors: bool) -> String {
    if !enable_colors {
        return text.to_string();
    }
    match theme_map.get(&entry).and_then(|style| style.fg.as_ref()) {
        Some(color) => text.color(color.to_ansi_color()).to_string(),
        None => text.to_string(),
    }
}

fn print_tagged(
    writer: &mut dyn Write,
    tag: &str,
    message: &str,
    entry: ThemeEntry,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    writeln!(
        writer,
        "{} {}",
        paint(tag, entry, theme_map, enable_colors),
        message
    )
}

pub fn print_info_message(
    writer: &mut dyn Write,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_tagged(writer, "[i]", message, ThemeEntry::Info, theme_map, enable_colors)
}

pub fn print_success_message(
    writer: &mut dyn Write,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_tagged(writer, "[ok]", message, ThemeEntry::Success, theme_map, enable_colors)
}

pub fn print_warn_message(
    writer: &mut dyn Write,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_tagged(writer, "[!]", message, ThemeEntry::Warn, theme_map, enable_colors)
}

pub fn print_error_message(
    writer: &mut dyn Write,
    message: &str,
    theme_map: &ThemeMap,
    enable_colors: bool,
) -> io::Result<()> {
    print_tagged(writer, "[error]", message, ThemeEntry::Error, theme_map, enable_colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;

    #[test]
    fn plain_output_has_no_escape_codes() {
        let theme = ThemeStyle::default_theme_map();
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", &theme, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[error] boom\n");
    }

    #[test]
    fn coloured_output_wraps_the_tag() {
        let theme = ThemeStyle::default_theme_map();
        let painted = paint("x", ThemeEntry::Error, &theme, true);
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains('x'));
    }
}
