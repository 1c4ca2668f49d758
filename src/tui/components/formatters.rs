// Display-width-aware text helpers for the TUI
//
// Labels and URLs can contain emoji and CJK, so truncation has to count
// terminal cells, not chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate `text` to at most `max_width` terminal cells, appending an
/// ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // Reserve one cell for the ellipsis
        if width + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let out = truncate_to_width("https://images.example.com/very/long/path.jpg", 20);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 20);
    }

    #[test]
    fn wide_glyphs_are_counted_as_two_cells() {
        // The emoji is two cells wide; budget of 3 fits ellipsis + one char
        let out = truncate_to_width("🐶🐶🐶", 3);
        assert!(out.width() <= 3);
    }
}
