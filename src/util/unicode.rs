use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…` if truncated.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells <= 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1; // reserve 1 cell for '…'
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = grapheme_display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// First grapheme cluster, or None for an empty string.
pub fn first_grapheme(s: &str) -> Option<&str> {
    s.graphemes(true).next()
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    if let Some((i, _)) = s[byte_offset..].grapheme_indices(true).nth(1) {
        return Some(byte_offset + i);
    }
    Some(s.len())
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

/// Convert byte offset to display column (terminal cells).
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    let clamped = byte_offset.min(s.len());
    display_width(&s[..clamped])
}

/// Display width of a grapheme cluster. Tabs count as 4.
fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn display_width_emoji() {
        assert_eq!(display_width("🎉"), 2);
        assert_eq!(display_width("🍪 Buy"), 6);
    }

    #[test]
    fn display_width_combining() {
        assert_eq!(display_width("cafe\u{0301}"), 4);
    }

    #[test]
    fn display_width_tab() {
        assert_eq!(display_width("a\tb"), 6);
    }

    #[test]
    fn truncate_no_truncation_needed() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
    }

    #[test]
    fn truncate_emoji_boundary() {
        // Wide glyph does not fit in the last remaining cell
        assert_eq!(truncate_to_width("ab🎉cd", 4), "ab\u{2026}");
    }

    #[test]
    fn truncate_tiny_budgets() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
    }

    #[test]
    fn first_grapheme_cases() {
        assert_eq!(first_grapheme(""), None);
        assert_eq!(first_grapheme("abc"), Some("a"));
        // ZWJ family is one cluster
        assert_eq!(
            first_grapheme("👨\u{200D}👩\u{200D}👧x"),
            Some("👨\u{200D}👩\u{200D}👧")
        );
    }

    #[test]
    fn grapheme_boundaries() {
        let s = "a🎉b";
        assert_eq!(next_grapheme_boundary(s, 0), Some(1));
        assert_eq!(next_grapheme_boundary(s, 1), Some(5));
        assert_eq!(next_grapheme_boundary(s, 5), Some(6));
        assert_eq!(next_grapheme_boundary(s, 6), None);
        assert_eq!(prev_grapheme_boundary(s, 6), Some(5));
        assert_eq!(prev_grapheme_boundary(s, 5), Some(1));
        assert_eq!(prev_grapheme_boundary(s, 0), None);
    }

    #[test]
    fn byte_to_display_col() {
        assert_eq!(byte_offset_to_display_col("a🎉b", 5), 3);
        assert_eq!(byte_offset_to_display_col("abc", 99), 3);
    }
}
