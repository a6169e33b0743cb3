use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
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
        let gw = UnicodeWidthStr::width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
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
        .or(Some(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_width_ascii_and_cjk() {
        assert_eq!(display_width("milk"), 4);
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn truncate_short_string_untouched() {
        assert_eq!(truncate_to_width("eggs", 10), "eggs");
        assert_eq!(truncate_to_width("eggs", 4), "eggs");
    }

    #[test]
    fn truncate_reserves_ellipsis_cell() {
        assert_eq!(truncate_to_width("hello world", 8), "hello w\u{2026}");
        assert_eq!(truncate_to_width("hello", 1), "\u{2026}");
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn truncate_respects_wide_grapheme_boundary() {
        // "你好世界" is 8 cells; budget 4 leaves room for 你 (2) + …
        let out = truncate_to_width("你好世界", 4);
        assert_eq!(out, "你\u{2026}");
    }

    #[test]
    fn grapheme_boundaries_ascii() {
        assert_eq!(next_grapheme_boundary("abc", 0), Some(1));
        assert_eq!(next_grapheme_boundary("abc", 2), Some(3));
        assert_eq!(next_grapheme_boundary("abc", 3), None);
        assert_eq!(prev_grapheme_boundary("abc", 3), Some(2));
        assert_eq!(prev_grapheme_boundary("abc", 1), Some(0));
        assert_eq!(prev_grapheme_boundary("abc", 0), None);
    }

    #[test]
    fn grapheme_boundaries_combining() {
        let s = "cafe\u{0301}"; // é as e + combining accent
        assert_eq!(next_grapheme_boundary(s, 3), Some(s.len()));
        assert_eq!(prev_grapheme_boundary(s, s.len()), Some(3));
    }
}
