use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `width` terminal columns, ending in `…` when cut.
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_untouched() {
        assert_eq!(truncate("Love Song", 20), "Love Song");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_long_strings_get_ellipsis() {
        assert_eq!(truncate("Bohemian Rhapsody", 8), "Bohemia…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_wide_chars_counted_by_columns() {
        assert_eq!(truncate("日本語の歌", 5), "日本…");
    }
}
