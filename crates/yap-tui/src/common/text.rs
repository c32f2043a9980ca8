//! Text utilities for TUI rendering.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds `max_width` columns.
///
/// Uses unicode width, so wide characters (CJK, emoji) are measured the way
/// the terminal draws them.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Greedy word wrap to `max_width` columns.
///
/// Words longer than a line are truncated rather than split.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word = truncate_with_ellipsis(word, max_width);
        if current.is_empty() {
            current = word;
        } else if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis_short() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_exact() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_with_ellipsis_truncated() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello w…");
    }

    #[test]
    fn test_truncate_with_ellipsis_wide_chars() {
        assert_eq!(truncate_with_ellipsis("📝📝📝", 4), "📝…");
    }

    #[test]
    fn test_wrap_words_breaks_on_spaces() {
        assert_eq!(
            wrap_words("Where thoughts become stories", 15),
            vec!["Where thoughts", "become stories"]
        );
    }

    #[test]
    fn test_wrap_words_zero_width() {
        assert!(wrap_words("anything", 0).is_empty());
    }
}
