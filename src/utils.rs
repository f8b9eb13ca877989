use unicode_width::UnicodeWidthChar;

/// Cuts `s` to at most `max_width` display columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    let width: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string_no_truncation() {
        let s = "Short string";
        let result = truncate_string(s, 20);
        assert_eq!(result, "Short string");
    }

    #[test]
    fn test_truncate_string_with_truncation() {
        let s = "This is a very long string that should be truncated";
        let result = truncate_string(s, 20);
        assert_eq!(result, "This is a very lo...");
        assert!(result.len() <= 20);
    }

    #[test]
    fn test_truncate_string_exact_length() {
        let s = "Exactly twenty chars";
        assert_eq!(truncate_string(s, 20), s);
    }

    #[test]
    fn test_truncate_string_wide_chars() {
        // Each CJK char is two columns wide.
        let s = "日本語の質問です";
        let result = truncate_string(s, 9);
        assert_eq!(result, "日本語...");
    }

    #[test]
    fn test_truncate_string_multibyte_boundary() {
        let s = "Qué es éso, señor?";
        let result = truncate_string(s, 8);
        assert_eq!(result, "Qué e...");
    }
}
