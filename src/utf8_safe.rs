//! Character-boundary-safe trimming for echoing untrusted input.
//!
//! Inputs that fail to decode may contain arbitrary non-ASCII text, so every
//! cut here is made on `char` boundaries.

/// Returns a prefix of the string up to `max_chars` characters.
pub fn safe_prefix(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Returns the last `max_chars` characters of the string.
pub fn safe_suffix(s: &str, max_chars: usize) -> &str {
    if max_chars == 0 {
        return "";
    }
    match s.char_indices().rev().nth(max_chars - 1) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

/// Shortens a string to `max_chars` characters by cutting out its middle.
///
/// Both ends stay visible, which keeps the start of an input and the region
/// where decoding usually fails. The result never exceeds `max_chars`.
pub fn ellipsize_middle(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    if max_chars == 1 {
        return String::from("…");
    }

    let keep = max_chars - 1;
    let head = keep - keep / 2;
    let tail = keep / 2;
    format!("{}…{}", safe_prefix(s, head), safe_suffix(s, tail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_prefix() {
        assert_eq!(safe_prefix("e299a5", 2), "e2");
        assert_eq!(safe_prefix("e299a5", 10), "e299a5");
        assert_eq!(safe_prefix("e299a5", 0), "");
        assert_eq!(safe_prefix("", 5), "");
        assert_eq!(safe_prefix("你好世界", 2), "你好");
        assert_eq!(safe_prefix("🦀Rust", 2), "🦀R");
    }

    #[test]
    fn test_safe_suffix() {
        assert_eq!(safe_suffix("hello world", 5), "world");
        assert_eq!(safe_suffix("你好世界", 2), "世界");
        assert_eq!(safe_suffix("test", 10), "test");
        assert_eq!(safe_suffix("test", 0), "");
        assert_eq!(safe_suffix("", 5), "");
    }

    #[test]
    fn test_ellipsize_middle() {
        assert_eq!(ellipsize_middle("4142", 10), "4142");
        assert_eq!(ellipsize_middle("0123456789", 5), "01…89");
        assert_eq!(ellipsize_middle("0123456789", 6), "012…89");
        assert_eq!(ellipsize_middle("你好世界你好", 4), "你好…好");
        assert_eq!(ellipsize_middle("test", 1), "…");
        assert_eq!(ellipsize_middle("test", 0), "");
        assert_eq!(ellipsize_middle("", 0), "");
    }

    #[test]
    fn test_ellipsize_respects_limit() {
        let long = "e2".repeat(100);
        let shown = ellipsize_middle(&long, 64);
        assert_eq!(shown.chars().count(), 64);
        assert!(shown.starts_with("e2e2"));
    }
}
