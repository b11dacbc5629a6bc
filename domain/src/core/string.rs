//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries. Used for log previews of prompts and replies.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Case-insensitive substring test.
///
/// Both sides are lowercased; `needle` is expected to be short.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Count case-insensitive, non-overlapping occurrences of `needle`.
pub fn count_ignore_case(haystack: &str, needle: &str) -> usize {
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    haystack.to_lowercase().matches(needle.as_str()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is 2 bytes; cutting inside it must back up
        assert_eq!(truncate("héllo wörld", 6), "hé...");
        assert_eq!(truncate("日本語", 30), "日本語");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Please Act As a tutor", "act as"));
        assert!(!contains_ignore_case("Please help", "act as"));
    }

    #[test]
    fn test_count_ignore_case() {
        assert_eq!(count_ignore_case("Step by step. STEP BY STEP", "step by step"), 2);
        assert_eq!(count_ignore_case("anything", ""), 0);
    }
}
