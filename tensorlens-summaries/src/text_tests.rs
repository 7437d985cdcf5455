#[cfg(test)]
mod tests {
    use crate::text::*;
    use proptest::prelude::*;

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(normalize_summary("  Tensor(shape: [2, 3])\n"), "Tensor(shape: [2, 3])");
    }

    #[test]
    fn test_strips_double_quotes() {
        assert_eq!(normalize_summary("\"hello\""), "hello");
    }

    #[test]
    fn test_strips_single_quotes() {
        assert_eq!(normalize_summary("'hello'"), "hello");
    }

    #[test]
    fn test_strips_only_one_quote_layer() {
        assert_eq!(normalize_summary("\"\"hello\"\""), "\"hello\"");
    }

    #[test]
    fn test_lone_quote_survives() {
        assert_eq!(normalize_summary("\""), "\"");
    }

    #[test]
    fn test_mismatched_quotes_survive() {
        assert_eq!(normalize_summary("\"hello'"), "\"hello'");
        assert_eq!(normalize_summary("\"hello"), "\"hello");
    }

    #[test]
    fn test_unescapes_newlines() {
        assert_eq!(normalize_summary("line1\\nline2"), "line1\nline2");
    }

    #[test]
    fn test_trim_then_quotes_then_newlines() {
        assert_eq!(normalize_summary("  \"line1\\nline2\"  "), "line1\nline2");
    }

    #[test]
    fn test_whitespace_inside_quotes_survives() {
        // Trim runs before the quote strip, so quoted padding is kept.
        assert_eq!(normalize_summary("\" a \""), " a ");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize_summary(""), "");
        assert_eq!(normalize_summary("   \t  "), "");
        assert_eq!(normalize_summary("\"\""), "");
    }

    proptest! {
        #[test]
        fn normalize_never_panics(raw in ".*") {
            let _ = normalize_summary(&raw);
        }

        #[test]
        fn plain_text_just_gets_trimmed(raw in "[ a-zA-Z0-9(),:\\[\\]]*") {
            // No quotes, no escapes: normalization is exactly trim.
            prop_assert_eq!(normalize_summary(&raw), raw.trim());
        }
    }
}
