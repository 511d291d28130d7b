//! Whitespace word counting and word-based truncation.
//!
//! # Responsibility
//! - Count words for the submission limit and the composer counter.
//! - Produce word-truncated previews for the feed.
//!
//! # Invariants
//! - A word is any maximal run of non-whitespace characters.
//! - Untruncated previews return the input unchanged, whitespace included.
//! - Truncated previews are re-joined with single ASCII spaces.

/// Result of word-based truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncation {
    /// Text to display.
    pub preview: String,
    /// Whether words were dropped from the input.
    pub was_truncated: bool,
}

/// Counts whitespace-separated words in `text`.
///
/// Empty and whitespace-only input yields 0.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncates `text` to its first `max_words` words.
///
/// Never fails. Returns `text` verbatim when it already fits.
pub fn truncate_words(text: &str, max_words: usize) -> Truncation {
    if count_words(text) <= max_words {
        return Truncation {
            preview: text.to_string(),
            was_truncated: false,
        };
    }

    let preview = text
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ");
    Truncation {
        preview,
        was_truncated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::{count_words, truncate_words};

    #[test]
    fn count_ignores_surrounding_and_repeated_whitespace() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("\n\t "), 0);
        assert_eq!(count_words("  one  two\n\nthree\t"), 3);
    }

    #[test]
    fn count_treats_punctuation_runs_as_words() {
        assert_eq!(count_words("wait ... what?!"), 3);
        assert_eq!(count_words("--"), 1);
    }

    #[test]
    fn truncate_keeps_short_text_verbatim() {
        let text = "line one\n\n  line two";
        let result = truncate_words(text, 4);
        assert!(!result.was_truncated);
        assert_eq!(result.preview, text);
    }

    #[test]
    fn truncate_at_exact_limit_is_not_truncated() {
        let result = truncate_words("a b c", 3);
        assert!(!result.was_truncated);
        assert_eq!(result.preview, "a b c");
    }

    #[test]
    fn truncate_joins_leading_words_with_single_spaces() {
        let result = truncate_words("  first\n\nsecond\tthird fourth", 3);
        assert!(result.was_truncated);
        assert_eq!(result.preview, "first second third");
        assert_eq!(count_words(&result.preview), 3);
    }

    #[test]
    fn truncate_empty_input_yields_empty_preview() {
        let result = truncate_words("", 0);
        assert!(!result.was_truncated);
        assert_eq!(result.preview, "");
    }

    #[test]
    fn truncate_to_zero_words_drops_everything() {
        let result = truncate_words("something", 0);
        assert!(result.was_truncated);
        assert_eq!(result.preview, "");
    }
}
