//! Naive text truncation.

/// Number of whitespace-delimited tokens kept by [`summarize`].
pub const SUMMARY_TOKENS: usize = 40;

/// Truncate `text` to its first [`SUMMARY_TOKENS`] tokens.
///
/// Splits on runs of whitespace and rejoins with single spaces, so
/// shorter inputs come back with normalized spacing. This is purely a
/// truncation: no sentence-boundary or punctuation awareness.
pub fn summarize(text: &str) -> String {
    text.split_whitespace()
        .take(SUMMARY_TOKENS)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(summarize("a b c"), "a b c");
    }

    #[test]
    fn long_text_keeps_first_40_tokens() {
        let words: Vec<String> = (1..=50).map(|i| format!("w{i}")).collect();
        let text = words.join(" ");
        let expected = words[..SUMMARY_TOKENS].join(" ");
        assert_eq!(summarize(&text), expected);
    }

    #[test]
    fn whitespace_runs_normalized() {
        assert_eq!(summarize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn idempotent_on_short_output() {
        let once = summarize("one  two   three");
        assert_eq!(summarize(&once), once);
    }

    #[test]
    fn idempotent_on_truncated_output() {
        let text = (1..=100)
            .map(|i| format!("w{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let once = summarize(&text);
        assert_eq!(summarize(&once), once);
    }

    #[test]
    fn empty_input() {
        assert_eq!(summarize(""), "");
        assert_eq!(summarize("   "), "");
    }
}
