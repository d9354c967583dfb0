use itertools::Itertools;
use text_signals::Tokenizer;

/// Alphabetic, non-stopword tokens of `text`, de-duplicated and truncated to
/// `max_keywords`.
///
/// De-duplication is exact (case-sensitive) and keeps the first occurrence,
/// so the result is deterministic and follows reading order.
pub fn extract_keywords(tokenizer: &impl Tokenizer, text: &str, max_keywords: usize) -> Vec<String> {
    tokenizer
        .tokenize(text)
        .into_iter()
        .filter(|token| token.is_alpha && !token.is_stop)
        .map(|token| token.text)
        .unique()
        .take(max_keywords)
        .collect()
}
