use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{M}\p{N}_]+(?:['’][\p{L}]+)*|[^\s\p{L}\p{M}\p{N}_]")
        .expect("token pattern is valid")
});

/// A single token together with the flags keyword extraction filters on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    /// Every character is alphabetic (and the token is non-empty)
    pub is_alpha: bool,
    pub is_stop: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, is_stop: bool) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Token {
            text,
            is_alpha,
            is_stop,
        }
    }
}

pub trait Tokenizer {
    /// Splits `text` into tokens in reading order.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

impl<T: Tokenizer> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        (**self).tokenize(text)
    }
}

/// Splits on word boundaries, keeping contractions attached and emitting
/// punctuation as standalone tokens.
pub(crate) fn split_words(text: &str) -> impl Iterator<Item = &str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str())
}
