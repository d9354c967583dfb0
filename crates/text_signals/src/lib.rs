//! # Text Signals
//!
//! Lightweight natural-language collaborators used by the video analysis
//! pipeline: a tokenizer that flags alphabetic tokens and stopwords, and a
//! lexicon-based scorer that produces polarity and subjectivity readings.
//!
//! Both capabilities sit behind traits so callers depend on the contract only
//! and tests can substitute deterministic fakes.

mod lexicon;
mod sentiment;
mod tokenizer;

pub use lexicon::LexiconAnalyzer;
pub use sentiment::{SentimentScore, SentimentScorer};
pub use tokenizer::{Token, Tokenizer};
