use std::{
    collections::{HashMap, HashSet},
    sync::LazyLock,
};

use crate::{
    tokenizer::split_words, SentimentScore, SentimentScorer, Token, Tokenizer,
};

const STOPWORDS_DATA: &str = include_str!("./data/stopwords.txt");
const LEXICON_DATA: &str = include_str!("./data/lexicon.tsv");

/// Polarity of a scored word is multiplied by this when a negator precedes it
const NEGATION_FACTOR: f64 = -0.5;
const NEGATORS: &[&str] = &["not", "never", "no", "n't", "nothing", "hardly"];

static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    STOPWORDS_DATA
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
});

static LEXICON: LazyLock<HashMap<&'static str, LexiconEntry>> =
    LazyLock::new(|| parse_lexicon(LEXICON_DATA));

#[derive(Debug, Clone, Copy, PartialEq)]
struct LexiconEntry {
    polarity: f64,
    subjectivity: f64,
    /// Modifiers (intensity != 1.0) scale the next scored word instead of
    /// being scored themselves
    intensity: f64,
}

impl LexiconEntry {
    fn is_modifier(&self) -> bool {
        self.intensity != 1.0
    }
}

fn parse_lexicon(data: &'static str) -> HashMap<&'static str, LexiconEntry> {
    let mut lexicon = HashMap::new();

    for line in data.lines().filter(|l| !l.starts_with('#') && !l.trim().is_empty()) {
        let fields = line.split('\t').map(str::trim).collect::<Vec<_>>();
        let parsed = match fields.as_slice() {
            [word, polarity, subjectivity, intensity] => polarity
                .parse::<f64>()
                .and_then(|p| subjectivity.parse::<f64>().map(|s| (p, s)))
                .and_then(|(p, s)| intensity.parse::<f64>().map(|i| (*word, p, s, i)))
                .ok(),
            _ => None,
        };

        match parsed {
            Some((word, polarity, subjectivity, intensity)) => {
                lexicon.insert(
                    word,
                    LexiconEntry {
                        polarity,
                        subjectivity,
                        intensity,
                    },
                );
            }
            None => tracing::warn!(line, "Skipping malformed lexicon line"),
        }
    }

    lexicon
}

/// Default English collaborator: regex tokenization, an embedded stopword
/// list and an embedded adjective lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAnalyzer;

impl LexiconAnalyzer {
    pub fn is_stopword(&self, word: &str) -> bool {
        STOPWORDS.contains(word.to_lowercase().as_str())
    }
}

impl Tokenizer for LexiconAnalyzer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        split_words(text)
            .map(|word| Token::new(word, self.is_stopword(word)))
            .collect()
    }
}

impl SentimentScorer for LexiconAnalyzer {
    /// Averages the lexicon readings of every scored word in `text`.
    ///
    /// A modifier scales the next scored word; a negator within the two
    /// preceding words flips and dampens its polarity. Text without any
    /// scored word is neutral and fully objective.
    fn score(&self, text: &str) -> SentimentScore {
        let words = split_words(text)
            .flat_map(|w| {
                // "don't" -> "do", "n't"
                let lower = w.to_lowercase().replace('’', "'");
                match lower.strip_suffix("n't") {
                    Some(stem) if !stem.is_empty() => vec![stem.to_string(), "n't".to_string()],
                    _ => vec![lower],
                }
            })
            .collect::<Vec<_>>();

        let mut readings = Vec::new();
        for (idx, word) in words.iter().enumerate() {
            let Some(entry) = LEXICON.get(word.as_str()) else {
                continue;
            };
            if entry.is_modifier() {
                continue;
            }

            let preceding = &words[idx.saturating_sub(2)..idx];
            let intensity = preceding
                .last()
                .and_then(|w| LEXICON.get(w.as_str()))
                .filter(|e| e.is_modifier())
                .map(|e| e.intensity)
                .unwrap_or(1.0);
            let negated = preceding.iter().any(|w| NEGATORS.contains(&w.as_str()));

            let mut polarity = (entry.polarity * intensity).clamp(-1.0, 1.0);
            let subjectivity = (entry.subjectivity * intensity).clamp(0.0, 1.0);
            if negated {
                polarity *= NEGATION_FACTOR;
            }
            readings.push((polarity, subjectivity));
        }

        if readings.is_empty() {
            return SentimentScore::default();
        }

        let count = readings.len() as f64;
        let (polarity, subjectivity) = readings
            .iter()
            .fold((0.0, 0.0), |(p, s), (rp, rs)| (p + rp, s + rs));
        SentimentScore::new(polarity / count, subjectivity / count)
    }
}
