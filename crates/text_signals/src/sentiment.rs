use serde::Serialize;

/// Polarity in `[-1.0, 1.0]`, subjectivity in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SentimentScore {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        SentimentScore {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

pub trait SentimentScorer {
    fn score(&self, text: &str) -> SentimentScore;
}

impl<T: SentimentScorer> SentimentScorer for &T {
    fn score(&self, text: &str) -> SentimentScore {
        (**self).score(text)
    }
}
