use text_signals::SentimentScorer;

use crate::types::{CommentSentiments, Sentiment, SentimentReading};

pub fn analyze_sentiment(scorer: &impl SentimentScorer, text: &str) -> SentimentReading {
    let score = scorer.score(text);
    SentimentReading {
        sentiment: Sentiment::from_polarity(score.polarity),
        polarity: score.polarity,
        subjectivity: score.subjectivity,
    }
}

/// Classifies every comment and groups it, preserving receipt order
pub fn bucket_comments(
    scorer: &impl SentimentScorer,
    comments: impl IntoIterator<Item = String>,
) -> CommentSentiments {
    comments
        .into_iter()
        .fold(CommentSentiments::default(), |mut buckets, comment| {
            let reading = analyze_sentiment(scorer, &comment);
            buckets.push(reading.sentiment, comment);
            buckets
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_signals::SentimentScore;

    /// Reads the polarity straight out of the text, e.g. "0.3"
    struct LiteralScorer {
        subjectivity: f64,
    }

    impl SentimentScorer for LiteralScorer {
        fn score(&self, text: &str) -> SentimentScore {
            SentimentScore::new(text.parse().unwrap_or(0.0), self.subjectivity)
        }
    }

    #[test]
    fn test_classification_depends_only_on_polarity() {
        for subjectivity in [0.0, 0.5, 1.0] {
            let scorer = LiteralScorer { subjectivity };
            assert_eq!(analyze_sentiment(&scorer, "0.0").sentiment, Sentiment::Neutral);
            assert_eq!(analyze_sentiment(&scorer, "0.3").sentiment, Sentiment::Positive);
            assert_eq!(analyze_sentiment(&scorer, "-0.01").sentiment, Sentiment::Negative);
        }
    }

    #[test]
    fn test_reading_carries_scores() {
        let reading = analyze_sentiment(&LiteralScorer { subjectivity: 0.4 }, "-0.25");
        assert_eq!(reading.polarity, -0.25);
        assert_eq!(reading.subjectivity, 0.4);
    }

    #[test]
    fn test_bucket_comments() {
        let scorer = LiteralScorer { subjectivity: 0.0 };
        let buckets = bucket_comments(
            &scorer,
            ["0.5", "-0.2", "0", "0.1", "-1"].map(String::from),
        );

        assert_eq!(buckets.positive, vec!["0.5", "0.1"]);
        assert_eq!(buckets.negative, vec!["-0.2", "-1"]);
        assert_eq!(buckets.neutral, vec!["0"]);
    }
}
