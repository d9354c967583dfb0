//! Request-scoped values produced and consumed by the analysis stages.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The platform's short code naming a video, e.g. `dQw4w9WgXcQ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    const THUMBNAIL_BASE_URL: &str = "https://img.youtube.com/vi";
    const WATCH_BASE_URL: &str = "https://www.youtube.com/watch";

    /// Takes the segment between the first and second `=` of `link`.
    ///
    /// This is deliberately a naive split: `watch?v=ID` yields `ID`, while
    /// `watch?v=ID&t=10` yields `ID&t`. A link without `=`, or with nothing
    /// after it, is rejected as [`Error::InvalidLink`].
    pub fn from_link(link: &str) -> Result<Self, Error> {
        let link = link.trim();
        match link.split('=').nth(1) {
            Some(id) if !id.is_empty() => Ok(VideoId(id.to_string())),
            _ => Err(Error::InvalidLink(link.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn thumbnail_url(&self) -> String {
        format!("{}/{}/0.jpg", Self::THUMBNAIL_BASE_URL, self.0)
    }

    pub fn watch_url(&self) -> String {
        format!("{}?v={}", Self::WATCH_BASE_URL, self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VideoId {
    fn from(value: &str) -> Self {
        VideoId(value.to_string())
    }
}

/// One timed unit of caption text. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl CaptionSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        CaptionSegment {
            text: text.into(),
            start,
            duration,
        }
    }
}

/// Caption track as returned by a transcript source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub language_code: String,
    pub is_generated: bool,
    pub segments: Vec<CaptionSegment>,
}

impl Transcript {
    /// Joins every segment's text in receipt order with single spaces.
    /// Timing information is dropped.
    pub fn joined_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VideoMetadata {
    pub title: String,
    pub channel_title: String,
    pub channel_id: String,
    pub published_at: Option<DateTime<Utc>>,
    pub views: u64,
    pub likes: u64,
    /// Rarely published by the platform anymore; usually zero
    pub dislikes: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Strict sign test; there is no tolerance band around zero.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentReading {
    pub sentiment: Sentiment,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Comments grouped by sentiment, each bucket in receipt order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentSentiments {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
    pub neutral: Vec<String>,
}

impl CommentSentiments {
    pub fn push(&mut self, sentiment: Sentiment, comment: String) {
        match sentiment {
            Sentiment::Positive => self.positive.push(comment),
            Sentiment::Negative => self.negative.push(comment),
            Sentiment::Neutral => self.neutral.push(comment),
        }
    }

    pub fn total(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }
}
