pub mod builder;

use serde::Serialize;
use text_signals::{LexiconAnalyzer, SentimentScorer, Tokenizer};

use crate::{
    analysis::{bucket_comments, extract_keywords},
    error::Error,
    transcript::{TranscriptError, TranscriptFetcher},
    types::{CommentSentiments, VideoId, VideoMetadata},
    yt::{PlatformError, TranscriptSource, VideoPlatform},
    Summarizer,
};

/// Result of one stage of a request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum StageOutcome<T> {
    Ready(T),
    NotFound(String),
    Failed(String),
    /// A prior stage failed, so this one never ran
    Skipped,
}

impl<T> StageOutcome<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            StageOutcome::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<T, PlatformError>> for StageOutcome<T> {
    fn from(value: Result<T, PlatformError>) -> Self {
        match value {
            Ok(value) => StageOutcome::Ready(value),
            Err(PlatformError::NotFound(video_id)) => {
                StageOutcome::NotFound(format!("No video found for id {video_id}"))
            }
            Err(e) => StageOutcome::Failed(e.to_string()),
        }
    }
}

/// Output of the detailed notes page
#[derive(Debug, Clone, Serialize)]
pub struct NotesReport {
    pub video_id: VideoId,
    pub thumbnail_url: String,
    pub transcript: Result<String, TranscriptError>,
    pub summary: StageOutcome<String>,
}

/// Output of the full analysis page
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub video_id: VideoId,
    pub thumbnail_url: String,
    pub transcript: Result<String, TranscriptError>,
    pub summary: StageOutcome<String>,
    pub keywords: StageOutcome<Vec<String>>,
    pub details: StageOutcome<VideoMetadata>,
    pub comments: StageOutcome<CommentSentiments>,
}

/// Handles one user action end to end. Holds no per-request state, so a
/// single instance serves every request.
#[derive(Debug)]
pub struct VideoAnalyzer<T, S, P = (), N = LexiconAnalyzer> {
    transcripts: TranscriptFetcher<T>,
    summarizer: S,
    platform: P,
    nlp: N,
    prompt: String,
    max_keywords: usize,
    max_comments: usize,
}

impl<T, S, P, N> VideoAnalyzer<T, S, P, N>
where
    T: TranscriptSource + Send + Sync,
    S: Summarizer + Send + Sync,
{
    /// Instruction followed by the transcript, verbatim. No truncation or
    /// chunking is applied for long transcripts.
    pub fn summary_payload(&self, transcript: &str) -> String {
        format!("{}{}", self.prompt, transcript)
    }

    #[tracing::instrument(skip(self, transcript), fields(transcript_len = transcript.len()))]
    async fn summarize(&self, transcript: &str) -> StageOutcome<String> {
        match self
            .summarizer
            .summarize(&self.summary_payload(transcript))
            .await
        {
            Ok(response) => StageOutcome::Ready(response.summary),
            Err(e) => {
                tracing::error!(error = %e, "Error in summary generation");
                StageOutcome::Failed(format!(
                    "An error occurred while generating the summary. Please try again. ({e})"
                ))
            }
        }
    }

    /// Transcript and summary only.
    ///
    /// Fails fast with [`Error::InvalidLink`] before any upstream call when no
    /// identifier can be extracted from `link`.
    #[tracing::instrument(skip(self))]
    pub async fn notes(&self, link: &str) -> Result<NotesReport, Error> {
        let video_id = VideoId::from_link(link)?;

        let transcript = self.transcripts.fetch(&video_id).await;
        let summary = match &transcript {
            Ok(text) => self.summarize(text).await,
            Err(_) => StageOutcome::Skipped,
        };

        Ok(NotesReport {
            thumbnail_url: video_id.thumbnail_url(),
            video_id,
            transcript,
            summary,
        })
    }
}

impl<T, S, P, N> VideoAnalyzer<T, S, P, N>
where
    T: TranscriptSource + Send + Sync,
    S: Summarizer + Send + Sync,
    P: VideoPlatform + Send + Sync,
    N: Tokenizer + SentimentScorer + Send + Sync,
{
    /// Transcript, summary and keywords alongside video details and comment
    /// sentiment.
    ///
    /// The transcript, details and comments stages are independent and run
    /// concurrently; each keeps its own outcome. A missing transcript skips
    /// summary and keywords only.
    #[tracing::instrument(skip(self))]
    pub async fn analyze(&self, link: &str) -> Result<AnalysisReport, Error> {
        let video_id = VideoId::from_link(link)?;

        let (transcript, details, comments) = futures::join!(
            self.transcripts.fetch(&video_id),
            self.platform.video_details(&video_id),
            self.platform
                .top_level_comments(&video_id, self.max_comments),
        );

        let (summary, keywords) = match &transcript {
            Ok(text) => (
                self.summarize(text).await,
                StageOutcome::Ready(extract_keywords(&self.nlp, text, self.max_keywords)),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Transcript-based analysis skipped");
                (StageOutcome::Skipped, StageOutcome::Skipped)
            }
        };

        let details = StageOutcome::from(details.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to fetch video details");
        }));
        let comments = StageOutcome::from(
            comments
                .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch comments"))
                .map(|comments| bucket_comments(&self.nlp, comments)),
        );

        Ok(AnalysisReport {
            thumbnail_url: video_id.thumbnail_url(),
            video_id,
            transcript,
            summary,
            keywords,
            details,
            comments,
        })
    }
}
