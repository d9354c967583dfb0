pub mod data_api;
pub mod innertube;

use std::future::Future;

use crate::types::{Transcript, VideoId, VideoMetadata};

/// Typed failures a caption source can report
#[derive(Debug, thiserror::Error)]
pub enum TranscriptSourceError {
    #[error("Transcripts are disabled for video {0}")]
    TranscriptsDisabled(String),
    #[error("Video {0} is unavailable")]
    VideoUnavailable(String),
    #[error("No transcript found for video {video_id} in languages {languages:?}")]
    NoTranscriptFound {
        video_id: String,
        languages: Vec<String>,
    },
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

pub trait TranscriptSource {
    /// Retrieves the caption segments of `video_id`.
    ///
    /// `languages` restricts the lookup to the given language codes in
    /// preference order; `None` accepts any available track, including
    /// auto-generated ones.
    fn fetch_transcript(
        &self,
        video_id: &VideoId,
        languages: Option<&[String]>,
    ) -> impl Future<Output = Result<Transcript, TranscriptSourceError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Video {0} was not found")]
    NotFound(String),
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("{0}")]
    Other(String),
}

/// Video statistics and comment listing
pub trait VideoPlatform {
    /// Upper bound of a single comment thread page
    const MAX_COMMENTS_PER_PAGE: usize = 100;

    fn video_details(
        &self,
        video_id: &VideoId,
    ) -> impl Future<Output = Result<VideoMetadata, PlatformError>> + Send;

    /// Text of up to `max_results` top-level comments from the first page only
    fn top_level_comments(
        &self,
        video_id: &VideoId,
        max_results: usize,
    ) -> impl Future<Output = Result<Vec<String>, PlatformError>> + Send;
}
