//! Transcript acquisition with a language-preference fallback.

use serde::Serialize;

use crate::{
    types::VideoId,
    yt::{TranscriptSource, TranscriptSourceError},
};

/// Why no transcript text could be produced.
///
/// `NotAvailable` is recoverable: callers skip transcript-based analysis and
/// carry on with the remaining stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum TranscriptError {
    #[error("Subtitles are disabled for this video.")]
    Disabled,
    #[error("The video is unavailable or does not exist. Please check the link.")]
    VideoUnavailable,
    #[error("No transcript available in any language for this video.")]
    NotAvailable,
    #[error("An unexpected error occurred while fetching the transcript: {0}")]
    Unexpected(String),
}

impl TranscriptError {
    /// Warnings rather than errors from the user's point of view
    pub fn is_recoverable(&self) -> bool {
        matches!(self, TranscriptError::Disabled | TranscriptError::NotAvailable)
    }
}

#[derive(Debug)]
pub struct TranscriptFetcher<S> {
    source: S,
    preferred_languages: Vec<String>,
}

impl<S: TranscriptSource> TranscriptFetcher<S> {
    /// A fetcher making a single unrestricted attempt
    pub fn new(source: S) -> Self {
        Self {
            source,
            preferred_languages: Vec::new(),
        }
    }

    /// Try `languages` first, then fall back to any available track
    pub fn with_preferred_languages<L: Into<String>>(
        mut self,
        languages: impl IntoIterator<Item = L>,
    ) -> Self {
        self.preferred_languages = languages.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the caption text of `video_id`, segments joined by single
    /// spaces. Nothing is retried beyond the language fallback.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, video_id: &VideoId) -> Result<String, TranscriptError> {
        if self.preferred_languages.is_empty() {
            return self
                .source
                .fetch_transcript(video_id, None)
                .await
                .map(|t| t.joined_text())
                .map_err(classify);
        }

        match self
            .source
            .fetch_transcript(video_id, Some(self.preferred_languages.as_slice()))
            .await
        {
            Ok(transcript) => Ok(transcript.joined_text()),
            Err(TranscriptSourceError::NoTranscriptFound { languages, .. }) => {
                tracing::info!(
                    ?languages,
                    "No transcript in preferred languages, trying any language"
                );
                self.source
                    .fetch_transcript(video_id, None)
                    .await
                    .map(|t| t.joined_text())
                    .map_err(|e| {
                        tracing::warn!(error = %e, "No transcript available in any language");
                        TranscriptError::NotAvailable
                    })
            }
            Err(e) => Err(classify(e)),
        }
    }
}

fn classify(error: TranscriptSourceError) -> TranscriptError {
    match error {
        TranscriptSourceError::TranscriptsDisabled(video_id) => {
            tracing::warn!(%video_id, "Transcripts are disabled");
            TranscriptError::Disabled
        }
        TranscriptSourceError::VideoUnavailable(video_id) => {
            tracing::error!(%video_id, "Video unavailable");
            TranscriptError::VideoUnavailable
        }
        TranscriptSourceError::NoTranscriptFound { video_id, .. } => {
            tracing::warn!(%video_id, "No transcript available");
            TranscriptError::NotAvailable
        }
        e => {
            tracing::error!(error = %e, "Unexpected transcript error");
            TranscriptError::Unexpected(e.to_string())
        }
    }
}
