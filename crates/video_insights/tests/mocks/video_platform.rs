use std::sync::{Arc, Mutex};
use video_insights::{
    types::{VideoId, VideoMetadata},
    yt::{PlatformError, VideoPlatform},
};

#[derive(Clone, Default)]
pub struct MockVideoPlatform {
    pub details: Option<VideoMetadata>,
    pub comments: Vec<String>,
    pub fail_with: Option<String>,
    pub detail_calls: Arc<Mutex<Vec<String>>>,
    pub comment_calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl MockVideoPlatform {
    pub fn new(details: VideoMetadata, comments: &[&str]) -> Self {
        Self {
            details: Some(details),
            comments: comments.iter().map(|c| c.to_string()).collect(),
            ..Default::default()
        }
    }

    /// No video matches any id
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl VideoPlatform for MockVideoPlatform {
    async fn video_details(&self, video_id: &VideoId) -> Result<VideoMetadata, PlatformError> {
        self.detail_calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(PlatformError::Other(msg.clone()));
        }
        self.details
            .clone()
            .ok_or_else(|| PlatformError::NotFound(video_id.to_string()))
    }

    async fn top_level_comments(
        &self,
        video_id: &VideoId,
        max_results: usize,
    ) -> Result<Vec<String>, PlatformError> {
        self.comment_calls
            .lock()
            .unwrap()
            .push((video_id.to_string(), max_results));
        if let Some(ref msg) = self.fail_with {
            return Err(PlatformError::Api {
                status: 403,
                message: msg.clone(),
            });
        }
        Ok(self
            .comments
            .iter()
            .take(max_results.min(Self::MAX_COMMENTS_PER_PAGE))
            .cloned()
            .collect())
    }
}
