use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    types::{VideoId, VideoMetadata},
    yt::{PlatformError, VideoPlatform},
};

/// YouTube Data API v3 client
#[derive(Debug, Clone)]
pub struct YouTubeDataClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeDataClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: "https://www.googleapis.com/youtube/v3".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
    ) -> Result<T, PlatformError> {
        let resp = self
            .client
            .get(format!("{}/{resource}", self.base_url))
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, resource, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(PlatformError::Api { status, message });
        }

        Ok(resp.json::<T>().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: VideoSnippet,
    statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
    #[serde(default)]
    channel_id: String,
    published_at: Option<String>,
}

/// Counts are decimal strings in the API payload
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    view_count: Option<String>,
    like_count: Option<String>,
    dislike_count: Option<String>,
    comment_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    #[serde(default)]
    text_original: String,
}

fn count(value: Option<&String>) -> u64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(0)
}

impl From<VideoItem> for VideoMetadata {
    fn from(VideoItem { snippet, statistics }: VideoItem) -> Self {
        let stats = statistics.unwrap_or_default();
        let published_at = snippet
            .published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        VideoMetadata {
            title: snippet.title,
            channel_title: snippet.channel_title,
            channel_id: snippet.channel_id,
            published_at,
            views: count(stats.view_count.as_ref()),
            likes: count(stats.like_count.as_ref()),
            dislikes: count(stats.dislike_count.as_ref()),
            comments: count(stats.comment_count.as_ref()),
        }
    }
}

impl VideoPlatform for YouTubeDataClient {
    #[tracing::instrument(skip(self))]
    async fn video_details(&self, video_id: &VideoId) -> Result<VideoMetadata, PlatformError> {
        let response = self
            .get::<ListResponse<VideoItem>>(
                "videos",
                &[("part", "snippet,statistics"), ("id", video_id.as_str())],
            )
            .await?;

        response
            .items
            .into_iter()
            .next()
            .map(VideoMetadata::from)
            .ok_or_else(|| PlatformError::NotFound(video_id.to_string()))
    }

    #[tracing::instrument(skip(self))]
    async fn top_level_comments(
        &self,
        video_id: &VideoId,
        max_results: usize,
    ) -> Result<Vec<String>, PlatformError> {
        let max_results = max_results.min(Self::MAX_COMMENTS_PER_PAGE).to_string();
        let response = self
            .get::<ListResponse<CommentThread>>(
                "commentThreads",
                &[
                    ("part", "snippet"),
                    ("videoId", video_id.as_str()),
                    ("maxResults", max_results.as_str()),
                ],
            )
            .await?;

        Ok(response
            .items
            .into_iter()
            .map(|thread| thread.snippet.top_level_comment.snippet.text_original)
            .collect())
    }
}
