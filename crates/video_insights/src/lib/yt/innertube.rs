use reqwest::{header, Client, Response};
use serde_json::Value;

use crate::{
    parser::{parse_caption_tracks, parse_json3_segments, select_track, CaptionTrack, WatchPage},
    types::{Transcript, VideoId},
    yt::{TranscriptSource, TranscriptSourceError},
};

/// Caption source backed by YouTube's watch page and InnerTube player API
#[derive(Debug, Clone)]
pub struct InnerTubeTranscripts {
    client: Client,
    base_url: String,
}

impl InnerTubeTranscripts {
    const CLIENT_NAME: &str = "ANDROID";
    const CLIENT_VERSION: &str = "20.10.38";

    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: "https://www.youtube.com".into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn check_status(video_id: &VideoId, resp: &Response) -> Result<(), TranscriptSourceError> {
        let status = resp.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranscriptSourceError::Other(format!(
                "YouTube is rate limiting requests for video {video_id}"
            )));
        }
        if !status.is_success() {
            return Err(TranscriptSourceError::Other(format!(
                "Unexpected HTTP status {status} for video {video_id}"
            )));
        }
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_watch_page(&self, video_id: &VideoId) -> Result<WatchPage, TranscriptSourceError> {
        let resp = self
            .client
            .get(format!("{}/watch", self.base_url))
            .query(&[("v", video_id.as_str())])
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(header::COOKIE, "CONSENT=YES+cb")
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch watch page"))?;
        Self::check_status(video_id, &resp)?;

        let page = WatchPage::new(resp.text().await?);
        if page.requires_consent() {
            return Err(TranscriptSourceError::Other(
                "YouTube served the cookie consent page".into(),
            ));
        }
        if page.is_bot_check() {
            return Err(TranscriptSourceError::Other(
                "YouTube is requesting a captcha from this IP".into(),
            ));
        }

        Ok(page)
    }

    #[tracing::instrument(skip(self, api_key))]
    async fn fetch_player(
        &self,
        video_id: &VideoId,
        api_key: &str,
    ) -> Result<Value, TranscriptSourceError> {
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": Self::CLIENT_NAME,
                    "clientVersion": Self::CLIENT_VERSION
                }
            },
            "videoId": video_id.as_str()
        });

        let resp = self
            .client
            .post(format!("{}/youtubei/v1/player", self.base_url))
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch player response"))?;
        Self::check_status(video_id, &resp)?;

        Ok(resp.json::<Value>().await?)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_track(
        &self,
        video_id: &VideoId,
        track: &CaptionTrack,
    ) -> Result<Transcript, TranscriptSourceError> {
        if track.base_url.contains("&exp=xpe") {
            return Err(TranscriptSourceError::Other(format!(
                "Caption track of video {video_id} requires a proof-of-origin token"
            )));
        }

        let separator = if track.base_url.contains('?') { '&' } else { '?' };
        let resp = self
            .client
            .get(format!("{}{separator}fmt=json3", track.base_url))
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to fetch caption track"))?;
        Self::check_status(video_id, &resp)?;

        let body = resp.text().await?;
        let segments = parse_json3_segments(&body)
            .map_err(|e| TranscriptSourceError::Other(format!("Unreadable caption track: {e}")))?;

        Ok(Transcript {
            language_code: track.language_code.clone(),
            is_generated: track.is_generated,
            segments,
        })
    }
}

impl TranscriptSource for InnerTubeTranscripts {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
        languages: Option<&[String]>,
    ) -> Result<Transcript, TranscriptSourceError> {
        let page = self.fetch_watch_page(video_id).await?;
        let api_key = page
            .innertube_api_key()
            .map_err(|e| TranscriptSourceError::Other(e.to_string()))?;

        let player = self.fetch_player(video_id, &api_key).await?;
        let tracks = parse_caption_tracks(video_id, &player)?;
        let track = select_track(video_id, &tracks, languages)?;

        tracing::debug!(
            language = %track.language_code,
            generated = track.is_generated,
            "Selected caption track"
        );

        self.fetch_track(video_id, track).await
    }
}
