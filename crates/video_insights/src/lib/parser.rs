//! # InnerTube Parser
//!
//! Pulls the pieces the transcript source needs out of YouTube's responses:
//! the InnerTube API key embedded in the watch page, the caption track list
//! of a player response and the segments of a `json3` caption document.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::Error,
    types::{CaptionSegment, VideoId},
    yt::TranscriptSourceError,
};

static INNERTUBE_API_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#).unwrap());

pub struct WatchPage(String);

impl Deref for WatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for WatchPage {
    fn from(value: String) -> Self {
        WatchPage(value)
    }
}

impl WatchPage {
    pub fn new(html: String) -> Self {
        WatchPage(html)
    }

    /// The EU cookie consent interstitial instead of the actual page
    pub fn requires_consent(&self) -> bool {
        self.contains("action=\"https://consent.youtube.com/s\"")
    }

    pub fn is_bot_check(&self) -> bool {
        self.contains("class=\"g-recaptcha\"")
    }

    pub fn innertube_api_key(&self) -> Result<String, Error> {
        INNERTUBE_API_KEY_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or(Error::ParseError(
                "Failed to find INNERTUBE_API_KEY in the watch page",
            ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptionTrack {
    pub language_code: String,
    pub base_url: String,
    pub is_generated: bool,
}

/// Checks playability and lists the caption tracks of an InnerTube player
/// response, in the order the platform returned them.
#[tracing::instrument(skip(player))]
pub fn parse_caption_tracks(
    video_id: &VideoId,
    player: &Value,
) -> Result<Vec<CaptionTrack>, TranscriptSourceError> {
    assert_playability(video_id, player)?;

    let Some(renderer) = player["captions"]["playerCaptionsTracklistRenderer"].as_object() else {
        return Err(TranscriptSourceError::TranscriptsDisabled(
            video_id.to_string(),
        ));
    };

    let tracks = renderer
        .get("captionTracks")
        .and_then(Value::as_array)
        .map(|tracks| {
            tracks
                .iter()
                .filter_map(|track| {
                    let language_code = track["languageCode"].as_str()?.to_string();
                    let base_url = track["baseUrl"].as_str()?.replace("&fmt=srv3", "");
                    let is_generated = track["kind"].as_str() == Some("asr");
                    Some(CaptionTrack {
                        language_code,
                        base_url,
                        is_generated,
                    })
                })
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    if tracks.is_empty() {
        return Err(TranscriptSourceError::TranscriptsDisabled(
            video_id.to_string(),
        ));
    }

    Ok(tracks)
}

fn assert_playability(video_id: &VideoId, player: &Value) -> Result<(), TranscriptSourceError> {
    let status = player["playabilityStatus"]["status"].as_str().unwrap_or("OK");
    if status == "OK" {
        return Ok(());
    }

    let reason = player["playabilityStatus"]["reason"]
        .as_str()
        .unwrap_or_default();

    match status {
        "ERROR" if reason.contains("unavailable") => Err(
            TranscriptSourceError::VideoUnavailable(video_id.to_string()),
        ),
        "LOGIN_REQUIRED" if reason.to_lowercase().contains("private") => Err(
            TranscriptSourceError::VideoUnavailable(video_id.to_string()),
        ),
        _ => Err(TranscriptSourceError::Other(format!(
            "Video {video_id} is not playable ({status}): {reason}"
        ))),
    }
}

/// Picks the track to download.
///
/// With a language list, the first language having a manually created track
/// wins, else the first having a generated one. Without a list, the first
/// manual track, else the first generated track.
pub fn select_track<'a>(
    video_id: &VideoId,
    tracks: &'a [CaptionTrack],
    languages: Option<&[String]>,
) -> Result<&'a CaptionTrack, TranscriptSourceError> {
    let find = move |generated: bool, lang: Option<&str>| {
        tracks
            .iter()
            .find(|t| t.is_generated == generated && lang.map_or(true, |l| t.language_code == l))
    };

    let selected = match languages {
        Some(languages) => languages
            .iter()
            .find_map(|l| find(false, Some(l.as_str())))
            .or_else(|| languages.iter().find_map(|l| find(true, Some(l.as_str())))),
        None => find(false, None).or_else(|| find(true, None)),
    };

    selected.ok_or_else(|| TranscriptSourceError::NoTranscriptFound {
        video_id: video_id.to_string(),
        languages: languages.map(<[String]>::to_vec).unwrap_or_default(),
    })
}

#[derive(Debug, Deserialize)]
struct Json3Document {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Json3Event {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

/// Converts a `fmt=json3` caption document into segments.
///
/// Events without `segs` (window/style events) and events whose text is only
/// whitespace are skipped. Other texts are kept as received.
pub fn parse_json3_segments(body: &str) -> Result<Vec<CaptionSegment>, Error> {
    let document = serde_json::from_str::<Json3Document>(body)?;

    let segments = document
        .events
        .into_iter()
        .filter_map(|event| {
            let text = event
                .segs?
                .into_iter()
                .map(|s| s.utf8)
                .collect::<String>();
            if text.trim().is_empty() {
                return None;
            }
            Some(CaptionSegment::new(
                text,
                event.t_start_ms as f64 / 1000.0,
                event.d_duration_ms as f64 / 1000.0,
            ))
        })
        .collect();

    Ok(segments)
}
