use std::sync::{Arc, Mutex};
use video_insights::{
    types::{CaptionSegment, Transcript, VideoId},
    yt::{TranscriptSource, TranscriptSourceError},
};

/// Scripted reply for one kind of lookup
#[derive(Clone)]
pub enum Reply {
    Segments(Vec<String>),
    Disabled,
    Unavailable,
    NotFound,
    Other(String),
}

impl Reply {
    pub fn segments(texts: &[&str]) -> Self {
        Reply::Segments(texts.iter().map(|t| t.to_string()).collect())
    }

    fn resolve(
        &self,
        video_id: &VideoId,
        languages: Option<&[String]>,
    ) -> Result<Transcript, TranscriptSourceError> {
        let id = video_id.to_string();
        match self {
            Reply::Segments(texts) => Ok(Transcript {
                language_code: languages
                    .and_then(|l| l.first().cloned())
                    .unwrap_or_else(|| "xx".to_string()),
                is_generated: languages.is_none(),
                segments: texts
                    .iter()
                    .enumerate()
                    .map(|(i, t)| CaptionSegment::new(t.as_str(), i as f64, 1.0))
                    .collect(),
            }),
            Reply::Disabled => Err(TranscriptSourceError::TranscriptsDisabled(id)),
            Reply::Unavailable => Err(TranscriptSourceError::VideoUnavailable(id)),
            Reply::NotFound => Err(TranscriptSourceError::NoTranscriptFound {
                video_id: id,
                languages: languages.map(<[String]>::to_vec).unwrap_or_default(),
            }),
            Reply::Other(msg) => Err(TranscriptSourceError::Other(msg.clone())),
        }
    }
}

/// Answers restricted lookups with `restricted` and unrestricted ones with
/// `any`. Every call's language restriction is recorded.
#[derive(Clone)]
pub struct MockTranscriptSource {
    pub restricted: Reply,
    pub any: Reply,
    pub calls: Arc<Mutex<Vec<Option<Vec<String>>>>>,
}

impl MockTranscriptSource {
    pub fn new(restricted: Reply, any: Reply) -> Self {
        Self {
            restricted,
            any,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Same reply regardless of the language restriction
    pub fn always(reply: Reply) -> Self {
        Self::new(reply.clone(), reply)
    }
}

impl TranscriptSource for MockTranscriptSource {
    async fn fetch_transcript(
        &self,
        video_id: &VideoId,
        languages: Option<&[String]>,
    ) -> Result<Transcript, TranscriptSourceError> {
        self.calls
            .lock()
            .unwrap()
            .push(languages.map(<[String]>::to_vec));
        match languages {
            Some(_) => self.restricted.resolve(video_id, languages),
            None => self.any.resolve(video_id, languages),
        }
    }
}
