//! HTTP presentation of the analyzer: one HTML page per variant plus a JSON
//! endpoint returning the raw report.

pub mod render;

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use text_signals::{SentimentScorer, Tokenizer};
use tower_http::trace::TraceLayer;

use crate::{
    error::Error,
    types::VideoId,
    yt::{TranscriptSource, VideoPlatform},
    Summarizer, VideoAnalyzer,
};

/// Query string of the page: the link typed by the user and, once the button
/// was pressed, the action marker
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub link: String,
    pub action: Option<String>,
}

impl PageQuery {
    fn link(&self) -> Option<&str> {
        let link = self.link.trim();
        (!link.is_empty()).then_some(link)
    }

    fn triggered(&self) -> bool {
        self.action.is_some()
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiQuery {
    pub link: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<Error> for ApiError {
    fn from(value: Error) -> Self {
        let status = match value {
            Error::InvalidLink(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError {
            status,
            message: value.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

/// Page description shared by both variants
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub title: &'static str,
    pub button: &'static str,
}

impl PageSpec {
    pub const NOTES: PageSpec = PageSpec {
        title: "YouTube Transcript to Detailed Notes Converter",
        button: "Get Detailed Notes",
    };
    pub const ANALYSIS: PageSpec = PageSpec {
        title: "YouTube Video Analysis Tool",
        button: "Analyze Video",
    };
}

/// Form plus, when a link is present, its thumbnail or an invalid-link
/// message. Returns the extracted id when the link is valid.
fn page_header(spec: PageSpec, query: &PageQuery) -> (String, Option<VideoId>) {
    let mut body = render::form(spec, &query.link);
    let Some(link) = query.link() else {
        return (body, None);
    };

    match VideoId::from_link(link) {
        Ok(video_id) => {
            body.push_str(&render::thumbnail(&video_id));
            (body, Some(video_id))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid link submitted");
            body.push_str(&render::error(
                "Invalid YouTube link. Please provide a valid URL.",
            ));
            (body, None)
        }
    }
}

pub async fn notes_page<T, S, P, N>(
    State(analyzer): State<Arc<VideoAnalyzer<T, S, P, N>>>,
    Query(query): Query<PageQuery>,
) -> Html<String>
where
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    P: Send + Sync + 'static,
    N: Send + Sync + 'static,
{
    let (mut body, video_id) = page_header(PageSpec::NOTES, &query);

    if let (Some(link), Some(_), true) = (query.link(), video_id, query.triggered()) {
        match analyzer.notes(link).await {
            Ok(report) => body.push_str(&render::notes_report(&report)),
            Err(e) => body.push_str(&render::error(&e.to_string())),
        }
    }

    Html(render::page(PageSpec::NOTES, &body))
}

pub async fn notes_api<T, S, P, N>(
    State(analyzer): State<Arc<VideoAnalyzer<T, S, P, N>>>,
    Query(query): Query<ApiQuery>,
) -> Result<Response, ApiError>
where
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    P: Send + Sync + 'static,
    N: Send + Sync + 'static,
{
    let report = analyzer.notes(&query.link).await?;
    Ok(Json(report).into_response())
}

pub async fn analysis_page<T, S, P, N>(
    State(analyzer): State<Arc<VideoAnalyzer<T, S, P, N>>>,
    Query(query): Query<PageQuery>,
) -> Html<String>
where
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    P: VideoPlatform + Send + Sync + 'static,
    N: Tokenizer + SentimentScorer + Send + Sync + 'static,
{
    let (mut body, video_id) = page_header(PageSpec::ANALYSIS, &query);

    if let (Some(link), Some(_), true) = (query.link(), video_id, query.triggered()) {
        match analyzer.analyze(link).await {
            Ok(report) => body.push_str(&render::analysis_report(&report)),
            Err(e) => body.push_str(&render::error(&format!("An error occurred: {e}"))),
        }
    }

    Html(render::page(PageSpec::ANALYSIS, &body))
}

pub async fn analysis_api<T, S, P, N>(
    State(analyzer): State<Arc<VideoAnalyzer<T, S, P, N>>>,
    Query(query): Query<ApiQuery>,
) -> Result<Response, ApiError>
where
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    P: VideoPlatform + Send + Sync + 'static,
    N: Tokenizer + SentimentScorer + Send + Sync + 'static,
{
    let report = analyzer.analyze(&query.link).await?;
    Ok(Json(report).into_response())
}

async fn health() -> &'static str {
    "ok"
}

/// Transcript and summary page (`/`) and `/api/notes`
pub fn notes_router<T, S, P, N>(analyzer: VideoAnalyzer<T, S, P, N>) -> Router
where
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    P: Send + Sync + 'static,
    N: Send + Sync + 'static,
{
    Router::new()
        .route("/", get(notes_page::<T, S, P, N>))
        .route("/api/notes", get(notes_api::<T, S, P, N>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(analyzer))
}

/// Full analysis page (`/`) and `/api/analyze`
pub fn analysis_router<T, S, P, N>(analyzer: VideoAnalyzer<T, S, P, N>) -> Router
where
    T: TranscriptSource + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    P: VideoPlatform + Send + Sync + 'static,
    N: Tokenizer + SentimentScorer + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(analysis_page::<T, S, P, N>))
        .route("/api/analyze", get(analysis_api::<T, S, P, N>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(analyzer))
}
