#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid YouTube link: {0:?}")]
    InvalidLink(String),
    #[error("Parse error: {0}")]
    ParseError(&'static str),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
