use std::{fmt::Display, future::Future};

use serde::Serialize;

pub trait Summarizer {
    type Error: Display;

    /// Sends `payload` as a single request and returns the generated text.
    fn summarize(
        &self,
        payload: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}
