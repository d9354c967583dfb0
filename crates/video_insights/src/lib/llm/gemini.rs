use reqwest::Client;
use serde::Deserialize;

use crate::{Summarizer, SummaryResponse};

/// Instruction prepended to the transcript by the detailed-notes page
pub const NOTES_PROMPT: &str = include_str!("./prompts/notes.txt");
/// Instruction prepended to the transcript by the full analysis page
pub const ANALYSIS_PROMPT: &str = include_str!("./prompts/analysis.txt");

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content in response")]
    EmptyResponse,
}

impl GeminiClient {
    pub const DEFAULT_MODEL: &str = "gemini-pro";

    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub async fn send_generate_request(
        &self,
        text: impl Into<String>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let body = serde_json::json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{ "text": text.into() }]
                }
            ]
        });

        let resp = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GeminiError::Api { status, message });
        }

        Ok(resp.json::<GenerateContentResponse>().await?)
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<String>();
        (!text.is_empty()).then_some(text)
    }
}

impl Summarizer for GeminiClient {
    type Error = GeminiError;

    #[tracing::instrument(skip_all, fields(model = %self.model, payload_len = payload.len()))]
    async fn summarize(&self, payload: &str) -> Result<SummaryResponse, Self::Error> {
        let response = self
            .send_generate_request(payload)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))?;

        let summary = response.text().ok_or(GeminiError::EmptyResponse)?;

        Ok(SummaryResponse { summary })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_concatenates_first_candidate_parts() {
        let response = serde_json::from_value::<GenerateContentResponse>(json!({
            "candidates": [
                {"content": {"parts": [{"text": "- point one\n"}, {"text": "- point two"}], "role": "model"}, "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("- point one\n- point two"));
    }

    #[test]
    fn test_blocked_response_has_no_text() {
        let response = serde_json::from_value::<GenerateContentResponse>(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        }))
        .unwrap();
        assert_eq!(response.text(), None);

        let empty = serde_json::from_value::<GenerateContentResponse>(json!({})).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn test_prompts_end_with_a_separator() {
        assert!(NOTES_PROMPT.ends_with(": "));
        assert!(ANALYSIS_PROMPT.ends_with(": "));
    }

    #[test]
    fn test_prompt_runs_straight_into_transcript() {
        let payload = format!("{NOTES_PROMPT}hello world");
        assert!(payload.ends_with("text: hello world"), "{payload:?}");
    }
}
