use std::{net::SocketAddr, time::Duration};

use clap::Args;

use crate::gemini::GeminiClient;

/// Settings shared by both binaries
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address the web page is served on
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8501")]
    pub listen: SocketAddr,

    /// Google Generative Language API key. Checked lazily on first use
    #[arg(long, env = "GOOGLE_API_KEY", default_value = "", hide_env_values = true)]
    pub google_api_key: String,

    /// Gemini model used for summaries
    #[arg(long, env = "GEMINI_MODEL", default_value = GeminiClient::DEFAULT_MODEL)]
    pub gemini_model: String,

    /// Timeout applied to every upstream HTTP request. No timeout when unset
    #[arg(long, env = "HTTP_TIMEOUT_SECS")]
    pub http_timeout_secs: Option<u64>,
}

impl ServerConfig {
    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout_secs.map(Duration::from_secs)
    }
}

/// Shared reqwest client with cookie support and the optional timeout
pub fn http_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().cookie_store(true);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}
