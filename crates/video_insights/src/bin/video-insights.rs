use anyhow::Context;
use clap::Parser;

use video_insights::{
    config::{http_client, ServerConfig},
    gemini::{GeminiClient, ANALYSIS_PROMPT},
    tracing::init_tracing_subscriber,
    web::analysis_router,
    yt::{data_api::YouTubeDataClient, innertube::InnerTubeTranscripts},
    VideoAnalyzerBuilder,
};

#[derive(Parser)]
#[command(
    name = "video-insights",
    about = "Summary, keywords, statistics and comment sentiment for a YouTube video"
)]
struct Cli {
    #[command(flatten)]
    server: ServerConfig,

    /// YouTube Data API v3 key. Checked lazily on first use
    #[arg(long, env = "YOUTUBE_API_KEY", default_value = "", hide_env_values = true)]
    youtube_api_key: String,

    /// Transcript languages tried before accepting any language
    #[arg(long, env = "TRANSCRIPT_LANGUAGES", value_delimiter = ',', default_value = "en")]
    languages: Vec<String>,

    /// Top-level comments fetched for sentiment analysis (single page, at most 100)
    #[arg(long, default_value = "100")]
    max_comments: usize,

    /// Keywords extracted from the transcript
    #[arg(long, default_value = "10")]
    max_keywords: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber("video-insights")?;

    let client = http_client(cli.server.http_timeout()).context("Failed to build http client")?;

    let analyzer = VideoAnalyzerBuilder::new()
        .transcript_source(InnerTubeTranscripts::new(client.clone()))
        .summarizer(
            GeminiClient::new(client.clone(), &cli.server.google_api_key)
                .with_model(&cli.server.gemini_model),
        )
        .platform(YouTubeDataClient::new(client, &cli.youtube_api_key))
        .preferred_languages(cli.languages)
        .prompt(ANALYSIS_PROMPT)
        .max_comments(cli.max_comments)
        .max_keywords(cli.max_keywords)
        .build();

    let listener = tokio::net::TcpListener::bind(cli.server.listen)
        .await
        .with_context(|| format!("Failed to bind {}", cli.server.listen))?;
    tracing::info!(addr = %cli.server.listen, "Serving video analysis page");

    axum::serve(listener, analysis_router(analyzer))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
