use anyhow::Context;
use clap::Parser;

use video_insights::{
    config::{http_client, ServerConfig},
    gemini::{GeminiClient, NOTES_PROMPT},
    tracing::init_tracing_subscriber,
    web::notes_router,
    yt::innertube::InnerTubeTranscripts,
    VideoAnalyzerBuilder,
};

#[derive(Parser)]
#[command(
    name = "transcript-notes",
    about = "Turns a YouTube video's transcript into detailed notes"
)]
struct Cli {
    #[command(flatten)]
    server: ServerConfig,
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
    init_tracing_subscriber("transcript-notes")?;

    let client = http_client(cli.server.http_timeout()).context("Failed to build http client")?;

    // single unrestricted transcript attempt
    let analyzer = VideoAnalyzerBuilder::new()
        .transcript_source(InnerTubeTranscripts::new(client.clone()))
        .summarizer(
            GeminiClient::new(client, &cli.server.google_api_key)
                .with_model(&cli.server.gemini_model),
        )
        .prompt(NOTES_PROMPT)
        .build();

    let listener = tokio::net::TcpListener::bind(cli.server.listen)
        .await
        .with_context(|| format!("Failed to bind {}", cli.server.listen))?;
    tracing::info!(addr = %cli.server.listen, "Serving detailed notes page");

    axum::serve(listener, notes_router(analyzer))
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
