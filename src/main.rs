// mt2native - Literal machine translation refined into native-sounding text

use anyhow::Result;
use clap::Parser;
use mt2native::cli::Args;
use mt2native::config::AppConfig;
use mt2native::pipeline::TranslationPipeline;
use mt2native::providers::{GoogleTranslateClient, OpenAiClient};
use mt2native::server::create_router;
use mt2native::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load_from(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting mt2native v{}", env!("CARGO_PKG_VERSION"));

    // Phase 3: Construct provider clients (fails fast on missing credentials)
    let translator = GoogleTranslateClient::new(&config.google)?;
    let refiner = OpenAiClient::new(&config.openai)?;
    info!(
        "Providers configured: Google Translation (project {}), OpenAI ({})",
        config.google.project_id, config.openai.model
    );

    // Phase 3.5: Handle --check flag
    if args.check {
        println!("Configuration OK");
        return Ok(());
    }

    // Phase 4: Assemble the translation pipeline
    let pipeline = TranslationPipeline::new(translator, refiner);

    // Phase 5: Build and start HTTP server
    let app = create_router(config.clone(), pipeline)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
