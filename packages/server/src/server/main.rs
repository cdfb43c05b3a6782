// Main entry point for API server

use anyhow::{Context, Result};
use server_core::{server::build_app, server::static_files::load_dataset, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Travel Feed API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(provider = config.provider.name(), "Configuration loaded");

    let dataset = load_dataset(config.showcase_data_path.as_deref())
        .context("Failed to load showcase dataset")?;
    tracing::info!(
        instagram = dataset.instagram.len(),
        reddit = dataset.reddit.len(),
        "Showcase dataset loaded"
    );

    let app = build_app(&config, dataset);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
