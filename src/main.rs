use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use charmed_rack::{config::Config, dictionary::Dictionary, routes, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charmed_rack=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting charmed-rack server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match &config.game.dictionary_path {
        Some(path) => match Dictionary::load(path).await {
            Ok(dict) => dict,
            Err(e) => {
                tracing::warn!("Failed to load dictionary: {:#}. Using the bundled word list.", e);
                Dictionary::builtin()
            }
        },
        None => Dictionary::builtin(),
    };
    tracing::info!("Reference word list has {} words", dictionary.len());

    let state = Arc::new(AppState {
        config: config.clone(),
        dictionary,
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
