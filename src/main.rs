use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scribble::{
    app,
    config::{GameConfig, ServerConfig},
    game::{spawn_session, GameSession},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scribble=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Scribble...");

    let game_config = GameConfig::from_env().inspect_err(|e| {
        tracing::error!("Invalid game configuration: {}", e);
    })?;
    let server_config = ServerConfig::from_env().inspect_err(|e| {
        tracing::error!("Invalid server configuration: {}", e);
    })?;

    tracing::info!(
        "Rounds last {}s, {} words in the vocabulary",
        game_config.round_seconds,
        game_config.words.len()
    );
    if game_config.strict_drawing {
        tracing::info!("Strict drawing enabled: only the drawer's strokes are relayed");
    }
    if game_config.no_repeat_drawer {
        tracing::info!("No-repeat drawer enabled: the previous drawer is skipped when possible");
    }

    let session = spawn_session(GameSession::new(game_config)?);
    let app = app::router(session, &server_config.static_dir);

    let addr = server_config.addr();
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Serving static files from {}", server_config.static_dir.display());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
