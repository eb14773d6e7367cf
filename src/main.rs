use anyhow::Context;
use tracing_subscriber::EnvFilter;

use membership_api::{app, config, database::DatabaseManager, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!("Starting Membership API in {:?} mode", config.environment);

    let db = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;
    if config.database.run_migrations {
        db.migrate().await.context("failed to run migrations")?;
    }

    let router = app(AppState::new(db.clone()), config);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Membership API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
