//! # cinehubd — cinehub daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use cinehub_adapter_http_axum::state::AppState;
use cinehub_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteGenreRepository, SqliteMovieRepository,
};
use cinehub_app::services::genre_service::GenreService;
use cinehub_app::services::movie_service::MovieService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to open database")?;
    let pool = db.pool().clone();
    tracing::info!("database connected");

    // Repositories
    let movie_repo = SqliteMovieRepository::new(pool.clone());
    let genre_repo = SqliteGenreRepository::new(pool);

    // Services
    let movie_service = MovieService::new(movie_repo);
    let genre_service = GenreService::new(genre_repo);

    // HTTP
    let state = AppState::new(movie_service, genre_service);
    let app = cinehub_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(address = %bind_addr, "cinehubd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
