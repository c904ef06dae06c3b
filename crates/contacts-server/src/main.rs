//! Contacts Server - Main entry point

use anyhow::{Context, Result};
use contacts_common::logging::{init_logging, LogConfig};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use contacts_server::{api, auth::PasswordHasher, config::Config, features::FeatureState, MIGRATOR};

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder()
        .log_file_prefix("contacts-server")
        .filter_directives("contacts_server=debug,tower_http=debug,sqlx=warn")
        .build()
        .merge_env()?;

    let _log_guard = init_logging(&log_config)?;

    info!("Starting Contacts Server");

    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    let db = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(config.database.connect_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await
        .context("Failed to connect to the database")?;

    info!("Database connection pool established");

    MIGRATOR
        .run(&db)
        .await
        .context("Failed to run migrations")?;

    info!("Database migrations completed");

    let state = FeatureState {
        db,
        passwords: PasswordHasher::default(),
    };
    let app = api::create_router(state, &config);

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    api::serve(listener, app, config.shutdown_timeout()).await?;

    info!("Server shut down gracefully");

    Ok(())
}
