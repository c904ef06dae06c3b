//! Contacts Server Library
//!
//! Token-authenticated REST API for managing a personal address book.
//!
//! # Overview
//!
//! - **Users** register, log in to obtain an `X-API-TOKEN`, and log out
//! - **Contacts** belong to exactly one user and can be searched and paged
//! - **Addresses** belong to a contact and inherit its ownership
//!
//! Another user's contact is always reported as not found, never forbidden.
//!
//! # Architecture
//!
//! Feature slices under [`features`] split writes (`commands/`) from reads
//! (`queries/`). Each operation validates its input, runs owner-scoped SQL
//! through SQLx, and returns a feature error that converts into
//! [`error::AppError`] for the HTTP response.
//!
//! # Example
//!
//! ```no_run
//! use contacts_server::{api, auth::PasswordHasher, config::Config, features::FeatureState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let db = sqlx::PgPool::connect(&config.database.url).await?;
//!     let state = FeatureState { db, passwords: PasswordHasher::default() };
//!     let app = api::create_router(state, &config);
//!     let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
//!     api::serve(listener, app, config.shutdown_timeout()).await
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;

#[cfg(test)]
mod test_support;

pub use error::{AppError, AppResult};

/// Embedded SQL migrations, applied at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");
