//! Feature slices of the contacts API
//!
//! Each slice keeps its write operations in `commands/`, its reads in
//! `queries/`, and its HTTP wiring in `routes.rs`:
//!
//! - **users**: registration, login/logout, profile
//! - **contacts**: contact CRUD and search
//! - **addresses**: addresses nested under a contact
//! - **shared**: validation, pagination, ownership and database helpers

pub mod addresses;
pub mod contacts;
pub mod shared;
pub mod users;

use axum::{middleware, Router};

use crate::auth::{self, PasswordHasher};

/// State handed to every handler.
#[derive(Clone)]
pub struct FeatureState {
    pub db: sqlx::PgPool,
    pub passwords: PasswordHasher,
}

/// All `/api` routes. Everything except registration and login sits behind
/// the token gate.
///
/// The gate is a route layer, so unknown paths fall through to the 404
/// fallback instead of answering 401.
pub fn router(state: FeatureState) -> Router {
    let protected = Router::new()
        .merge(users::protected_routes())
        .merge(contacts::contacts_routes())
        .merge(addresses::addresses_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));

    Router::new()
        .merge(users::public_routes())
        .merge(protected)
        .with_state(state)
}
