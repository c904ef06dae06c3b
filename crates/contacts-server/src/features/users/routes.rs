//! User API routes
//!
//! - `POST /api/users` - Register
//! - `POST /api/users/login` - Log in and receive a token
//! - `GET /api/users/current` - Current user profile
//! - `PATCH /api/users/current` - Update name and/or password
//! - `DELETE /api/users/current` - Log out

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::commands::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand};
use crate::api::response::DataResponse;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::features::FeatureState;

/// Routes reachable without a token.
pub fn public_routes() -> Router<FeatureState> {
    Router::new()
        .route("/users", post(register_user))
        .route("/users/login", post(login_user))
}

/// Routes behind the token gate.
pub fn protected_routes() -> Router<FeatureState> {
    Router::new().route(
        "/users/current",
        get(get_current_user)
            .patch(update_current_user)
            .delete(logout_user),
    )
}

#[tracing::instrument(skip(state, payload))]
async fn register_user(
    State(state): State<FeatureState>,
    payload: Result<Json<RegisterUserCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = payload?;
    let user = super::commands::register::handle(state.db, &state.passwords, command).await?;

    Ok(DataResponse::new(user).with_status(StatusCode::CREATED))
}

#[tracing::instrument(skip(state, payload))]
async fn login_user(
    State(state): State<FeatureState>,
    payload: Result<Json<LoginUserCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = payload?;
    let user = super::commands::login::handle(state.db, &state.passwords, command).await?;

    Ok(DataResponse::new(user).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn get_current_user(user: CurrentUser) -> Response {
    DataResponse::new(super::queries::get_current::handle(user)).into_response()
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn update_current_user(
    State(state): State<FeatureState>,
    user: CurrentUser,
    payload: Result<Json<UpdateUserCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = payload?;
    let updated =
        super::commands::update::handle(state.db, &state.passwords, user.id, command).await?;

    Ok(DataResponse::new(updated).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn logout_user(
    State(state): State<FeatureState>,
    user: CurrentUser,
) -> Result<Response, AppError> {
    super::commands::logout::handle(state.db, user.id).await?;

    Ok(DataResponse::ok().into_response())
}
