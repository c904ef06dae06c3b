//! Address API routes
//!
//! - `POST /api/contacts/:contact_id/addresses` - Create an address
//! - `GET /api/contacts/:contact_id/addresses` - List addresses (trailing slash accepted)
//! - `GET /api/contacts/:contact_id/addresses/:address_id` - Get one address
//! - `PUT /api/contacts/:contact_id/addresses/:address_id` - Update an address
//! - `DELETE /api/contacts/:contact_id/addresses/:address_id` - Delete an address

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::commands::{AddressPayload, CreateAddressCommand, UpdateAddressCommand};
use crate::api::response::DataResponse;
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn addresses_routes() -> Router<FeatureState> {
    Router::new()
        .route(
            "/contacts/:contact_id/addresses",
            get(list_addresses).post(create_address),
        )
        .route("/contacts/:contact_id/addresses/", get(list_addresses))
        .route(
            "/contacts/:contact_id/addresses/:address_id",
            get(get_address).put(update_address).delete(delete_address),
        )
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn create_address(
    State(state): State<FeatureState>,
    user: CurrentUser,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AddressPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(contact_id) = path?;
    let Json(payload) = payload?;
    let command = CreateAddressCommand {
        user_id: user.id,
        contact_id,
        payload,
    };
    let address = super::commands::create::handle(state.db, command).await?;

    Ok(DataResponse::new(address).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn get_address(
    State(state): State<FeatureState>,
    user: CurrentUser,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Response, AppError> {
    let Path((contact_id, address_id)) = path?;
    let address = super::queries::get::handle(state.db, user.id, contact_id, address_id).await?;

    Ok(DataResponse::new(address).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn update_address(
    State(state): State<FeatureState>,
    user: CurrentUser,
    path: Result<Path<(i64, i64)>, PathRejection>,
    payload: Result<Json<AddressPayload>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path((contact_id, address_id)) = path?;
    let Json(payload) = payload?;
    let command = UpdateAddressCommand {
        user_id: user.id,
        contact_id,
        address_id,
        payload,
    };
    let address = super::commands::update::handle(state.db, command).await?;

    Ok(DataResponse::new(address).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn delete_address(
    State(state): State<FeatureState>,
    user: CurrentUser,
    path: Result<Path<(i64, i64)>, PathRejection>,
) -> Result<Response, AppError> {
    let Path((contact_id, address_id)) = path?;
    super::commands::delete::handle(state.db, user.id, contact_id, address_id).await?;

    Ok(DataResponse::ok().into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn list_addresses(
    State(state): State<FeatureState>,
    user: CurrentUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(contact_id) = path?;
    let addresses = super::queries::list::handle(state.db, user.id, contact_id).await?;

    Ok(DataResponse::new(addresses).into_response())
}
