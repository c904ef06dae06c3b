//! Contact API routes
//!
//! - `POST /api/contacts` - Create a contact
//! - `GET /api/contacts` - Search with `name`, `email`, `phone`, `page`, `size`
//! - `GET /api/contacts/:contact_id` - Get one contact
//! - `PUT /api/contacts/:contact_id` - Partially update a contact
//! - `DELETE /api/contacts/:contact_id` - Delete a contact and its addresses

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::commands::{CreateContactCommand, UpdateContactCommand};
use super::queries::SearchContactsQuery;
use crate::api::response::{DataResponse, PagedResponse};
use crate::auth::CurrentUser;
use crate::error::AppError;
use crate::features::FeatureState;

pub fn contacts_routes() -> Router<FeatureState> {
    Router::new()
        .route("/contacts", get(search_contacts).post(create_contact))
        .route(
            "/contacts/:contact_id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn create_contact(
    State(state): State<FeatureState>,
    user: CurrentUser,
    payload: Result<Json<CreateContactCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(command) = payload?;
    let contact = super::commands::create::handle(state.db, user.id, command).await?;

    Ok(DataResponse::new(contact).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn get_contact(
    State(state): State<FeatureState>,
    user: CurrentUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(contact_id) = path?;
    let contact = super::queries::get::handle(state.db, user.id, contact_id).await?;

    Ok(DataResponse::new(contact).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn update_contact(
    State(state): State<FeatureState>,
    user: CurrentUser,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateContactCommand>, JsonRejection>,
) -> Result<Response, AppError> {
    let Path(contact_id) = path?;
    let Json(command) = payload?;
    let contact = super::commands::update::handle(state.db, user.id, contact_id, command).await?;

    Ok(DataResponse::new(contact).into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn delete_contact(
    State(state): State<FeatureState>,
    user: CurrentUser,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(contact_id) = path?;
    super::commands::delete::handle(state.db, user.id, contact_id).await?;

    Ok(DataResponse::ok().into_response())
}

#[tracing::instrument(skip_all, fields(user_id = user.id))]
async fn search_contacts(
    State(state): State<FeatureState>,
    user: CurrentUser,
    query: Result<Query<SearchContactsQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let result = super::queries::search::handle(state.db, user.id, query).await?;

    Ok(PagedResponse {
        data: result.items,
        paging: result.paging,
    }
    .into_response())
}
