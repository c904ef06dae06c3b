//! Token authentication
//!
//! Clients authenticate with the opaque token issued at login, sent in the
//! `X-API-TOKEN` header. [`require_token`] resolves it to a user and injects
//! a [`CurrentUser`] into the request extensions; handlers receive it through
//! the `FromRequestParts` impl.

pub mod password;

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::features::FeatureState;

pub use password::{PasswordError, PasswordHasher};

/// Header carrying the session token.
pub const TOKEN_HEADER: &str = "x-api-token";

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// The authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub name: String,
}

#[axum::async_trait]
impl<S: Send + Sync> axum::extract::FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))
    }
}

/// Fresh session token.
pub fn generate_token() -> String {
    Uuid::new_v4().to_string()
}

/// Looks up the user holding `token`, if any.
pub async fn find_user_by_token(pool: &PgPool, token: &str) -> Result<Option<CurrentUser>, sqlx::Error> {
    sqlx::query_as::<_, CurrentUser>("SELECT id, username, name FROM users WHERE token = $1")
        .bind(token)
        .fetch_optional(pool)
        .await
}

/// Rejects requests without a valid `X-API-TOKEN`.
///
/// A database failure during lookup is reported as an internal error, not as
/// unauthorized.
pub async fn require_token(
    State(state): State<FeatureState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_owned);

    let Some(token) = token else {
        tracing::debug!("authentication failed: missing token header");
        return unauthorized();
    };

    match find_user_by_token(&state.db, &token).await {
        Ok(Some(user)) => {
            tracing::Span::current().record("user_id", user.id);
            request.extensions_mut().insert(user);
            next.run(request).await
        },
        Ok(None) => {
            tracing::debug!("authentication failed: unknown token");
            unauthorized()
        },
        Err(e) => AppError::Database(e).into_response(),
    }
}

fn unauthorized() -> Response {
    AppError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    #[test]
    fn test_generate_token_is_uuid() {
        let token = generate_token();
        assert!(Uuid::parse_str(&token).is_ok());
        assert_ne!(token, generate_token());
    }

    #[tokio::test]
    async fn test_extractor_without_identity_is_unauthorized() {
        let app = Router::new().route("/", get(|user: CurrentUser| async move { user.username }));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_extractor_reads_injected_identity() {
        let user = CurrentUser {
            id: 7,
            username: "khannedy".into(),
            name: "Eko".into(),
        };
        let app = Router::new()
            .route("/", get(|user: CurrentUser| async move { user.username }))
            .layer(axum::Extension(user));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
