//! Register user command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::PasswordHasher;
use crate::features::shared::{error_helpers, Validator};
use crate::features::users::{UserError, UserResponse, MAX_FIELD_LENGTH};

/// Missing fields deserialize as empty strings so they surface as
/// validation issues alongside any others.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct RegisterUserCommand {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
}

impl std::fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .finish()
    }
}

impl RegisterUserCommand {
    pub fn validate(&self) -> Result<(), UserError> {
        let mut v = Validator::new();
        v.required("username", &self.username, MAX_FIELD_LENGTH)
            .required("password", &self.password, MAX_FIELD_LENGTH)
            .required("name", &self.name, MAX_FIELD_LENGTH);
        Ok(v.finish()?)
    }
}

/// Creates a user with a hashed password.
///
/// The upfront existence check gives the common case a clean error; the
/// unique constraint still catches two concurrent registrations.
#[tracing::instrument(skip(pool, hasher, command), fields(username = %command.username))]
pub async fn handle(
    pool: PgPool,
    hasher: &PasswordHasher,
    command: RegisterUserCommand,
) -> Result<UserResponse, UserError> {
    command.validate()?;

    let taken = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
        .bind(&command.username)
        .fetch_one(&pool)
        .await?;
    if taken {
        return Err(UserError::UsernameTaken);
    }

    let password_hash = hasher.hash_async(command.password).await?;

    let user = sqlx::query_as::<_, UserResponse>(
        r#"
        INSERT INTO users (username, password, name)
        VALUES ($1, $2, $3)
        RETURNING username, name, NULL::VARCHAR AS token
        "#,
    )
    .bind(&command.username)
    .bind(&password_hash)
    .bind(&command.name)
    .fetch_one(&pool)
    .await
    .map_err(|e| error_helpers::map_unique_violation(e, UserError::UsernameTaken, UserError::Database))?;

    tracing::info!(username = %user.username, "User registered");

    Ok(user)
}
