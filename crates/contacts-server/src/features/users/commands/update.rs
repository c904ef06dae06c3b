//! Update current user command
//!
//! Partial update: absent fields keep their stored values. A new password is
//! re-hashed before it is written.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::PasswordHasher;
use crate::features::shared::Validator;
use crate::features::users::{UserError, UserResponse, MAX_FIELD_LENGTH};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl std::fmt::Debug for UpdateUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserCommand")
            .field("name", &self.name)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl UpdateUserCommand {
    pub fn validate(&self) -> Result<(), UserError> {
        let mut v = Validator::new();
        v.optional("name", self.name.as_deref(), MAX_FIELD_LENGTH)
            .optional("password", self.password.as_deref(), MAX_FIELD_LENGTH);
        Ok(v.finish()?)
    }
}

#[tracing::instrument(skip(pool, hasher, command))]
pub async fn handle(
    pool: PgPool,
    hasher: &PasswordHasher,
    user_id: i64,
    command: UpdateUserCommand,
) -> Result<UserResponse, UserError> {
    command.validate()?;

    let password_hash = match command.password {
        Some(password) => Some(hasher.hash_async(password).await?),
        None => None,
    };

    let user = sqlx::query_as::<_, UserResponse>(
        r#"
        UPDATE users
        SET name = COALESCE($2, name),
            password = COALESCE($3, password),
            updated_at = NOW()
        WHERE id = $1
        RETURNING username, name, NULL::VARCHAR AS token
        "#,
    )
    .bind(user_id)
    .bind(command.name)
    .bind(password_hash)
    .fetch_optional(&pool)
    .await?
    .ok_or(UserError::Gone)?;

    tracing::info!(user_id, "User updated");

    Ok(user)
}
