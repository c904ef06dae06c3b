//! Login command
//!
//! A successful login issues a fresh token and overwrites any previous one,
//! so only the most recent session stays valid.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::{generate_token, PasswordHasher};
use crate::features::shared::Validator;
use crate::features::users::{UserError, UserResponse, MAX_FIELD_LENGTH};

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct LoginUserCommand {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for LoginUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginUserCommand")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl LoginUserCommand {
    pub fn validate(&self) -> Result<(), UserError> {
        let mut v = Validator::new();
        v.required("username", &self.username, MAX_FIELD_LENGTH)
            .required("password", &self.password, MAX_FIELD_LENGTH);
        Ok(v.finish()?)
    }
}

#[derive(sqlx::FromRow)]
struct Credentials {
    id: i64,
    password: String,
}

#[tracing::instrument(skip(pool, hasher, command), fields(username = %command.username))]
pub async fn handle(
    pool: PgPool,
    hasher: &PasswordHasher,
    command: LoginUserCommand,
) -> Result<UserResponse, UserError> {
    command.validate()?;

    let credentials =
        sqlx::query_as::<_, Credentials>("SELECT id, password FROM users WHERE username = $1")
            .bind(&command.username)
            .fetch_optional(&pool)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

    let matches = hasher
        .verify_async(command.password, credentials.password)
        .await?;
    if !matches {
        tracing::debug!("Login rejected: wrong password");
        return Err(UserError::InvalidCredentials);
    }

    let user = sqlx::query_as::<_, UserResponse>(
        r#"
        UPDATE users
        SET token = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING username, name, token
        "#,
    )
    .bind(credentials.id)
    .bind(generate_token())
    .fetch_optional(&pool)
    .await?
    .ok_or(UserError::InvalidCredentials)?;

    tracing::info!(user_id = credentials.id, "User logged in");

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_user, test_hasher};

    fn command(username: &str, password: &str) -> LoginUserCommand {
        LoginUserCommand {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert!(command("khannedy", "rahasia").validate().is_ok());
        assert!(command("", "rahasia").validate().is_err());
        assert!(command("khannedy", &"p".repeat(101)).validate().is_err());
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_login_issues_token(pool: PgPool) -> sqlx::Result<()> {
        insert_user(&pool, "khannedy").await;

        let user = handle(pool.clone(), &test_hasher(), command("khannedy", "rahasia"))
            .await
            .unwrap();
        let token = user.token.unwrap();
        assert!(uuid::Uuid::parse_str(&token).is_ok());

        let stored: Option<String> = sqlx::query_scalar("SELECT token FROM users WHERE username = $1")
            .bind("khannedy")
            .fetch_one(&pool)
            .await?;
        assert_eq!(stored, Some(token));
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_second_login_replaces_token(pool: PgPool) -> sqlx::Result<()> {
        insert_user(&pool, "khannedy").await;
        let hasher = test_hasher();

        let first = handle(pool.clone(), &hasher, command("khannedy", "rahasia")).await.unwrap();
        let second = handle(pool.clone(), &hasher, command("khannedy", "rahasia")).await.unwrap();
        assert_ne!(first.token, second.token);

        let old = crate::auth::find_user_by_token(&pool, first.token.as_deref().unwrap()).await?;
        assert!(old.is_none());
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_wrong_password_and_unknown_user_look_alike(pool: PgPool) -> sqlx::Result<()> {
        insert_user(&pool, "khannedy").await;
        let hasher = test_hasher();

        let wrong = handle(pool.clone(), &hasher, command("khannedy", "salah")).await;
        let unknown = handle(pool.clone(), &hasher, command("nobody", "rahasia")).await;

        assert!(matches!(wrong, Err(UserError::InvalidCredentials)));
        assert!(matches!(unknown, Err(UserError::InvalidCredentials)));
        Ok(())
    }
}
