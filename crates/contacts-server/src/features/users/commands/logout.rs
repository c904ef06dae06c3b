//! Logout command: forgets the user's token.

use sqlx::PgPool;

use crate::features::users::UserError;

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, user_id: i64) -> Result<(), UserError> {
    let result = sqlx::query("UPDATE users SET token = NULL, updated_at = NOW() WHERE id = $1")
        .bind(user_id)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(UserError::Gone);
    }

    tracing::info!(user_id, "User logged out");

    Ok(())
}
