//! Ownership lookups shared by contact and address operations
//!
//! A contact owned by someone else is indistinguishable from one that does
//! not exist; callers report both as not found.

use sqlx::PgPool;

/// Whether `contact_id` exists and belongs to `user_id`.
#[tracing::instrument(skip(pool))]
pub async fn contact_belongs_to(
    pool: &PgPool,
    contact_id: i64,
    user_id: i64,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM contacts WHERE id = $1 AND user_id = $2)",
    )
    .bind(contact_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}
