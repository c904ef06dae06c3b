//! Delete contact command. Addresses go with it via `ON DELETE CASCADE`.

use sqlx::PgPool;

use crate::features::contacts::ContactError;

#[tracing::instrument(skip(pool))]
pub async fn handle(pool: PgPool, user_id: i64, contact_id: i64) -> Result<(), ContactError> {
    let deleted = sqlx::query_scalar::<_, i64>(
        "DELETE FROM contacts WHERE id = $1 AND user_id = $2 RETURNING id",
    )
    .bind(contact_id)
    .bind(user_id)
    .fetch_optional(&pool)
    .await?;

    if deleted.is_none() {
        return Err(ContactError::NotFound);
    }

    tracing::info!(contact_id, "Contact deleted");

    Ok(())
}
