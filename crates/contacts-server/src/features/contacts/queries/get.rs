//! Get contact query

use sqlx::PgPool;

use crate::features::contacts::{ContactError, ContactResponse};

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    user_id: i64,
    contact_id: i64,
) -> Result<ContactResponse, ContactError> {
    sqlx::query_as::<_, ContactResponse>(
        r#"
        SELECT id, first_name, last_name, email, phone
        FROM contacts
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(contact_id)
    .bind(user_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(ContactError::NotFound)
}
