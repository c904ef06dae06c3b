//! Get address query

use sqlx::PgPool;

use crate::features::addresses::{ensure_contact, AddressError, AddressResponse};

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    user_id: i64,
    contact_id: i64,
    address_id: i64,
) -> Result<AddressResponse, AddressError> {
    ensure_contact(&pool, user_id, contact_id).await?;

    sqlx::query_as::<_, AddressResponse>(
        r#"
        SELECT id, street, city, province, country, postal_code
        FROM addresses
        WHERE id = $1 AND contact_id = $2
        "#,
    )
    .bind(address_id)
    .bind(contact_id)
    .fetch_optional(&pool)
    .await?
    .ok_or(AddressError::NotFound)
}
