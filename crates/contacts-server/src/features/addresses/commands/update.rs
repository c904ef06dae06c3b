//! Update address command

use sqlx::PgPool;

use super::AddressPayload;
use crate::features::addresses::{ensure_contact, AddressError, AddressResponse};

#[derive(Debug, Clone)]
pub struct UpdateAddressCommand {
    pub user_id: i64,
    pub contact_id: i64,
    pub address_id: i64,
    pub payload: AddressPayload,
}

#[tracing::instrument(
    skip(pool, command),
    fields(contact_id = command.contact_id, address_id = command.address_id)
)]
pub async fn handle(
    pool: PgPool,
    command: UpdateAddressCommand,
) -> Result<AddressResponse, AddressError> {
    command.payload.validate()?;
    ensure_contact(&pool, command.user_id, command.contact_id).await?;

    let payload = &command.payload;
    let address = sqlx::query_as::<_, AddressResponse>(
        r#"
        UPDATE addresses
        SET street = COALESCE($3, street),
            city = COALESCE($4, city),
            province = COALESCE($5, province),
            country = $6,
            postal_code = COALESCE($7, postal_code),
            updated_at = NOW()
        WHERE id = $1 AND contact_id = $2
        RETURNING id, street, city, province, country, postal_code
        "#,
    )
    .bind(command.address_id)
    .bind(command.contact_id)
    .bind(&payload.street)
    .bind(&payload.city)
    .bind(&payload.province)
    .bind(&payload.country)
    .bind(&payload.postal_code)
    .fetch_optional(&pool)
    .await?
    .ok_or(AddressError::NotFound)?;

    tracing::info!("Address updated");

    Ok(address)
}
