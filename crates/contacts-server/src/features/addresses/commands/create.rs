//! Create address command

use sqlx::PgPool;

use super::AddressPayload;
use crate::features::addresses::{ensure_contact, AddressError, AddressResponse};
use crate::features::shared::error_helpers;

#[derive(Debug, Clone)]
pub struct CreateAddressCommand {
    pub user_id: i64,
    pub contact_id: i64,
    pub payload: AddressPayload,
}

#[tracing::instrument(skip(pool, command), fields(contact_id = command.contact_id))]
pub async fn handle(
    pool: PgPool,
    command: CreateAddressCommand,
) -> Result<AddressResponse, AddressError> {
    command.payload.validate()?;
    ensure_contact(&pool, command.user_id, command.contact_id).await?;

    let payload = &command.payload;
    let address = sqlx::query_as::<_, AddressResponse>(
        r#"
        INSERT INTO addresses (contact_id, street, city, province, country, postal_code)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, street, city, province, country, postal_code
        "#,
    )
    .bind(command.contact_id)
    .bind(&payload.street)
    .bind(&payload.city)
    .bind(&payload.province)
    .bind(&payload.country)
    .bind(&payload.postal_code)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        error_helpers::map_foreign_key_violation(e, AddressError::ContactNotFound, AddressError::Database)
    })?;

    tracing::info!(address_id = address.id, "Address created");

    Ok(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_contact, insert_user};

    fn command(user_id: i64, contact_id: i64) -> CreateAddressCommand {
        CreateAddressCommand {
            user_id,
            contact_id,
            payload: AddressPayload {
                street: Some("Jalan Belum Ada".to_string()),
                city: Some("Jakarta".to_string()),
                province: None,
                country: "Indonesia".to_string(),
                postal_code: Some("234234".to_string()),
            },
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_address(pool: PgPool) -> sqlx::Result<()> {
        let user = insert_user(&pool, "khannedy").await;
        let contact_id = insert_contact(&pool, user.id, "Eko").await;

        let address = handle(pool.clone(), command(user.id, contact_id)).await.unwrap();
        assert_eq!(address.country, "Indonesia");
        assert_eq!(address.city.as_deref(), Some("Jakarta"));
        assert!(address.province.is_none());
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_create_under_foreign_contact(pool: PgPool) -> sqlx::Result<()> {
        let owner = insert_user(&pool, "owner").await;
        let other = insert_user(&pool, "other").await;
        let contact_id = insert_contact(&pool, owner.id, "Eko").await;

        let result = handle(pool.clone(), command(other.id, contact_id)).await;
        assert!(matches!(result, Err(AddressError::ContactNotFound)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 0);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_validation_runs_before_lookup(pool: PgPool) -> sqlx::Result<()> {
        let mut invalid = command(1, 999);
        invalid.payload.country = String::new();

        let result = handle(pool, invalid).await;
        assert!(matches!(result, Err(AddressError::Validation(_))));
        Ok(())
    }
}
