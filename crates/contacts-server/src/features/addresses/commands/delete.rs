//! Delete address command

use sqlx::PgPool;

use crate::features::addresses::{ensure_contact, AddressError};

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    user_id: i64,
    contact_id: i64,
    address_id: i64,
) -> Result<(), AddressError> {
    ensure_contact(&pool, user_id, contact_id).await?;

    let deleted = sqlx::query_scalar::<_, i64>(
        "DELETE FROM addresses WHERE id = $1 AND contact_id = $2 RETURNING id",
    )
    .bind(address_id)
    .bind(contact_id)
    .fetch_optional(&pool)
    .await?;

    if deleted.is_none() {
        return Err(AddressError::NotFound);
    }

    tracing::info!(address_id, "Address deleted");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_address, insert_contact, insert_user};

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_delete_address(pool: PgPool) -> sqlx::Result<()> {
        let user = insert_user(&pool, "khannedy").await;
        let contact_id = insert_contact(&pool, user.id, "Eko").await;
        let address_id = insert_address(&pool, contact_id, "Indonesia").await;

        handle(pool.clone(), user.id, contact_id, address_id).await.unwrap();

        let again = handle(pool.clone(), user.id, contact_id, address_id).await;
        assert!(matches!(again, Err(AddressError::NotFound)));
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_delete_through_foreign_contact(pool: PgPool) -> sqlx::Result<()> {
        let owner = insert_user(&pool, "owner").await;
        let other = insert_user(&pool, "other").await;
        let contact_id = insert_contact(&pool, owner.id, "Eko").await;
        let address_id = insert_address(&pool, contact_id, "Indonesia").await;

        let result = handle(pool.clone(), other.id, contact_id, address_id).await;
        assert!(matches!(result, Err(AddressError::ContactNotFound)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 1);
        Ok(())
    }
}
