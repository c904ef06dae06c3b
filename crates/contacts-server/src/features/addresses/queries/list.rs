//! List addresses of a contact, ordered by id. Not paginated.

use sqlx::PgPool;

use crate::features::addresses::{ensure_contact, AddressError, AddressResponse};

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    user_id: i64,
    contact_id: i64,
) -> Result<Vec<AddressResponse>, AddressError> {
    ensure_contact(&pool, user_id, contact_id).await?;

    let addresses = sqlx::query_as::<_, AddressResponse>(
        r#"
        SELECT id, street, city, province, country, postal_code
        FROM addresses
        WHERE contact_id = $1
        ORDER BY id
        "#,
    )
    .bind(contact_id)
    .fetch_all(&pool)
    .await?;

    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_address, insert_contact, insert_user};

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_list_only_this_contact(pool: PgPool) -> sqlx::Result<()> {
        let user = insert_user(&pool, "khannedy").await;
        let contact_id = insert_contact(&pool, user.id, "Eko").await;
        let sibling = insert_contact(&pool, user.id, "Budi").await;
        let first = insert_address(&pool, contact_id, "Indonesia").await;
        let second = insert_address(&pool, contact_id, "Malaysia").await;
        insert_address(&pool, sibling, "Singapore").await;

        let addresses = handle(pool.clone(), user.id, contact_id).await.unwrap();
        let ids: Vec<i64> = addresses.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![first, second]);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_list_foreign_contact(pool: PgPool) -> sqlx::Result<()> {
        let owner = insert_user(&pool, "owner").await;
        let other = insert_user(&pool, "other").await;
        let contact_id = insert_contact(&pool, owner.id, "Eko").await;

        let result = handle(pool.clone(), other.id, contact_id).await;
        assert!(matches!(result, Err(AddressError::ContactNotFound)));
        Ok(())
    }
}
