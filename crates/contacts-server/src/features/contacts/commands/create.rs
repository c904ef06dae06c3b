//! Create contact command

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::contacts::{
    ContactError, ContactResponse, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH,
};
use crate::features::shared::Validator;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateContactCommand {
    #[serde(default)]
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CreateContactCommand {
    pub fn validate(&self) -> Result<(), ContactError> {
        let mut v = Validator::new();
        v.required("first_name", &self.first_name, MAX_NAME_LENGTH)
            .optional("last_name", self.last_name.as_deref(), MAX_NAME_LENGTH)
            .email("email", self.email.as_deref(), MAX_EMAIL_LENGTH)
            .optional("phone", self.phone.as_deref(), MAX_PHONE_LENGTH);
        Ok(v.finish()?)
    }
}

#[tracing::instrument(skip(pool, command))]
pub async fn handle(
    pool: PgPool,
    user_id: i64,
    command: CreateContactCommand,
) -> Result<ContactResponse, ContactError> {
    command.validate()?;

    let contact = sqlx::query_as::<_, ContactResponse>(
        r#"
        INSERT INTO contacts (user_id, first_name, last_name, email, phone)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, first_name, last_name, email, phone
        "#,
    )
    .bind(user_id)
    .bind(&command.first_name)
    .bind(&command.last_name)
    .bind(&command.email)
    .bind(&command.phone)
    .fetch_one(&pool)
    .await?;

    tracing::info!(contact_id = contact.id, "Contact created");

    Ok(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::insert_user;

    fn lulu() -> CreateContactCommand {
        CreateContactCommand {
            first_name: "Lulu".to_string(),
            last_name: None,
            email: None,
            phone: Some("0899999999".to_string()),
        }
    }

    #[test]
    fn test_validation_success() {
        assert!(lulu().validate().is_ok());
    }

    #[test]
    fn test_validation_failures() {
        let command = CreateContactCommand {
            first_name: String::new(),
            last_name: Some("x".repeat(101)),
            email: Some("salah".to_string()),
            phone: Some("0".repeat(21)),
        };
        let Err(ContactError::Validation(errors)) = command.validate() else {
            panic!("expected validation error");
        };
        for field in ["first_name", "last_name", "email", "phone"] {
            assert!(errors.has_field(field), "missing issue for {field}");
        }
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_creates_contact(pool: PgPool) -> sqlx::Result<()> {
        let user = insert_user(&pool, "khannedy").await;

        let contact = handle(pool.clone(), user.id, lulu()).await.unwrap();
        assert_eq!(contact.first_name, "Lulu");
        assert_eq!(contact.phone.as_deref(), Some("0899999999"));
        assert!(contact.last_name.is_none());
        assert!(contact.email.is_none());

        let owner: i64 = sqlx::query_scalar("SELECT user_id FROM contacts WHERE id = $1")
            .bind(contact.id)
            .fetch_one(&pool)
            .await?;
        assert_eq!(owner, user.id);
        Ok(())
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn test_handle_invalid_persists_nothing(pool: PgPool) -> sqlx::Result<()> {
        let user = insert_user(&pool, "khannedy").await;

        let result = handle(pool.clone(), user.id, CreateContactCommand::default()).await;
        assert!(matches!(result, Err(ContactError::Validation(_))));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&pool)
            .await?;
        assert_eq!(count, 0);
        Ok(())
    }
}
