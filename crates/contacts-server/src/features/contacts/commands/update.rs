//! Update contact command
//!
//! Fields left out of the request (or sent as `null`) keep their stored
//! values. The ownership check and the write are one statement.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::contacts::{
    ContactError, ContactResponse, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, MAX_PHONE_LENGTH,
};
use crate::features::shared::Validator;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateContactCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl UpdateContactCommand {
    pub fn validate(&self) -> Result<(), ContactError> {
        let mut v = Validator::new();
        v.optional("first_name", self.first_name.as_deref(), MAX_NAME_LENGTH)
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
    contact_id: i64,
    command: UpdateContactCommand,
) -> Result<ContactResponse, ContactError> {
    command.validate()?;

    let contact = sqlx::query_as::<_, ContactResponse>(
        r#"
        UPDATE contacts
        SET first_name = COALESCE($3, first_name),
            last_name = COALESCE($4, last_name),
            email = COALESCE($5, email),
            phone = COALESCE($6, phone),
            updated_at = NOW()
        WHERE id = $1 AND user_id = $2
        RETURNING id, first_name, last_name, email, phone
        "#,
    )
    .bind(contact_id)
    .bind(user_id)
    .bind(&command.first_name)
    .bind(&command.last_name)
    .bind(&command.email)
    .bind(&command.phone)
    .fetch_optional(&pool)
    .await?
    .ok_or(ContactError::NotFound)?;

    tracing::info!(contact_id, "Contact updated");

    Ok(contact)
}
