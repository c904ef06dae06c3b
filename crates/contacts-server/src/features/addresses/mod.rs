//! Addresses nested under a contact
//!
//! Access goes through the parent contact: if the caller does not own the
//! contact, every address operation reports the contact as not found.

pub mod commands;
pub mod error;
pub mod queries;
pub mod routes;

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

pub use commands::{AddressPayload, CreateAddressCommand, UpdateAddressCommand};
pub use error::AddressError;
pub use routes::addresses_routes;

use crate::features::shared::{ownership, Validator};

pub const MAX_STREET_LENGTH: usize = 255;
pub const MAX_REGION_LENGTH: usize = 100;
pub const MAX_COUNTRY_LENGTH: usize = 100;
pub const MAX_POSTAL_CODE_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AddressResponse {
    pub id: i64,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
}

impl AddressPayload {
    pub fn validate(&self) -> Result<(), AddressError> {
        let mut v = Validator::new();
        v.optional("street", self.street.as_deref(), MAX_STREET_LENGTH)
            .optional("city", self.city.as_deref(), MAX_REGION_LENGTH)
            .optional("province", self.province.as_deref(), MAX_REGION_LENGTH)
            .required("country", &self.country, MAX_COUNTRY_LENGTH)
            .optional("postal_code", self.postal_code.as_deref(), MAX_POSTAL_CODE_LENGTH);
        Ok(v.finish()?)
    }
}

/// Fails with [`AddressError::ContactNotFound`] unless the caller owns the contact.
pub(crate) async fn ensure_contact(
    pool: &PgPool,
    user_id: i64,
    contact_id: i64,
) -> Result<(), AddressError> {
    if ownership::contact_belongs_to(pool, contact_id, user_id).await? {
        Ok(())
    } else {
        Err(AddressError::ContactNotFound)
    }
}
