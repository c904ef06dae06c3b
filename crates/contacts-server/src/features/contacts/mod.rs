//! Contacts owned by the authenticated user
//!
//! Every read and write is scoped by `user_id`; someone else's contact is
//! reported exactly like a missing one.

pub mod commands;
pub mod error;
pub mod queries;
pub mod routes;

use serde::{Deserialize, Serialize};

pub use commands::{CreateContactCommand, UpdateContactCommand};
pub use error::ContactError;
pub use queries::SearchContactsQuery;
pub use routes::contacts_routes;

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 100;
pub const MAX_PHONE_LENGTH: usize = 20;

/// Contact as returned by the API. Absent optionals serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
