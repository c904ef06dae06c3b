//! User registration, login and profile management

pub mod commands;
pub mod error;
pub mod queries;
pub mod routes;

use serde::{Deserialize, Serialize};

pub use commands::{LoginUserCommand, RegisterUserCommand, UpdateUserCommand};
pub use error::UserError;
pub use routes::{protected_routes, public_routes};

/// Maximum length of username, password and display name.
pub const MAX_FIELD_LENGTH: usize = 100;

/// Public view of a user. `token` is only present in the login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<crate::auth::CurrentUser> for UserResponse {
    fn from(user: crate::auth::CurrentUser) -> Self {
        Self {
            username: user.username,
            name: user.name,
            token: None,
        }
    }
}
