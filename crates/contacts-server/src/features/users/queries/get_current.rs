//! Current user query
//!
//! The authentication gate has already loaded the caller, so this reads
//! nothing from the database.

use crate::auth::CurrentUser;
use crate::features::users::UserResponse;

pub fn handle(user: CurrentUser) -> UserResponse {
    UserResponse::from(user)
}
