pub mod create;
pub mod delete;
pub mod update;

use serde::{Deserialize, Serialize};

pub use create::CreateAddressCommand;
pub use update::UpdateAddressCommand;

/// Request body shared by create and update.
///
/// A missing `country` deserializes as empty and fails validation. On update,
/// absent optional fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}
