//! Helpers shared by every feature slice

pub mod error_helpers;
pub mod ownership;
pub mod pagination;
pub mod validation;

pub use pagination::{PageRequest, Paging};
pub use validation::{ValidationErrors, ValidationIssue, Validator};
