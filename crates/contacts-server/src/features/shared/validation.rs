//! Shared validation utilities
//!
//! Request payloads are checked field by field before any database access.
//! Every violation is collected so a client sees all problems with a request
//! in a single response.
//!
//! # Examples
//!
//! ```rust,ignore
//! use contacts_server::features::shared::validation::Validator;
//!
//! let mut v = Validator::new();
//! v.required("first_name", &command.first_name, 100)
//!     .optional("last_name", command.last_name.as_deref(), 100)
//!     .email("email", command.email.as_deref(), 100);
//! v.finish()?;
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .unwrap_or_else(|e| panic!("email pattern must compile: {e}"))
});

/// A single rule violation on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

/// All rule violations found on one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}", self.to_json())]
pub struct ValidationErrors {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    /// Shorthand for a failure on a single field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue {
                field: field.into(),
                message: message.into(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// Serialized form embedded in the error envelope.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{\"issues\":[]}"))
    }

    fn push(&mut self, field: &str, message: String) {
        self.issues.push(ValidationIssue {
            field: field.to_string(),
            message,
        });
    }
}

/// Accumulates rule violations for one request.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mandatory string of 1..=max characters.
    pub fn required(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        self.check_length(field, value, 1, max);
        self
    }

    /// An optional string; when present it must hold 1..=max characters.
    pub fn optional(&mut self, field: &str, value: Option<&str>, max: usize) -> &mut Self {
        if let Some(value) = value {
            self.check_length(field, value, 1, max);
        }
        self
    }

    /// An optional filter string that must not be empty when present.
    pub fn non_empty(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.check_length(field, value, 1, usize::MAX);
        }
        self
    }

    /// An optional email address of at most `max` characters.
    pub fn email(&mut self, field: &str, value: Option<&str>, max: usize) -> &mut Self {
        if let Some(value) = value {
            if value.chars().count() > max {
                self.errors
                    .push(field, format!("must contain at most {max} character(s)"));
            } else if !is_valid_email(value) {
                self.errors.push(field, "Invalid email".to_string());
            }
        }
        self
    }

    /// An optional integer that must lie in `min..=max` when present.
    pub fn range(&mut self, field: &str, value: Option<i64>, min: i64, max: i64) -> &mut Self {
        if let Some(value) = value {
            if value < min {
                self.errors
                    .push(field, format!("must be greater than or equal to {min}"));
            } else if value > max {
                self.errors
                    .push(field, format!("must be less than or equal to {max}"));
            }
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn check_length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let len = value.chars().count();
        if len < min {
            self.errors
                .push(field, format!("must contain at least {min} character(s)"));
        } else if len > max {
            self.errors
                .push(field, format!("must contain at most {max} character(s)"));
        }
    }
}

/// Checks the overall shape `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
