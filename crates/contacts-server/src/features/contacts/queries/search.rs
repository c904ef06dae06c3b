//! Search contacts query
//!
//! Filters are AND-combined and each one is optional:
//!
//! - `name` matches first or last name, case-insensitively
//! - `email` and `phone` match as case-sensitive substrings
//!
//! `%` and `_` in filter values match literally. Results are ordered by id.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::features::contacts::{ContactError, ContactResponse};
use crate::features::shared::{
    error_helpers::contains_pattern,
    pagination::{PageRequest, Paging, MAX_PAGE_SIZE},
    Validator,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchContactsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchContactsResponse {
    pub items: Vec<ContactResponse>,
    pub paging: Paging,
}

impl SearchContactsQuery {
    pub fn validate(&self) -> Result<(), ContactError> {
        let mut v = Validator::new();
        v.non_empty("name", self.name.as_deref())
            .non_empty("email", self.email.as_deref())
            .non_empty("phone", self.phone.as_deref())
            .range("page", self.page, 1, i64::MAX)
            .range("size", self.size, 1, MAX_PAGE_SIZE);
        Ok(v.finish()?)
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

/// Shared by the count and the page query so both see the same rows.
const FILTER: &str = r#"
    WHERE user_id = $1
      AND ($2::TEXT IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2)
      AND ($3::TEXT IS NULL OR email LIKE $3)
      AND ($4::TEXT IS NULL OR phone LIKE $4)
"#;

#[tracing::instrument(skip(pool))]
pub async fn handle(
    pool: PgPool,
    user_id: i64,
    query: SearchContactsQuery,
) -> Result<SearchContactsResponse, ContactError> {
    query.validate()?;

    let page = query.page_request();
    let name = query.name.as_deref().map(contains_pattern);
    let email = query.email.as_deref().map(contains_pattern);
    let phone = query.phone.as_deref().map(contains_pattern);

    let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM contacts {FILTER}"))
        .bind(user_id)
        .bind(&name)
        .bind(&email)
        .bind(&phone)
        .fetch_one(&pool)
        .await?;

    let items = sqlx::query_as::<_, ContactResponse>(&format!(
        "SELECT id, first_name, last_name, email, phone FROM contacts {FILTER} \
         ORDER BY id LIMIT $5 OFFSET $6"
    ))
    .bind(user_id)
    .bind(&name)
    .bind(&email)
    .bind(&phone)
    .bind(page.size())
    .bind(page.offset())
    .fetch_all(&pool)
    .await?;

    tracing::debug!(total, returned = items.len(), "Contacts searched");

    Ok(SearchContactsResponse {
        items,
        paging: Paging::from_request(&page, total),
    })
}
