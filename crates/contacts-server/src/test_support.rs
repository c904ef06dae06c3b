//! Fixtures for database-backed unit tests

use sqlx::PgPool;

use crate::auth::{CurrentUser, PasswordHasher};

/// Cheap parameters so tests do not spend seconds hashing.
pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::with_params(1024, 1, 1).unwrap()
}

/// Inserts a user with password `rahasia` and returns its identity.
pub async fn insert_user(pool: &PgPool, username: &str) -> CurrentUser {
    let hash = test_hasher().hash("rahasia").unwrap();
    sqlx::query_as::<_, CurrentUser>(
        "INSERT INTO users (username, password, name) VALUES ($1, $2, $3) RETURNING id, username, name",
    )
    .bind(username)
    .bind(hash)
    .bind(format!("{username} name"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_contact(pool: &PgPool, user_id: i64, first_name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO contacts (user_id, first_name) VALUES ($1, $2) RETURNING id")
        .bind(user_id)
        .bind(first_name)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_address(pool: &PgPool, contact_id: i64, country: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO addresses (contact_id, country) VALUES ($1, $2) RETURNING id")
        .bind(contact_id)
        .bind(country)
        .fetch_one(pool)
        .await
        .unwrap()
}
