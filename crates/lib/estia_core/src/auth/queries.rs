//! User persistence queries.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::{User, UserRecord};

/// Fetch a user together with their password hash by email.
pub async fn find_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<UserRecord>, AuthError> {
    let row = sqlx::query_as::<_, (i32, String, String, String, DateTime<Utc>, DateTime<Utc>)>(
        "SELECT id, name, email, password_hash, created_at, updated_at \
         FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(
        row.map(|(id, name, email, password_hash, created_at, updated_at)| UserRecord {
            user: User {
                id,
                name,
                email,
                created_at,
                updated_at,
            },
            password_hash,
        }),
    )
}

/// Check whether an email is already registered.
pub async fn email_exists(pool: &PgPool, email: &str) -> Result<bool, AuthError> {
    let exists =
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(pool)
            .await?;
    Ok(exists)
}

/// Insert a new user, returning the stored row.
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, AuthError> {
    let (id, created_at, updated_at) = sqlx::query_as::<_, (i32, DateTime<Utc>, DateTime<Utc>)>(
        "INSERT INTO users (name, email, password_hash) VALUES ($1, $2, $3) \
         RETURNING id, created_at, updated_at",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await?;
    Ok(User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        created_at,
        updated_at,
    })
}

/// Fetch a user's public profile by id.
pub async fn get_user_by_id(pool: &PgPool, id: i32) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, (i32, String, String, DateTime<Utc>, DateTime<Utc>)>(
        "SELECT id, name, email, created_at, updated_at FROM users WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(id, name, email, created_at, updated_at)| User {
        id,
        name,
        email,
        created_at,
        updated_at,
    }))
}
