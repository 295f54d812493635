//! Message persistence queries.

use sqlx::PgPool;

/// Insert a message from `user_id` about `rental_id`.
pub async fn create_message(
    pool: &PgPool,
    user_id: i32,
    rental_id: i32,
    message: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO messages (user_id, rental_id, message) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(rental_id)
        .bind(message)
        .execute(pool)
        .await?;
    Ok(())
}
