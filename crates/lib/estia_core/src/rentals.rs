//! Rental persistence queries.

use sqlx::PgPool;

use crate::models::rental::Rental;

/// Data for a new rental row.
#[derive(Debug, Clone)]
pub struct NewRental {
    pub name: String,
    pub surface: f64,
    pub price: f64,
    pub picture: String,
    pub description: String,
    pub owner_id: i32,
}

/// Fields updatable on an existing rental.
#[derive(Debug, Clone)]
pub struct RentalUpdate {
    pub name: String,
    pub surface: f64,
    pub price: f64,
    pub description: String,
}

/// List all rentals, oldest first.
pub async fn list_rentals(pool: &PgPool) -> Result<Vec<Rental>, sqlx::Error> {
    sqlx::query_as::<_, Rental>(
        "SELECT id, name, surface, price, picture, description, owner_id, created_at, updated_at \
         FROM rentals ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Fetch a rental by id.
pub async fn get_rental(pool: &PgPool, id: i32) -> Result<Option<Rental>, sqlx::Error> {
    sqlx::query_as::<_, Rental>(
        "SELECT id, name, surface, price, picture, description, owner_id, created_at, updated_at \
         FROM rentals WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a new rental, returning the stored row.
pub async fn create_rental(pool: &PgPool, new: &NewRental) -> Result<Rental, sqlx::Error> {
    sqlx::query_as::<_, Rental>(
        "INSERT INTO rentals (name, surface, price, picture, description, owner_id) \
         VALUES ($1, $2, $3, $4, $5, $6) \
         RETURNING id, name, surface, price, picture, description, owner_id, created_at, updated_at",
    )
    .bind(&new.name)
    .bind(new.surface)
    .bind(new.price)
    .bind(&new.picture)
    .bind(&new.description)
    .bind(new.owner_id)
    .fetch_one(pool)
    .await
}

/// Update a rental's mutable fields and bump `updated_at`.
///
/// Returns whether a row matched.
pub async fn update_rental(
    pool: &PgPool,
    id: i32,
    update: &RentalUpdate,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE rentals SET name = $1, surface = $2, price = $3, description = $4, \
         updated_at = now() WHERE id = $5",
    )
    .bind(&update.name)
    .bind(update.surface)
    .bind(update.price)
    .bind(&update.description)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected() > 0)
}
