//! Rental service: listing, detail, creation with image upload, update.

use estia_core::models::auth::User;
use estia_core::rentals::{self, NewRental, RentalUpdate};
use estia_core::storage::ImageStore;
use sqlx::PgPool;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::models::{MessageResponse, RentalResponse, RentalsResponse};

/// An uploaded rental picture.
#[derive(Debug)]
pub struct PictureUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fields collected from the rental multipart form.
#[derive(Debug, Default)]
pub struct RentalForm {
    pub name: Option<String>,
    pub surface: Option<f64>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub picture: Option<PictureUpload>,
}

/// List every rental.
pub async fn list(pool: &PgPool) -> ApiResult<RentalsResponse> {
    let rentals = rentals::list_rentals(pool).await?;
    Ok(RentalsResponse {
        rentals: rentals.into_iter().map(RentalResponse::from).collect(),
    })
}

/// Fetch one rental.
pub async fn get(pool: &PgPool, id: i32) -> ApiResult<RentalResponse> {
    let rental = rentals::get_rental(pool, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Rental not found with id:{id}")))?;
    Ok(RentalResponse::from(rental))
}

/// Create a rental owned by `owner`, storing its picture first.
pub async fn create(
    pool: &PgPool,
    images: &ImageStore,
    owner: &User,
    form: RentalForm,
) -> ApiResult<MessageResponse> {
    let picture = form.picture.ok_or_else(missing_fields)?;
    let name = form.name.filter(|n| !n.is_empty()).ok_or_else(missing_fields)?;
    let description = form
        .description
        .filter(|d| !d.is_empty())
        .ok_or_else(missing_fields)?;
    let surface = form.surface.filter(|s| *s > 0.0).ok_or_else(missing_fields)?;
    let price = form.price.filter(|p| *p > 0.0).ok_or_else(missing_fields)?;

    let picture_url = images
        .save(&picture.filename, &picture.content_type, &picture.bytes)
        .await?;

    rentals::create_rental(
        pool,
        &NewRental {
            name,
            surface,
            price,
            picture: picture_url,
            description,
            owner_id: owner.id,
        },
    )
    .await?;

    info!(owner = owner.id, "rental created");
    Ok(MessageResponse {
        message: "Rental created !".into(),
    })
}

/// Update a rental's fields and bump its `updated_at`.
///
/// A picture field, if present in the form, is ignored on update.
pub async fn update(pool: &PgPool, id: i32, form: RentalForm) -> ApiResult<MessageResponse> {
    let name = form.name.filter(|n| !n.is_empty()).ok_or_else(missing_fields)?;
    let description = form
        .description
        .filter(|d| !d.is_empty())
        .ok_or_else(missing_fields)?;
    let surface = form.surface.filter(|s| *s > 0.0).ok_or_else(missing_fields)?;
    let price = form.price.filter(|p| *p > 0.0).ok_or_else(missing_fields)?;

    let updated = rentals::update_rental(
        pool,
        id,
        &RentalUpdate {
            name,
            surface,
            price,
            description,
        },
    )
    .await?;

    if !updated {
        return Err(ApiError::NotFound(format!("Rental not found with id:{id}")));
    }

    info!(id, "rental updated");
    Ok(MessageResponse {
        message: "Rental updated !".into(),
    })
}

fn missing_fields() -> ApiError {
    ApiError::Validation("Fields cannot be null or empty".into())
}
