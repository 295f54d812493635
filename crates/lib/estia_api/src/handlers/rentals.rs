//! Rental request handlers.

use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::CurrentUser;
use crate::models::{MessageResponse, RentalResponse, RentalsResponse};
use crate::services::rentals::{self, PictureUpload, RentalForm};

/// `GET /api/rentals` - all rentals.
pub async fn list_rentals_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<RentalsResponse>> {
    Ok(Json(rentals::list(&state.pool).await?))
}

/// `GET /api/rentals/{id}` - one rental.
pub async fn get_rental_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<RentalResponse>> {
    Ok(Json(rentals::get(&state.pool, id).await?))
}

/// `POST /api/rentals` - create a rental from a multipart form.
pub async fn create_rental_handler(
    State(state): State<AppState>,
    axum::Extension(user): axum::Extension<CurrentUser>,
    multipart: Multipart,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let form = read_rental_form(multipart).await?;
    let resp = rentals::create(&state.pool, &state.images, &user.0, form).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

/// `PUT /api/rentals/{id}` - update a rental from a multipart form.
pub async fn update_rental_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> ApiResult<Json<MessageResponse>> {
    let form = read_rental_form(multipart).await?;
    let resp = rentals::update(&state.pool, id, form).await?;
    Ok(Json(resp))
}

/// Collect the `name`, `surface`, `price`, `description` and `picture`
/// fields out of a multipart form. Unknown fields are skipped.
async fn read_rental_form(mut multipart: Multipart) -> ApiResult<RentalForm> {
    let mut form = RentalForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("invalid multipart body: {e}")))?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };
        match field_name.as_str() {
            "name" => form.name = Some(read_text(field).await?),
            "surface" => form.surface = read_text(field).await?.parse().ok(),
            "price" => form.price = read_text(field).await?.parse().ok(),
            "description" => form.description = Some(read_text(field).await?),
            "picture" => {
                let filename = field.file_name().unwrap_or("picture").to_string();
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(format!("invalid picture upload: {e}")))?;
                form.picture = Some(PictureUpload {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Validation(format!("invalid multipart field: {e}")))
}
