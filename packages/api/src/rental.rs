//! Rental CRUD.

use crate::client::{self, ApiError};
use crate::models::{Rental, RentalPayload};

/// `GET /rental`
pub async fn list_rentals() -> Result<Vec<Rental>, ApiError> {
    client::get("/rental", &[]).await
}

/// `POST /rental`
pub async fn create_rental(payload: &RentalPayload) -> Result<Rental, ApiError> {
    client::post("/rental", payload).await
}

/// `PUT /rental/:id`
pub async fn update_rental(id: &str, payload: &RentalPayload) -> Result<Rental, ApiError> {
    client::put(&format!("/rental/{id}"), payload).await
}
