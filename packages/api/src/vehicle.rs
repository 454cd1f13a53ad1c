//! Vehicle CRUD.
//!
//! Endpoints follow the blog conventions; the dialog submit paths persist
//! through here rather than stopping at the UI layer.

use crate::client::{self, ApiError};
use crate::models::{Vehicle, VehiclePayload};

/// `GET /vehicle`
pub async fn list_vehicles() -> Result<Vec<Vehicle>, ApiError> {
    client::get("/vehicle", &[]).await
}

/// `POST /vehicle`
pub async fn create_vehicle(payload: &VehiclePayload) -> Result<Vehicle, ApiError> {
    client::post("/vehicle", payload).await
}

/// `PUT /vehicle/:id`
pub async fn update_vehicle(id: &str, payload: &VehiclePayload) -> Result<Vehicle, ApiError> {
    client::put(&format!("/vehicle/{id}"), payload).await
}

/// `DELETE /vehicle/:id`
pub async fn delete_vehicle(id: &str) -> Result<(), ApiError> {
    client::delete(&format!("/vehicle/{id}")).await
}
