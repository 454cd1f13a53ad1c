//! Blog post CRUD.

use crate::client::{self, ApiError};
use crate::models::{Blog, BlogPayload, BlogSummary, Page};

/// `GET /blog` — paginated list in the reduced shape (no content).
pub async fn list_blogs(page: u32, limit: u32) -> Result<Page<BlogSummary>, ApiError> {
    let query = [
        ("page", page.to_string()),
        ("limit", limit.to_string()),
    ];
    client::get("/blog", &query).await
}

/// `GET /blog/:id` — full record including content.
pub async fn get_blog(id: &str) -> Result<Blog, ApiError> {
    client::get(&format!("/blog/{id}"), &[]).await
}

/// `POST /blog`
pub async fn create_blog(payload: &BlogPayload) -> Result<Blog, ApiError> {
    client::post("/blog", payload).await
}

/// `PUT /blog/:id`
pub async fn update_blog(id: &str, payload: &BlogPayload) -> Result<Blog, ApiError> {
    client::put(&format!("/blog/{id}"), payload).await
}

/// `DELETE /blog/:id`
pub async fn delete_blog(id: &str) -> Result<(), ApiError> {
    client::delete(&format!("/blog/{id}")).await
}
