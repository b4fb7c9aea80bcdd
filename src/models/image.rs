// src/models/image.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Image row shared by town_images and attraction_images
/// (queries alias the owning foreign key to parent_id)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    pub id: Uuid,
    pub parent_id: Uuid,
    pub image_url: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to attach a new image to a town or attraction
/// New images are appended at the end of the parent's current order
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateImageRequest {
    #[validate(url)]
    pub image_url: String,
}

/// Body of the reorder endpoints: { "id": <string>, "order": <integer> }
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ImageOrderUpdate {
    #[validate(length(min = 1))]
    pub id: String,
    pub order: i32,
}

/// Image DTO for API responses
#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub id: Uuid,
    pub image_url: String,
    #[serde(rename = "order")]
    pub display_order: i32,
}

impl Image {
    /// Convert database image into API response DTO
    pub fn to_response(&self) -> ImageResponse {
        ImageResponse {
            id: self.id,
            image_url: self.image_url.clone(),
            display_order: self.display_order,
        }
    }
}
