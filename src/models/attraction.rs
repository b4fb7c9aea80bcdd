// src/models/attraction.rs
// DOCUMENTATION: Core data structures for town attractions
// PURPOSE: Database row model plus request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::ImageResponse;

/// Represents an attraction record from the database
/// DOCUMENTATION: Belongs to exactly one town; owns a set of ordered images
/// which are removed with it
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TownAttraction {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Owning town
    pub town_id: Uuid,

    /// Attraction name - required field
    pub name: String,

    /// Optional detailed description
    pub description: Option<String>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating an attraction under a town
/// DOCUMENTATION: The owning town comes from the URL, not the body
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateAttractionRequest {
    /// Attraction name (required)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Optional description
    pub description: Option<String>,
}

/// Request DTO for updating an existing attraction
/// DOCUMENTATION: Partial update - only provided fields are modified
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateAttractionRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,
}

/// Response DTO for attraction list entries
#[derive(Debug, Serialize, Deserialize)]
pub struct AttractionResponse {
    pub id: Uuid,
    pub town_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detailed response DTO
/// DOCUMENTATION: Used for GET /towns/{town_id}/attractions/{id};
/// carries the attraction's ordered images
#[derive(Debug, Serialize)]
pub struct AttractionDetailResponse {
    #[serde(flatten)]
    pub attraction: AttractionResponse,
    pub images: Vec<ImageResponse>,
}

impl TownAttraction {
    /// Convert TownAttraction to AttractionResponse for API output
    pub fn to_response(&self) -> AttractionResponse {
        AttractionResponse {
            id: self.id,
            town_id: self.town_id,
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
