// src/models/town.rs
// DOCUMENTATION: Core data structures for towns
// PURPOSE: Database row model plus request/response DTOs for the towns API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{AttractionResponse, ImageResponse};

/// Represents a town record from the database
/// DOCUMENTATION: Maps directly to the towns table in PostgreSQL
/// A town owns a set of ordered images and a set of attractions;
/// deleting it cascades to both
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Town {
    /// Unique identifier (UUID v4)
    pub id: Uuid,

    /// Town name - required field
    pub name: String,

    /// Optional detailed description
    pub description: Option<String>,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating a new town
/// DOCUMENTATION: Data transfer object for POST /towns endpoint
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateTownRequest {
    /// Town name (required)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Optional description
    pub description: Option<String>,
}

/// Request DTO for updating an existing town
/// DOCUMENTATION: Partial update - only provided fields are modified
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct UpdateTownRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,
}

/// Response DTO for town list entries
#[derive(Debug, Serialize, Deserialize)]
pub struct TownResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Detailed response DTO
/// DOCUMENTATION: Used for GET /towns/{id}; carries the town's ordered
/// images and its attractions
#[derive(Debug, Serialize)]
pub struct TownDetailResponse {
    #[serde(flatten)]
    pub town: TownResponse,
    pub images: Vec<ImageResponse>,
    pub attractions: Vec<AttractionResponse>,
}

impl Town {
    /// Convert Town to TownResponse for API output
    pub fn to_response(&self) -> TownResponse {
        TownResponse {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
