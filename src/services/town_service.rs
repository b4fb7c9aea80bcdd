// src/services/town_service.rs
// DOCUMENTATION: Business logic for towns
// PURPOSE: Intermediary between handlers and repositories, assembles DTOs

use crate::db::{AttractionRepository, ImageRepository, TownRepository, TOWN_IMAGES};
use crate::errors::TownsError;
use crate::models::{
    CreateTownRequest, TownDetailResponse, TownResponse, UpdateTownRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct TownService;

impl TownService {
    /// List all towns as flat rows
    pub async fn list(pool: &PgPool) -> Result<Vec<TownResponse>, TownsError> {
        let towns = TownRepository::list(pool).await?;
        Ok(towns.iter().map(|t| t.to_response()).collect())
    }

    /// Create a new town
    pub async fn create(
        pool: &PgPool,
        req: CreateTownRequest,
    ) -> Result<TownResponse, TownsError> {
        let town = TownRepository::create(pool, &req).await?;
        Ok(town.to_response())
    }

    /// Get a town with its ordered images and its attractions
    pub async fn get_detail(pool: &PgPool, id: Uuid) -> Result<TownDetailResponse, TownsError> {
        let town = TownRepository::get_by_id(pool, id).await?;
        let images = ImageRepository::list(pool, &TOWN_IMAGES, town.id).await?;
        let attractions = AttractionRepository::list_by_town(pool, town.id).await?;

        Ok(TownDetailResponse {
            town: town.to_response(),
            images: images.iter().map(|i| i.to_response()).collect(),
            attractions: attractions.iter().map(|a| a.to_response()).collect(),
        })
    }

    /// Update a town (partial)
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateTownRequest,
    ) -> Result<TownResponse, TownsError> {
        let town = TownRepository::update(pool, id, &req).await?;
        Ok(town.to_response())
    }

    /// Delete a town; the schema cascades to its images and attractions
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), TownsError> {
        TownRepository::delete(pool, id).await
    }
}
