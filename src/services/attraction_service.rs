// src/services/attraction_service.rs
// DOCUMENTATION: Business logic for town attractions
// PURPOSE: Town-scoped orchestration over the attraction repository

use crate::db::{AttractionRepository, ImageRepository, ATTRACTION_IMAGES};
use crate::errors::TownsError;
use crate::models::{
    AttractionDetailResponse, AttractionResponse, CreateAttractionRequest,
    UpdateAttractionRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

pub struct AttractionService;

impl AttractionService {
    /// List a town's attractions
    pub async fn list(
        pool: &PgPool,
        town_id: Uuid,
    ) -> Result<Vec<AttractionResponse>, TownsError> {
        let attractions = AttractionRepository::list_by_town(pool, town_id).await?;
        Ok(attractions.iter().map(|a| a.to_response()).collect())
    }

    /// Create an attraction under a town
    pub async fn create(
        pool: &PgPool,
        town_id: Uuid,
        req: CreateAttractionRequest,
    ) -> Result<AttractionResponse, TownsError> {
        let attraction = AttractionRepository::create(pool, town_id, &req).await?;
        Ok(attraction.to_response())
    }

    /// Get an attraction with its ordered images
    /// DOCUMENTATION: Lookup is town-scoped, so an attraction id under the
    /// wrong town is a 404
    pub async fn get_detail(
        pool: &PgPool,
        town_id: Uuid,
        id: Uuid,
    ) -> Result<AttractionDetailResponse, TownsError> {
        let attraction = AttractionRepository::get_by_id(pool, town_id, id).await?;
        let images = ImageRepository::list(pool, &ATTRACTION_IMAGES, attraction.id).await?;

        Ok(AttractionDetailResponse {
            attraction: attraction.to_response(),
            images: images.iter().map(|i| i.to_response()).collect(),
        })
    }

    /// Update an attraction (partial)
    pub async fn update(
        pool: &PgPool,
        town_id: Uuid,
        id: Uuid,
        req: UpdateAttractionRequest,
    ) -> Result<AttractionResponse, TownsError> {
        let attraction = AttractionRepository::update(pool, town_id, id, &req).await?;
        Ok(attraction.to_response())
    }

    /// Delete an attraction; the schema cascades to its images
    pub async fn delete(pool: &PgPool, town_id: Uuid, id: Uuid) -> Result<(), TownsError> {
        AttractionRepository::delete(pool, town_id, id).await
    }
}
