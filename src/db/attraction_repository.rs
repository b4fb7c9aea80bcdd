// src/db/attraction_repository.rs
// DOCUMENTATION: Database access layer for town attractions
// PURPOSE: Town-scoped CRUD; an attraction is only reachable through its town

use crate::errors::TownsError;
use crate::models::{CreateAttractionRequest, TownAttraction, UpdateAttractionRequest};
use sqlx::PgPool;
use uuid::Uuid;

pub struct AttractionRepository;

impl AttractionRepository {
    /// List attractions belonging to a town
    /// DOCUMENTATION: Plain filter - an unknown town yields an empty list
    pub async fn list_by_town(
        pool: &PgPool,
        town_id: Uuid,
    ) -> Result<Vec<TownAttraction>, TownsError> {
        let attractions = sqlx::query_as::<_, TownAttraction>(
            r#"
            SELECT id, town_id, name, description, created_at, updated_at
            FROM town_attractions
            WHERE town_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(town_id)
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list attractions for town {}: {}", town_id, e);
            TownsError::Database(e.to_string())
        })?;

        Ok(attractions)
    }

    /// Create attraction under a town
    /// DOCUMENTATION: The owning town comes from the URL; it must exist
    pub async fn create(
        pool: &PgPool,
        town_id: Uuid,
        req: &CreateAttractionRequest,
    ) -> Result<TownAttraction, TownsError> {
        let town_exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM towns WHERE id = $1")
            .bind(town_id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to verify town {}: {}", town_id, e);
                TownsError::Database(e.to_string())
            })?;

        if town_exists.is_none() {
            log::warn!("Town not found: {}", town_id);
            return Err(TownsError::town_not_found());
        }

        let attraction = sqlx::query_as::<_, TownAttraction>(
            r#"
            INSERT INTO town_attractions (town_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, town_id, name, description, created_at, updated_at
            "#,
        )
        .bind(town_id)
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create attraction: {}", e);
            TownsError::Database(e.to_string())
        })?;

        log::info!(
            "Created attraction {} under town {}",
            attraction.id,
            town_id
        );
        Ok(attraction)
    }

    /// Retrieve attraction by ID within a town
    /// DOCUMENTATION: Lookup is town-scoped; a valid attraction id under the
    /// wrong town is a 404, matching nested-resource semantics
    pub async fn get_by_id(
        pool: &PgPool,
        town_id: Uuid,
        id: Uuid,
    ) -> Result<TownAttraction, TownsError> {
        let attraction = sqlx::query_as::<_, TownAttraction>(
            r#"
            SELECT id, town_id, name, description, created_at, updated_at
            FROM town_attractions
            WHERE id = $1 AND town_id = $2
            "#,
        )
        .bind(id)
        .bind(town_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching attraction: {}", e);
            TownsError::Database(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Attraction not found: {} (town {})", id, town_id);
            TownsError::attraction_not_found()
        })?;

        Ok(attraction)
    }

    /// Update existing attraction
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        town_id: Uuid,
        id: Uuid,
        req: &UpdateAttractionRequest,
    ) -> Result<TownAttraction, TownsError> {
        let attraction = sqlx::query_as::<_, TownAttraction>(
            r#"
            UPDATE town_attractions
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                updated_at = NOW()
            WHERE id = $3 AND town_id = $4
            RETURNING id, town_id, name, description, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(id)
        .bind(town_id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for attraction {}: {}", id, e);
            TownsError::Database(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Attraction not found: {} (town {})", id, town_id);
            TownsError::attraction_not_found()
        })?;

        log::info!("Updated attraction: {}", id);
        Ok(attraction)
    }

    /// Delete attraction
    /// DOCUMENTATION: Hard delete; ON DELETE CASCADE removes its images
    pub async fn delete(pool: &PgPool, town_id: Uuid, id: Uuid) -> Result<(), TownsError> {
        let rows = sqlx::query("DELETE FROM town_attractions WHERE id = $1 AND town_id = $2")
            .bind(id)
            .bind(town_id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for attraction {}: {}", id, e);
                TownsError::Database(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(TownsError::attraction_not_found());
        }

        log::info!("Deleted attraction: {}", id);
        Ok(())
    }
}
