// src/db/town_repository.rs
// DOCUMENTATION: Database access layer for towns - all SQL queries
// PURPOSE: Abstract database operations from business logic

use crate::errors::TownsError;
use crate::models::{CreateTownRequest, Town, UpdateTownRequest};
use sqlx::PgPool;
use uuid::Uuid;

/// TownRepository: All database operations for towns
/// DOCUMENTATION: Uses query_as for type-safe SQL queries
pub struct TownRepository;

impl TownRepository {
    /// List all towns
    /// DOCUMENTATION: Used by GET /towns endpoint; flat rows, name order
    pub async fn list(pool: &PgPool) -> Result<Vec<Town>, TownsError> {
        let towns = sqlx::query_as::<_, Town>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM towns
            ORDER BY name ASC, created_at ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to list towns: {}", e);
            TownsError::Database(e.to_string())
        })?;

        Ok(towns)
    }

    /// Create new town in database
    /// DOCUMENTATION: Inserts town and returns created record
    /// Used by POST /towns endpoint
    pub async fn create(pool: &PgPool, req: &CreateTownRequest) -> Result<Town, TownsError> {
        let town = sqlx::query_as::<_, Town>(
            r#"
            INSERT INTO towns (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create town: {}", e);
            TownsError::Database(e.to_string())
        })?;

        log::info!("Created town with id: {}", town.id);
        Ok(town)
    }

    /// Retrieve town by ID
    /// DOCUMENTATION: Used for GET /towns/{id} endpoint
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Town, TownsError> {
        let town = sqlx::query_as::<_, Town>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM towns
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching town: {}", e);
            TownsError::Database(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Town not found: {}", id);
            TownsError::town_not_found()
        })?;

        Ok(town)
    }

    /// Update existing town
    /// DOCUMENTATION: Partial update - only provided fields are modified
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateTownRequest,
    ) -> Result<Town, TownsError> {
        let town = sqlx::query_as::<_, Town>(
            r#"
            UPDATE towns
            SET name = COALESCE($1, name),
                description = COALESCE($2, description),
                updated_at = NOW()
            WHERE id = $3
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for town {}: {}", id, e);
            TownsError::Database(e.to_string())
        })?
        .ok_or_else(|| {
            log::warn!("Town not found: {}", id);
            TownsError::town_not_found()
        })?;

        log::info!("Updated town: {}", id);
        Ok(town)
    }

    /// Delete town
    /// DOCUMENTATION: Hard delete; schema-level ON DELETE CASCADE removes the
    /// town's images and attractions (and the attractions' images) with it
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), TownsError> {
        let rows = sqlx::query("DELETE FROM towns WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for town {}: {}", id, e);
                TownsError::Database(e.to_string())
            })?
            .rows_affected();

        if rows == 0 {
            return Err(TownsError::town_not_found());
        }

        log::info!("Deleted town: {}", id);
        Ok(())
    }
}
