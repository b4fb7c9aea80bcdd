// src/services/image_service.rs
// DOCUMENTATION: Business logic for image collections
// PURPOSE: Resolve reorder requests and delegate to the image repository

use crate::db::{ImageRepository, ImageTable};
use crate::errors::TownsError;
use crate::models::{CreateImageRequest, ImageOrderUpdate, ImageResponse};
use sqlx::PgPool;
use uuid::Uuid;

pub struct ImageService;

impl ImageService {
    /// List a parent's images in display order
    pub async fn list(
        pool: &PgPool,
        table: &ImageTable,
        parent_id: Uuid,
    ) -> Result<Vec<ImageResponse>, TownsError> {
        let images = ImageRepository::list(pool, table, parent_id).await?;
        Ok(images.iter().map(|i| i.to_response()).collect())
    }

    /// Attach a new image, appended at the end of the parent's order
    pub async fn add(
        pool: &PgPool,
        table: &ImageTable,
        parent_id: Uuid,
        req: CreateImageRequest,
    ) -> Result<ImageResponse, TownsError> {
        let image = ImageRepository::create(pool, table, parent_id, &req).await?;
        Ok(image.to_response())
    }

    /// Delete an image; the surviving siblings compact to close the gap
    pub async fn remove(
        pool: &PgPool,
        table: &ImageTable,
        parent_id: Uuid,
        image_id: Uuid,
    ) -> Result<(), TownsError> {
        ImageRepository::delete(pool, table, parent_id, image_id).await
    }

    /// Move an image to the requested position
    /// DOCUMENTATION: The body carries the id as a string; one that does not
    /// resolve to an image - including one that is not a UUID at all - is
    /// "Image not found". Parsing is part of resolution, not validation
    pub async fn reorder(
        pool: &PgPool,
        table: &ImageTable,
        update: ImageOrderUpdate,
    ) -> Result<i32, TownsError> {
        let image_id = Uuid::parse_str(&update.id).map_err(|_| {
            log::warn!("Reorder request with unresolvable id: {}", update.id);
            TownsError::image_not_found()
        })?;

        ImageRepository::reorder(pool, table, image_id, update.order).await
    }
}
