// src/db/image_repository.rs
// DOCUMENTATION: Database access layer for ordered image collections
// PURPOSE: One implementation serving both image tables; every mutation of
// a sibling set runs in a transaction that first locks the parent row

use crate::errors::TownsError;
use crate::models::{CreateImageRequest, Image, SiblingOrder};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Descriptor for one of the two image tables
/// DOCUMENTATION: town_images and attraction_images have identical shapes
/// apart from the owning foreign key; queries are built from this descriptor
/// so the ordering logic exists exactly once
pub struct ImageTable {
    /// Image table name
    pub table: &'static str,
    /// Table holding the parent rows (locked FOR UPDATE during mutations)
    pub parent_table: &'static str,
    /// Foreign key column pointing at the parent
    pub parent_column: &'static str,
    /// Not-found message when the parent id does not resolve
    pub parent_missing: &'static str,
}

pub const TOWN_IMAGES: ImageTable = ImageTable {
    table: "town_images",
    parent_table: "towns",
    parent_column: "town_id",
    parent_missing: "Town not found",
};

pub const ATTRACTION_IMAGES: ImageTable = ImageTable {
    table: "attraction_images",
    parent_table: "town_attractions",
    parent_column: "attraction_id",
    parent_missing: "Attraction not found",
};

pub struct ImageRepository;

impl ImageRepository {
    /// Lock the parent row for the duration of the transaction
    /// DOCUMENTATION: Serializes concurrent appends, deletes, and reorders
    /// on the same sibling set; without this, interleaved read-modify-write
    /// cycles can leave duplicate or missing order values
    async fn lock_parent(
        tx: &mut Transaction<'_, Postgres>,
        table: &ImageTable,
        parent_id: Uuid,
    ) -> Result<(), TownsError> {
        let sql = format!(
            "SELECT id FROM {} WHERE id = $1 FOR UPDATE",
            table.parent_table
        );
        let row: Option<(Uuid,)> = sqlx::query_as(&sql)
            .bind(parent_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| {
                log::error!("Failed to lock {} row {}: {}", table.parent_table, parent_id, e);
                TownsError::Database(e.to_string())
            })?;

        if row.is_none() {
            log::warn!("{}: {}", table.parent_missing, parent_id);
            return Err(TownsError::NotFound(table.parent_missing.to_string()));
        }

        Ok(())
    }

    /// Load one parent's sibling set into the ordering engine
    async fn load_siblings(
        tx: &mut Transaction<'_, Postgres>,
        table: &ImageTable,
        parent_id: Uuid,
    ) -> Result<SiblingOrder, TownsError> {
        let sql = format!(
            r#"
            SELECT id, display_order
            FROM {table}
            WHERE {parent} = $1
            ORDER BY display_order ASC, created_at ASC
            "#,
            table = table.table,
            parent = table.parent_column,
        );
        let rows: Vec<(Uuid, i32)> = sqlx::query_as(&sql)
            .bind(parent_id)
            .fetch_all(&mut **tx)
            .await
            .map_err(|e| {
                log::error!("Failed to load siblings for {}: {}", parent_id, e);
                TownsError::Database(e.to_string())
            })?;

        Ok(SiblingOrder::from_rows(rows))
    }

    /// Persist the engine's reassignments; only changed rows are written
    async fn apply_changes(
        tx: &mut Transaction<'_, Postgres>,
        table: &ImageTable,
        order: &SiblingOrder,
    ) -> Result<(), TownsError> {
        let sql = format!(
            "UPDATE {} SET display_order = $1, updated_at = NOW() WHERE id = $2",
            table.table
        );
        for (id, value) in order.changes() {
            sqlx::query(&sql)
                .bind(value)
                .bind(id)
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    log::error!("Failed to persist order {} for image {}: {}", value, id, e);
                    TownsError::Database(e.to_string())
                })?;
        }

        Ok(())
    }

    /// List a parent's images in display order
    /// DOCUMENTATION: Plain filter - an unknown parent yields an empty list.
    /// created_at breaks ties so rows predating the unique constraint still
    /// load deterministically
    pub async fn list(
        pool: &PgPool,
        table: &ImageTable,
        parent_id: Uuid,
    ) -> Result<Vec<Image>, TownsError> {
        let sql = format!(
            r#"
            SELECT id, {parent} AS parent_id, image_url, display_order,
                   created_at, updated_at
            FROM {table}
            WHERE {parent} = $1
            ORDER BY display_order ASC, created_at ASC
            "#,
            table = table.table,
            parent = table.parent_column,
        );

        let images = sqlx::query_as::<_, Image>(&sql)
            .bind(parent_id)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list {} for {}: {}", table.table, parent_id, e);
                TownsError::Database(e.to_string())
            })?;

        Ok(images)
    }

    /// Attach a new image to a parent, appended at the end of the order
    /// DOCUMENTATION: display_order = current max + 1 (0 for an empty set),
    /// computed under the parent lock so two concurrent appends cannot pick
    /// the same slot
    pub async fn create(
        pool: &PgPool,
        table: &ImageTable,
        parent_id: Uuid,
        req: &CreateImageRequest,
    ) -> Result<Image, TownsError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin transaction: {}", e);
            TownsError::Database(e.to_string())
        })?;

        Self::lock_parent(&mut tx, table, parent_id).await?;

        let sql = format!(
            "SELECT MAX(display_order) FROM {} WHERE {} = $1",
            table.table, table.parent_column
        );
        let max: (Option<i32>,) = sqlx::query_as(&sql)
            .bind(parent_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to read max order in {}: {}", table.table, e);
                TownsError::Database(e.to_string())
            })?;
        let next_order = max.0.map_or(0, |value| value + 1);

        let sql = format!(
            r#"
            INSERT INTO {table} ({parent}, image_url, display_order)
            VALUES ($1, $2, $3)
            RETURNING id, {parent} AS parent_id, image_url, display_order,
                      created_at, updated_at
            "#,
            table = table.table,
            parent = table.parent_column,
        );
        let image = sqlx::query_as::<_, Image>(&sql)
            .bind(parent_id)
            .bind(&req.image_url)
            .bind(next_order)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to create image in {}: {}", table.table, e);
                TownsError::Database(e.to_string())
            })?;

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit image create: {}", e);
            TownsError::Database(e.to_string())
        })?;

        log::info!(
            "Created image {} at order {} ({})",
            image.id,
            image.display_order,
            table.table
        );
        Ok(image)
    }

    /// Delete an image and compact the surviving siblings
    /// DOCUMENTATION: The compaction decision lives in SiblingOrder::remove;
    /// this method only deletes the row and applies the engine's changes(),
    /// all in one transaction under the parent lock, so the set stays
    /// gap-free
    pub async fn delete(
        pool: &PgPool,
        table: &ImageTable,
        parent_id: Uuid,
        image_id: Uuid,
    ) -> Result<(), TownsError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin transaction: {}", e);
            TownsError::Database(e.to_string())
        })?;

        Self::lock_parent(&mut tx, table, parent_id).await?;

        let mut order = Self::load_siblings(&mut tx, table, parent_id).await?;

        if order.is_empty() {
            log::warn!("Image not found: {} ({})", image_id, table.table);
            return Err(TownsError::image_not_found());
        }

        order.remove(image_id).ok_or_else(|| {
            log::warn!("Image not found: {} ({})", image_id, table.table);
            TownsError::image_not_found()
        })?;

        let sql = format!(
            "DELETE FROM {} WHERE id = $1 AND {} = $2",
            table.table, table.parent_column
        );
        sqlx::query(&sql)
            .bind(image_id)
            .bind(parent_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Delete failed for image {}: {}", image_id, e);
                TownsError::Database(e.to_string())
            })?;

        Self::apply_changes(&mut tx, table, &order).await?;

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit image delete: {}", e);
            TownsError::Database(e.to_string())
        })?;

        log::info!("Deleted image {} ({})", image_id, table.table);
        Ok(())
    }

    /// Move an image to a caller-supplied position within its sibling set
    /// DOCUMENTATION: Resolves the image's parent, locks it, loads the full
    /// sibling set, applies the move, and persists only the rows whose order
    /// changed. The deferred unique constraint checks the invariant at commit.
    /// Returns the final position
    pub async fn reorder(
        pool: &PgPool,
        table: &ImageTable,
        image_id: Uuid,
        requested: i32,
    ) -> Result<i32, TownsError> {
        let mut tx = pool.begin().await.map_err(|e| {
            log::error!("Failed to begin transaction: {}", e);
            TownsError::Database(e.to_string())
        })?;

        let sql = format!(
            "SELECT {} FROM {} WHERE id = $1",
            table.parent_column, table.table
        );
        let parent: Option<(Uuid,)> = sqlx::query_as(&sql)
            .bind(image_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| {
                log::error!("Failed to resolve parent of image {}: {}", image_id, e);
                TownsError::Database(e.to_string())
            })?;

        let (parent_id,) = parent.ok_or_else(|| {
            log::warn!("Image not found: {} ({})", image_id, table.table);
            TownsError::image_not_found()
        })?;

        Self::lock_parent(&mut tx, table, parent_id).await?;

        let mut order = Self::load_siblings(&mut tx, table, parent_id).await?;

        // The image can vanish between the resolve above and the lock; the
        // re-read under the lock is authoritative.
        let final_position = order.reorder(image_id, requested).ok_or_else(|| {
            log::warn!("Image not found: {} ({})", image_id, table.table);
            TownsError::image_not_found()
        })?;

        Self::apply_changes(&mut tx, table, &order).await?;

        tx.commit().await.map_err(|e| {
            log::error!("Failed to commit reorder: {}", e);
            TownsError::Database(e.to_string())
        })?;

        log::info!(
            "Moved image {} to position {} ({})",
            image_id,
            final_position,
            table.table
        );
        Ok(final_position)
    }
}
