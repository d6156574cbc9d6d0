//! Repository for the `tour_hotspots` table.

use monastery_core::types::DbId;
use sqlx::PgPool;

use crate::models::hotspot::{CreateTourHotspot, TourHotspot, UpdateTourHotspot};
use crate::patch::nullable;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, monastery_id, title, description, hotspot_type, x_position, y_position, \
    linked_media_id, audio_url, is_active, created_at";

/// Provides CRUD operations for virtual-tour hotspots.
pub struct TourHotspotRepo;

impl TourHotspotRepo {
    /// Active hotspots for one monastery, left to right across the panorama.
    pub async fn list_active_for_monastery(
        pool: &PgPool,
        monastery_id: DbId,
    ) -> Result<Vec<TourHotspot>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tour_hotspots
             WHERE monastery_id = $1 AND is_active = true
             ORDER BY x_position ASC"
        );
        sqlx::query_as::<_, TourHotspot>(&query)
            .bind(monastery_id)
            .fetch_all(pool)
            .await
    }

    /// Find a hotspot by ID, active or not.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TourHotspot>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tour_hotspots WHERE id = $1");
        sqlx::query_as::<_, TourHotspot>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new hotspot, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTourHotspot,
    ) -> Result<TourHotspot, sqlx::Error> {
        let query = format!(
            "INSERT INTO tour_hotspots (
                monastery_id, title, description, hotspot_type, x_position, y_position,
                linked_media_id, audio_url, is_active
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourHotspot>(&query)
            .bind(input.monastery_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.hotspot_type)
            .bind(input.x_position)
            .bind(input.y_position)
            .bind(input.linked_media_id)
            .bind(input.audio_url.as_deref())
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Update a hotspot. Only supplied fields in `input` are applied; an
    /// explicit `null` clears `linked_media_id` or `audio_url`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTourHotspot,
    ) -> Result<Option<TourHotspot>, sqlx::Error> {
        let (linked_media_id_set, linked_media_id) = nullable(&input.linked_media_id);
        let (audio_url_set, audio_url) = nullable(&input.audio_url);

        let query = format!(
            "UPDATE tour_hotspots SET
                monastery_id = COALESCE($2, monastery_id),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                hotspot_type = COALESCE($5, hotspot_type),
                x_position = COALESCE($6, x_position),
                y_position = COALESCE($7, y_position),
                linked_media_id = CASE WHEN $8 THEN $9 ELSE linked_media_id END,
                audio_url = CASE WHEN $10 THEN $11 ELSE audio_url END,
                is_active = COALESCE($12, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourHotspot>(&query)
            .bind(id)
            .bind(input.monastery_id)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.hotspot_type.as_deref())
            .bind(input.x_position)
            .bind(input.y_position)
            .bind(linked_media_id_set)
            .bind(linked_media_id)
            .bind(audio_url_set)
            .bind(audio_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a hotspot by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tour_hotspots WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
