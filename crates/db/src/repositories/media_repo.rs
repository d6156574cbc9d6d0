//! Repository for the `media` table.

use monastery_core::types::DbId;
use sqlx::PgPool;

use crate::filter::{non_blank, Conditions};
use crate::models::media::{CreateMedia, Media, MediaFilter, UpdateMedia};
use crate::patch::nullable;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, monastery_id, festival_id, media_type, url, title, description, alt, \
    category, is_main, sort_order, file_size, mime_type, uploaded_by, created_at";

/// Provides CRUD operations for media records.
pub struct MediaRepo;

impl MediaRepo {
    /// List media matching every supplied filter key. The main item of a
    /// set comes first, then ascending sort order.
    pub async fn list(pool: &PgPool, filter: &MediaFilter) -> Result<Vec<Media>, sqlx::Error> {
        let media_type = non_blank(&filter.media_type);
        let category = non_blank(&filter.category);

        let mut conditions = Conditions::new();
        if filter.monastery_id.is_some() {
            conditions.bound(|p| format!("monastery_id = {p}"));
        }
        if filter.festival_id.is_some() {
            conditions.bound(|p| format!("festival_id = {p}"));
        }
        if media_type.is_some() {
            conditions.bound(|p| format!("media_type = {p}"));
        }
        if category.is_some() {
            conditions.bound(|p| format!("category = {p}"));
        }

        let query = format!(
            "SELECT {COLUMNS} FROM media{} \
             ORDER BY is_main DESC, sort_order ASC, created_at ASC",
            conditions.where_clause()
        );
        let mut q = sqlx::query_as::<_, Media>(&query);

        // Bind dynamic parameters in order.
        if let Some(monastery_id) = filter.monastery_id {
            q = q.bind(monastery_id);
        }
        if let Some(festival_id) = filter.festival_id {
            q = q.bind(festival_id);
        }
        if let Some(media_type) = media_type {
            q = q.bind(media_type);
        }
        if let Some(category) = category {
            q = q.bind(category);
        }
        q.fetch_all(pool).await
    }

    /// Find a media record by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new media record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (
                monastery_id, festival_id, media_type, url, title, description, alt,
                category, is_main, sort_order, file_size, mime_type, uploaded_by
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(input.monastery_id)
            .bind(input.festival_id)
            .bind(&input.media_type)
            .bind(&input.url)
            .bind(input.title.as_deref())
            .bind(input.description.as_deref())
            .bind(input.alt.as_deref())
            .bind(input.category.as_deref())
            .bind(input.is_main.unwrap_or(false))
            .bind(input.sort_order.unwrap_or(0))
            .bind(input.file_size)
            .bind(input.mime_type.as_deref())
            .bind(input.uploaded_by)
            .fetch_one(pool)
            .await
    }

    /// Update a media record. Only supplied fields in `input` are applied;
    /// an explicit `null` clears a nullable column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMedia,
    ) -> Result<Option<Media>, sqlx::Error> {
        let (monastery_id_set, monastery_id) = nullable(&input.monastery_id);
        let (festival_id_set, festival_id) = nullable(&input.festival_id);
        let (title_set, title) = nullable(&input.title);
        let (description_set, description) = nullable(&input.description);
        let (alt_set, alt) = nullable(&input.alt);
        let (category_set, category) = nullable(&input.category);
        let (file_size_set, file_size) = nullable(&input.file_size);
        let (mime_type_set, mime_type) = nullable(&input.mime_type);

        let query = format!(
            "UPDATE media SET
                monastery_id = CASE WHEN $2 THEN $3 ELSE monastery_id END,
                festival_id = CASE WHEN $4 THEN $5 ELSE festival_id END,
                media_type = COALESCE($6, media_type),
                url = COALESCE($7, url),
                title = CASE WHEN $8 THEN $9 ELSE title END,
                description = CASE WHEN $10 THEN $11 ELSE description END,
                alt = CASE WHEN $12 THEN $13 ELSE alt END,
                category = CASE WHEN $14 THEN $15 ELSE category END,
                is_main = COALESCE($16, is_main),
                sort_order = COALESCE($17, sort_order),
                file_size = CASE WHEN $18 THEN $19 ELSE file_size END,
                mime_type = CASE WHEN $20 THEN $21 ELSE mime_type END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .bind(monastery_id_set)
            .bind(monastery_id)
            .bind(festival_id_set)
            .bind(festival_id)
            .bind(input.media_type.as_deref())
            .bind(input.url.as_deref())
            .bind(title_set)
            .bind(title)
            .bind(description_set)
            .bind(description)
            .bind(alt_set)
            .bind(alt)
            .bind(category_set)
            .bind(category)
            .bind(input.is_main)
            .bind(input.sort_order)
            .bind(file_size_set)
            .bind(file_size)
            .bind(mime_type_set)
            .bind(mime_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a media record by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
