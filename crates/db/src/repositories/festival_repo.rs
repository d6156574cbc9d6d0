//! Repository for the `festivals` table.

use monastery_core::types::DbId;
use sqlx::PgPool;

use crate::filter::Conditions;
use crate::models::festival::{CreateFestival, Festival, FestivalFilter, UpdateFestival};
use crate::patch::nullable;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, monastery_id, name, description, significance, start_date, end_date, \
    duration, festival_type, traditions, rituals, image_url, is_annual, status, \
    created_at, updated_at";

/// Provides CRUD operations for festivals.
pub struct FestivalRepo;

impl FestivalRepo {
    /// List festivals matching every supplied filter key, soonest first.
    pub async fn list(
        pool: &PgPool,
        filter: &FestivalFilter,
    ) -> Result<Vec<Festival>, sqlx::Error> {
        let query = list_query(filter);
        let mut q = sqlx::query_as::<_, Festival>(&query);

        if let Some(monastery_id) = filter.monastery_id {
            q = q.bind(monastery_id);
        }
        if let Some(status) = filter.status {
            q = q.bind(status.as_str());
        }
        q.fetch_all(pool).await
    }

    /// Find a festival by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Festival>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM festivals WHERE id = $1");
        sqlx::query_as::<_, Festival>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new festival, returning the created row.
    ///
    /// Fails with a foreign-key violation when `monastery_id` is unknown.
    pub async fn create(pool: &PgPool, input: &CreateFestival) -> Result<Festival, sqlx::Error> {
        let query = format!(
            "INSERT INTO festivals (
                monastery_id, name, description, significance, start_date, end_date,
                duration, festival_type, traditions, rituals, image_url, is_annual, status
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Festival>(&query)
            .bind(input.monastery_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.significance)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.duration.as_deref())
            .bind(&input.festival_type)
            .bind(&input.traditions)
            .bind(&input.rituals)
            .bind(input.image_url.as_deref())
            .bind(input.is_annual.unwrap_or(true))
            .bind(input.status_or_default())
            .fetch_one(pool)
            .await
    }

    /// Update a festival. Only supplied fields in `input` are applied; an
    /// explicit `null` clears `end_date`, `duration` or `image_url`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFestival,
    ) -> Result<Option<Festival>, sqlx::Error> {
        let (end_date_set, end_date) = nullable(&input.end_date);
        let (duration_set, duration) = nullable(&input.duration);
        let (image_url_set, image_url) = nullable(&input.image_url);

        let query = format!(
            "UPDATE festivals SET
                monastery_id = COALESCE($2, monastery_id),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                significance = COALESCE($5, significance),
                start_date = COALESCE($6, start_date),
                end_date = CASE WHEN $7 THEN $8 ELSE end_date END,
                duration = CASE WHEN $9 THEN $10 ELSE duration END,
                festival_type = COALESCE($11, festival_type),
                traditions = COALESCE($12, traditions),
                rituals = COALESCE($13, rituals),
                image_url = CASE WHEN $14 THEN $15 ELSE image_url END,
                is_annual = COALESCE($16, is_annual),
                status = COALESCE($17, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Festival>(&query)
            .bind(id)
            .bind(input.monastery_id)
            .bind(input.name.as_deref())
            .bind(input.description.as_deref())
            .bind(input.significance.as_deref())
            .bind(input.start_date)
            .bind(end_date_set)
            .bind(end_date)
            .bind(duration_set)
            .bind(duration)
            .bind(input.festival_type.as_deref())
            .bind(input.traditions.as_deref())
            .bind(input.rituals.as_deref())
            .bind(image_url_set)
            .bind(image_url)
            .bind(input.is_annual)
            .bind(input.status.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a festival by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM festivals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the list statement. Placeholders follow the bind order in
/// [`FestivalRepo::list`]: monastery_id, status.
fn list_query(filter: &FestivalFilter) -> String {
    let mut conditions = Conditions::new();
    if filter.monastery_id.is_some() {
        conditions.bound(|p| format!("monastery_id = {p}"));
    }
    if filter.status.is_some() {
        conditions.bound(|p| format!("status = {p}"));
    }
    if filter.upcoming {
        conditions.fixed("start_date > NOW()");
    }
    format!(
        "SELECT {COLUMNS} FROM festivals{} ORDER BY start_date ASC",
        conditions.where_clause()
    )
}
