//! Repository for the `monasteries` table.

use monastery_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::filter::{contains_pattern, non_blank, Conditions};
use crate::models::monastery::{CreateMonastery, Monastery, MonasteryFilter, UpdateMonastery};
use crate::patch::nullable;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, name, location, district, founded_year, history, rituals, \
    architecture, latitude, longitude, altitude, main_image, image_gallery, \
    panoramic_url, significance, visiting_hours, entry_fee, accessibility, \
    nearby_attractions, is_active, created_at, updated_at";

/// Provides CRUD operations for monasteries.
pub struct MonasteryRepo;

impl MonasteryRepo {
    /// List monasteries matching every supplied filter key, ordered by name.
    pub async fn list(
        pool: &PgPool,
        filter: &MonasteryFilter,
    ) -> Result<Vec<Monastery>, sqlx::Error> {
        let district = non_blank(&filter.district);
        let search = non_blank(&filter.search).map(|s| contains_pattern(&s));

        let query = list_query(
            district.is_some(),
            filter.has_virtual_tour,
            filter.is_active.is_some(),
            search.is_some(),
        );
        let mut q = sqlx::query_as::<_, Monastery>(&query);

        // Bind in the order the conditions were pushed.
        if let Some(district) = district {
            q = q.bind(district);
        }
        if let Some(is_active) = filter.is_active {
            q = q.bind(is_active);
        }
        if let Some(pattern) = search {
            q = q.bind(pattern);
        }
        q.fetch_all(pool).await
    }

    /// Find a monastery by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Monastery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM monasteries WHERE id = $1");
        sqlx::query_as::<_, Monastery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new monastery, returning the created row.
    ///
    /// `entry_fee` defaults to 0 and `is_active` to true when omitted.
    pub async fn create(pool: &PgPool, input: &CreateMonastery) -> Result<Monastery, sqlx::Error> {
        let query = format!(
            "INSERT INTO monasteries (
                name, location, district, founded_year, history, rituals,
                architecture, latitude, longitude, altitude, main_image, image_gallery,
                panoramic_url, significance, visiting_hours, entry_fee, accessibility,
                nearby_attractions, is_active
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Monastery>(&query)
            .bind(&input.name)
            .bind(&input.location)
            .bind(&input.district)
            .bind(input.founded_year)
            .bind(&input.history)
            .bind(&input.rituals)
            .bind(input.architecture.as_deref())
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.altitude)
            .bind(input.main_image.as_deref())
            .bind(&input.image_gallery)
            .bind(input.panoramic_url.as_deref())
            .bind(input.significance.as_deref())
            .bind(input.visiting_hours.as_deref())
            .bind(input.entry_fee.unwrap_or(Decimal::ZERO))
            .bind(input.accessibility.as_deref())
            .bind(&input.nearby_attractions)
            .bind(input.is_active.unwrap_or(true))
            .fetch_one(pool)
            .await
    }

    /// Update a monastery. Only supplied fields in `input` are applied;
    /// an explicit `null` clears a nullable column.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMonastery,
    ) -> Result<Option<Monastery>, sqlx::Error> {
        let (architecture_set, architecture) = nullable(&input.architecture);
        let (latitude_set, latitude) = nullable(&input.latitude);
        let (longitude_set, longitude) = nullable(&input.longitude);
        let (altitude_set, altitude) = nullable(&input.altitude);
        let (main_image_set, main_image) = nullable(&input.main_image);
        let (panoramic_url_set, panoramic_url) = nullable(&input.panoramic_url);
        let (significance_set, significance) = nullable(&input.significance);
        let (visiting_hours_set, visiting_hours) = nullable(&input.visiting_hours);
        let (accessibility_set, accessibility) = nullable(&input.accessibility);

        let query = format!(
            "UPDATE monasteries SET
                name = COALESCE($2, name),
                location = COALESCE($3, location),
                district = COALESCE($4, district),
                founded_year = COALESCE($5, founded_year),
                history = COALESCE($6, history),
                rituals = COALESCE($7, rituals),
                architecture = CASE WHEN $8 THEN $9 ELSE architecture END,
                latitude = CASE WHEN $10 THEN $11 ELSE latitude END,
                longitude = CASE WHEN $12 THEN $13 ELSE longitude END,
                altitude = CASE WHEN $14 THEN $15 ELSE altitude END,
                main_image = CASE WHEN $16 THEN $17 ELSE main_image END,
                image_gallery = COALESCE($18, image_gallery),
                panoramic_url = CASE WHEN $19 THEN $20 ELSE panoramic_url END,
                significance = CASE WHEN $21 THEN $22 ELSE significance END,
                visiting_hours = CASE WHEN $23 THEN $24 ELSE visiting_hours END,
                entry_fee = COALESCE($25, entry_fee),
                accessibility = CASE WHEN $26 THEN $27 ELSE accessibility END,
                nearby_attractions = COALESCE($28, nearby_attractions),
                is_active = COALESCE($29, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Monastery>(&query)
            .bind(id)
            .bind(input.name.as_deref())
            .bind(input.location.as_deref())
            .bind(input.district.as_deref())
            .bind(input.founded_year)
            .bind(input.history.as_deref())
            .bind(input.rituals.as_deref())
            .bind(architecture_set)
            .bind(architecture)
            .bind(latitude_set)
            .bind(latitude)
            .bind(longitude_set)
            .bind(longitude)
            .bind(altitude_set)
            .bind(altitude)
            .bind(main_image_set)
            .bind(main_image)
            .bind(input.image_gallery.as_deref())
            .bind(panoramic_url_set)
            .bind(panoramic_url)
            .bind(significance_set)
            .bind(significance)
            .bind(visiting_hours_set)
            .bind(visiting_hours)
            .bind(input.entry_fee)
            .bind(accessibility_set)
            .bind(accessibility)
            .bind(input.nearby_attractions.as_deref())
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a monastery by ID. Returns `true` if a row was removed.
    ///
    /// Festivals and hotspots go with it; media keep their row with the
    /// reference cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM monasteries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Build the list statement. Placeholders follow the bind order in
/// [`MonasteryRepo::list`]: district, is_active, search.
fn list_query(district: bool, has_virtual_tour: Option<bool>, is_active: bool, search: bool) -> String {
    let mut conditions = Conditions::new();
    if district {
        conditions.bound(|p| format!("district = {p}"));
    }
    match has_virtual_tour {
        Some(true) => conditions.fixed("panoramic_url IS NOT NULL"),
        Some(false) => conditions.fixed("panoramic_url IS NULL"),
        None => {}
    }
    if is_active {
        conditions.bound(|p| format!("is_active = {p}"));
    }
    if search {
        conditions.bound(|p| {
            format!(
                "(name ILIKE {p} ESCAPE '\\' OR location ILIKE {p} ESCAPE '\\' \
                 OR history ILIKE {p} ESCAPE '\\')"
            )
        });
    }
    format!(
        "SELECT {COLUMNS} FROM monasteries{} ORDER BY name ASC",
        conditions.where_clause()
    )
}
