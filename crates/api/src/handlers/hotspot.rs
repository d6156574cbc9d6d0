//! Handlers for the `/hotspots` resource.
//!
//! Listing lives under `/monasteries/{monasteryId}/hotspots`; see
//! [`crate::handlers::monastery::list_hotspots`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use monastery_core::error::CoreError;
use monastery_db::models::hotspot::{CreateTourHotspot, TourHotspot, UpdateTourHotspot};
use monastery_db::repositories::TourHotspotRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PathId, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "Hotspot";

/// GET /api/hotspots/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: PathId,
) -> AppResult<Json<TourHotspot>> {
    let id = path.require(ENTITY)?;
    let hotspot = TourHotspotRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(hotspot))
}

/// POST /api/hotspots
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<CreateTourHotspot>,
) -> AppResult<(StatusCode, Json<TourHotspot>)> {
    let hotspot = TourHotspotRepo::create(&state.pool, &input).await?;
    tracing::info!(hotspot_id = %hotspot.id, user_id = %admin.user.id, "Hotspot created");
    Ok((StatusCode::CREATED, Json(hotspot)))
}

/// PUT /api/hotspots/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    path: PathId,
    ValidJson(input): ValidJson<UpdateTourHotspot>,
) -> AppResult<Json<TourHotspot>> {
    let id = path.require(ENTITY)?;
    let hotspot = TourHotspotRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(hotspot_id = %id, user_id = %admin.user.id, "Hotspot updated");
    Ok(Json(hotspot))
}

/// DELETE /api/hotspots/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    PathId(id): PathId,
) -> AppResult<StatusCode> {
    if let Some(id) = id {
        let deleted = TourHotspotRepo::delete(&state.pool, id).await?;
        tracing::info!(hotspot_id = %id, user_id = %admin.user.id, deleted, "Hotspot delete");
    }
    Ok(StatusCode::NO_CONTENT)
}
