//! Handlers for the `/monasteries` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use monastery_core::error::CoreError;
use monastery_db::models::hotspot::TourHotspot;
use monastery_db::models::monastery::{
    CreateMonastery, Monastery, MonasteryFilter, UpdateMonastery,
};
use monastery_db::repositories::{MonasteryRepo, TourHotspotRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ListQuery, PathId, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "Monastery";

/// Query parameters for `GET /monasteries`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonasteryListParams {
    pub district: Option<String>,
    pub has_virtual_tour: Option<bool>,
    /// Defaults to `true`: the public list hides deactivated monasteries.
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

impl From<MonasteryListParams> for MonasteryFilter {
    fn from(params: MonasteryListParams) -> Self {
        MonasteryFilter {
            district: params.district,
            has_virtual_tour: params.has_virtual_tour,
            is_active: Some(params.is_active.unwrap_or(true)),
            search: params.search,
        }
    }
}

/// GET /api/monasteries
pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery<MonasteryListParams>,
) -> AppResult<Json<Vec<Monastery>>> {
    let monasteries = MonasteryRepo::list(&state.pool, &params.into()).await?;
    Ok(Json(monasteries))
}

/// GET /api/monasteries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: PathId,
) -> AppResult<Json<Monastery>> {
    let id = path.require(ENTITY)?;
    let monastery = MonasteryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(monastery))
}

/// POST /api/monasteries
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<CreateMonastery>,
) -> AppResult<(StatusCode, Json<Monastery>)> {
    let monastery = MonasteryRepo::create(&state.pool, &input).await?;
    tracing::info!(monastery_id = %monastery.id, user_id = %admin.user.id, "Monastery created");
    Ok((StatusCode::CREATED, Json(monastery)))
}

/// PUT /api/monasteries/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    path: PathId,
    ValidJson(input): ValidJson<UpdateMonastery>,
) -> AppResult<Json<Monastery>> {
    let id = path.require(ENTITY)?;
    let monastery = MonasteryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(monastery_id = %id, user_id = %admin.user.id, "Monastery updated");
    Ok(Json(monastery))
}

/// DELETE /api/monasteries/{id}
///
/// Succeeds whether or not the monastery existed.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    PathId(id): PathId,
) -> AppResult<StatusCode> {
    if let Some(id) = id {
        let deleted = MonasteryRepo::delete(&state.pool, id).await?;
        tracing::info!(monastery_id = %id, user_id = %admin.user.id, deleted, "Monastery delete");
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/monasteries/{monasteryId}/hotspots
///
/// Active hotspots only, ordered left to right. An unknown monastery yields
/// an empty list.
pub async fn list_hotspots(
    State(state): State<AppState>,
    PathId(monastery_id): PathId,
) -> AppResult<Json<Vec<TourHotspot>>> {
    let hotspots = match monastery_id {
        Some(id) => TourHotspotRepo::list_active_for_monastery(&state.pool, id).await?,
        None => Vec::new(),
    };
    Ok(Json(hotspots))
}
