//! Handlers for the `/festivals` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use monastery_core::error::CoreError;
use monastery_core::festival::FestivalStatus;
use monastery_core::types::DbId;
use monastery_db::models::festival::{CreateFestival, Festival, FestivalFilter, UpdateFestival};
use monastery_db::repositories::FestivalRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ListQuery, PathId, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "Festival";

/// Query parameters for `GET /festivals`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FestivalListParams {
    pub monastery_id: Option<DbId>,
    pub status: Option<String>,
    pub upcoming: Option<bool>,
}

impl TryFrom<FestivalListParams> for FestivalFilter {
    type Error = CoreError;

    fn try_from(params: FestivalListParams) -> Result<Self, Self::Error> {
        let status = params
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<FestivalStatus>)
            .transpose()?;
        Ok(FestivalFilter {
            monastery_id: params.monastery_id,
            status,
            upcoming: params.upcoming.unwrap_or(false),
        })
    }
}

/// GET /api/festivals
pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery<FestivalListParams>,
) -> AppResult<Json<Vec<Festival>>> {
    let filter = FestivalFilter::try_from(params)?;
    let festivals = FestivalRepo::list(&state.pool, &filter).await?;
    Ok(Json(festivals))
}

/// GET /api/festivals/{id}
pub async fn get_by_id(State(state): State<AppState>, path: PathId) -> AppResult<Json<Festival>> {
    let id = path.require(ENTITY)?;
    let festival = FestivalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(festival))
}

/// POST /api/festivals
///
/// An unknown `monasteryId` surfaces as 400 `REFERENCE_NOT_FOUND`.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(input): ValidJson<CreateFestival>,
) -> AppResult<(StatusCode, Json<Festival>)> {
    let festival = FestivalRepo::create(&state.pool, &input).await?;
    tracing::info!(
        festival_id = %festival.id,
        monastery_id = %festival.monastery_id,
        user_id = %admin.user.id,
        "Festival created"
    );
    Ok((StatusCode::CREATED, Json(festival)))
}

/// PUT /api/festivals/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    path: PathId,
    ValidJson(input): ValidJson<UpdateFestival>,
) -> AppResult<Json<Festival>> {
    let id = path.require(ENTITY)?;
    let festival = FestivalRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(festival_id = %id, user_id = %admin.user.id, "Festival updated");
    Ok(Json(festival))
}

/// DELETE /api/festivals/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    PathId(id): PathId,
) -> AppResult<StatusCode> {
    if let Some(id) = id {
        let deleted = FestivalRepo::delete(&state.pool, id).await?;
        tracing::info!(festival_id = %id, user_id = %admin.user.id, deleted, "Festival delete");
    }
    Ok(StatusCode::NO_CONTENT)
}
