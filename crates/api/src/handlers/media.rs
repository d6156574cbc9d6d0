//! Handlers for the `/media` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use monastery_core::error::CoreError;
use monastery_core::types::DbId;
use monastery_db::models::media::{CreateMedia, Media, MediaFilter, UpdateMedia};
use monastery_db::repositories::MediaRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{ListQuery, PathId, ValidJson};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

const ENTITY: &str = "Media";

/// Query parameters for `GET /media`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListParams {
    pub monastery_id: Option<DbId>,
    pub festival_id: Option<DbId>,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub category: Option<String>,
}

/// GET /api/media
pub async fn list(
    State(state): State<AppState>,
    ListQuery(params): ListQuery<MediaListParams>,
) -> AppResult<Json<Vec<Media>>> {
    let filter = MediaFilter {
        monastery_id: params.monastery_id,
        festival_id: params.festival_id,
        media_type: params.media_type,
        category: params.category,
    };
    let media = MediaRepo::list(&state.pool, &filter).await?;
    Ok(Json(media))
}

/// GET /api/media/{id}
pub async fn get_by_id(State(state): State<AppState>, path: PathId) -> AppResult<Json<Media>> {
    let id = path.require(ENTITY)?;
    let media = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    Ok(Json(media))
}

/// POST /api/media
///
/// `uploadedBy` defaults to the admin making the request.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    ValidJson(mut input): ValidJson<CreateMedia>,
) -> AppResult<(StatusCode, Json<Media>)> {
    input.uploaded_by = input.uploaded_by.or(Some(admin.user.id));
    let media = MediaRepo::create(&state.pool, &input).await?;
    tracing::info!(media_id = %media.id, user_id = %admin.user.id, "Media created");
    Ok((StatusCode::CREATED, Json(media)))
}

/// PUT /api/media/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    path: PathId,
    ValidJson(input): ValidJson<UpdateMedia>,
) -> AppResult<Json<Media>> {
    let id = path.require(ENTITY)?;
    let media = MediaRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;
    tracing::info!(media_id = %id, user_id = %admin.user.id, "Media updated");
    Ok(Json(media))
}

/// DELETE /api/media/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    PathId(id): PathId,
) -> AppResult<StatusCode> {
    if let Some(id) = id {
        let deleted = MediaRepo::delete(&state.pool, id).await?;
        tracing::info!(media_id = %id, user_id = %admin.user.id, deleted, "Media delete");
    }
    Ok(StatusCode::NO_CONTENT)
}
