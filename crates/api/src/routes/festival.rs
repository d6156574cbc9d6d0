//! Route definitions for the `/festivals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::festival;
use crate::state::AppState;

/// Routes mounted at `/festivals`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(festival::list).post(festival::create))
        .route(
            "/{id}",
            get(festival::get_by_id).put(festival::update).delete(festival::delete),
        )
}
