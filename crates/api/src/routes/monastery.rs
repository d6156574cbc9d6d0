//! Route definitions for the `/monasteries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::monastery;
use crate::state::AppState;

/// Routes mounted at `/monasteries`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/hotspots           -> list_hotspots
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(monastery::list).post(monastery::create))
        .route(
            "/{id}",
            get(monastery::get_by_id)
                .put(monastery::update)
                .delete(monastery::delete),
        )
        .route("/{id}/hotspots", get(monastery::list_hotspots))
}
