//! Route definitions for the `/hotspots` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::hotspot;
use crate::state::AppState;

/// Routes mounted at `/hotspots`.
///
/// ```text
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(hotspot::create)).route(
        "/{id}",
        get(hotspot::get_by_id)
            .put(hotspot::update)
            .delete(hotspot::delete),
    )
}
