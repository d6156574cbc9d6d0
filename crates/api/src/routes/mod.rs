pub mod auth;
pub mod festival;
pub mod health;
pub mod hotspot;
pub mod media;
pub mod monastery;

use axum::Router;

use crate::config::AppEnvironment;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/user                                  current user (session)
/// /login                                      dev redirect or 501
/// /logout                                     destroy session
/// /dev-login                                  development only
///
/// /monasteries                                list, create
/// /monasteries/{id}                           get, update, delete
/// /monasteries/{monasteryId}/hotspots         active hotspots
///
/// /festivals                                  list, create
/// /festivals/{id}                             get, update, delete
///
/// /media                                      list, create
/// /media/{id}                                 get, update, delete
///
/// /hotspots                                   create
/// /hotspots/{id}                              get, update, delete
/// ```
///
/// Reads are public; every write requires an admin session.
pub fn api_routes(environment: AppEnvironment) -> Router<AppState> {
    Router::new()
        .merge(auth::router(environment))
        .nest("/monasteries", monastery::router())
        .nest("/festivals", festival::router())
        .nest("/media", media::router())
        .nest("/hotspots", hotspot::router())
}
