//! Route definitions for session authentication.

use axum::routing::get;
use axum::Router;

use crate::config::AppEnvironment;
use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes, mounted directly under `/api`.
///
/// ```text
/// GET /auth/user   -> current_user
/// GET /login       -> login
/// GET /logout      -> logout
/// GET /dev-login   -> dev_login (development only)
/// ```
pub fn router(environment: AppEnvironment) -> Router<AppState> {
    let router = Router::new()
        .route("/auth/user", get(auth::current_user))
        .route("/login", get(auth::login))
        .route("/logout", get(auth::logout));

    if environment.is_development() {
        router.route("/dev-login", get(auth::dev_login))
    } else {
        router
    }
}
