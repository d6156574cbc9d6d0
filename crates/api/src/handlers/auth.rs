//! Handlers for session authentication (current user, login, logout,
//! development login).

use axum::extract::State;
use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use monastery_db::models::user::{UpsertUser, User};
use monastery_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::session;
use crate::session::cookies::{removal_cookie, session_cookie, set_cookie_value};
use crate::state::AppState;

/// Email of the account the development login signs in as.
pub const DEV_ADMIN_EMAIL: &str = "dev-admin@monastery360.local";

/// Where `/api/login` redirects in development.
pub const DEV_LOGIN_PATH: &str = "/api/dev-login";

/// GET /api/auth/user
pub async fn current_user(current: CurrentUser) -> AppResult<Json<User>> {
    Ok(Json(current.user))
}

/// GET /api/login
///
/// Development redirects to the dev login. There is no production identity
/// provider, so elsewhere this is an explicit 501.
pub async fn login(State(state): State<AppState>) -> AppResult<Response> {
    if state.config.environment.is_development() {
        return Ok(found(DEV_LOGIN_PATH, None));
    }
    Err(AppError::NotImplemented(
        "Login is not implemented for this environment".into(),
    ))
}

/// GET /api/dev-login
///
/// Signs in as the development admin. Any session presented with the
/// request is destroyed first and a fresh one is issued.
pub async fn dev_login(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    let session_config = &state.config.session;

    let user = UserRepo::upsert_by_email(
        &state.pool,
        &UpsertUser {
            email: DEV_ADMIN_EMAIL.to_string(),
            first_name: Some("Dev".to_string()),
            last_name: Some("Admin".to_string()),
            profile_image_url: None,
            is_admin: true,
        },
    )
    .await?;

    session::destroy(&state.pool, session_config, &headers).await?;
    let token = session::start(&state.pool, session_config, user.id).await?;

    tracing::warn!(user_id = %user.id, "Development login used");

    let cookie = set_cookie_value(&session_cookie(session_config, &token))?;
    Ok(found("/", Some(cookie)))
}

/// GET /api/logout
///
/// Destroys the session (if any), clears the cookie and redirects home.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    let session_config = &state.config.session;
    let destroyed = session::destroy(&state.pool, session_config, &headers).await?;
    tracing::debug!(destroyed, "Logout");

    let cookie = set_cookie_value(&removal_cookie(session_config))?;
    Ok(found("/", Some(cookie)))
}

/// 302 Found to `location`, optionally setting a cookie.
fn found(location: &'static str, cookie: Option<HeaderValue>) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(LOCATION, HeaderValue::from_static(location));
    if let Some(cookie) = cookie {
        headers.insert(SET_COOKIE, cookie);
    }
    (StatusCode::FOUND, headers).into_response()
}
