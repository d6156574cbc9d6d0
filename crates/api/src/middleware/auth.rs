//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use monastery_core::error::CoreError;
use monastery_db::models::session::Session;
use monastery_db::models::user::User;
use monastery_db::repositories::UserRepo;

use crate::error::AppError;
use crate::session;
use crate::state::AppState;

/// The user behind the request's session cookie.
///
/// Rejects with 401 when there is no cookie, the session is unknown or
/// expired, the session carries no user, or the user row is gone.
///
/// ```ignore
/// async fn my_handler(current: CurrentUser) -> AppResult<Json<User>> {
///     Ok(Json(current.user))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
    pub session: Session,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let unauthorized = || AppError::Core(CoreError::Unauthorized("Unauthorized".into()));

        let session = session::load(&state.pool, &state.config.session, &parts.headers)
            .await?
            .ok_or_else(unauthorized)?;

        let user_id = session.sess.user_id.ok_or_else(unauthorized)?;
        let user = UserRepo::find_by_id(&state.pool, user_id)
            .await?
            .ok_or_else(|| {
                tracing::debug!(%user_id, "Session refers to a missing user");
                unauthorized()
            })?;

        Ok(CurrentUser { user, session })
    }
}
