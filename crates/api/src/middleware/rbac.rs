//! Admin gate for write endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use monastery_core::error::CoreError;

use super::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Message for every admin-gate rejection, whatever the cause.
pub const ADMIN_REQUIRED: &str = "Admin access required";

/// Requires a signed-in admin. Rejects with 403 Forbidden otherwise.
///
/// A missing session, a vanished user and a non-admin user all produce the
/// same response. Database failures still surface as 500.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     // admin.user.is_admin is guaranteed here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let forbidden = || AppError::Core(CoreError::Forbidden(ADMIN_REQUIRED.into()));

        let current = match CurrentUser::from_request_parts(parts, state).await {
            Ok(current) => current,
            Err(AppError::Core(CoreError::Unauthorized(_))) => return Err(forbidden()),
            Err(other) => return Err(other),
        };
        if !current.user.is_admin {
            tracing::warn!(user_id = %current.user.id, "Non-admin attempted a write");
            return Err(forbidden());
        }
        Ok(RequireAdmin(current))
    }
}
