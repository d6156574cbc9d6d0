//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections.
//!
//! - [`ValidJson`] -- deserializes a JSON body and runs [`CheckedInput::check`].
//! - [`ListQuery`] -- deserializes query parameters.
//! - [`PathId`] -- parses the `{id}` path segment, tolerating malformed ids.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use monastery_core::error::{CoreError, FieldViolation};
use monastery_core::types::DbId;
use monastery_core::validation::CheckedInput;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A JSON body that deserialized cleanly and passed every field rule.
///
/// Malformed JSON and type mismatches are reported with the same 400
/// "Invalid data" envelope as rule violations.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + CheckedInput,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;
        value.check()?;
        Ok(ValidJson(value))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::Core(CoreError::InvalidInput(vec![FieldViolation::body(
        rejection.body_text(),
    )]))
}

/// Query parameters for list endpoints. Unparseable values are a 400.
pub struct ListQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ListQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: QueryRejection| AppError::BadRequest(e.body_text()))?;
        Ok(ListQuery(value))
    }
}

/// The `{id}` path segment. `None` when it is not a valid UUID, which
/// handlers treat exactly like an id with no row behind it.
pub struct PathId(pub Option<DbId>);

impl PathId {
    /// The parsed id, or a 404 naming `entity`.
    pub fn require(&self, entity: &'static str) -> Result<DbId, AppError> {
        self.0
            .ok_or_else(|| AppError::NotFound(format!("{entity} not found")))
    }
}

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(PathId(raw.parse().ok()))
    }
}
