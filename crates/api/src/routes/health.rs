use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness payload for load balancers and operators.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// `ok` when the content store answers, `unavailable` otherwise.
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// `development` or `production`, from `APP_ENV`.
    pub environment: String,
    /// Whether `/api/auth/dev-login` is mounted.
    pub dev_login: bool,
    pub database: &'static str,
}

/// GET /health -- 200 while PostgreSQL is reachable, 503 once it is not.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_up = match monastery_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            false
        }
    };
    let environment = state.config.environment;

    let (code, status, database) = if db_up {
        (StatusCode::OK, "ok", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable", "down")
    };

    let body = HealthResponse {
        status,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        environment: environment.to_string(),
        dev_login: environment.is_development(),
        database,
    };
    (code, Json(body))
}

/// Mount at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
