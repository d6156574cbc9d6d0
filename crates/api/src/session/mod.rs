//! Server-side sessions keyed by an opaque cookie token.
//!
//! The cookie carries a random UUIDv4 token; only its SHA-256 hex digest is
//! stored, as `sessions.sid`.

pub mod cookies;

use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use monastery_core::types::DbId;
use monastery_db::models::session::{CreateSession, Session, SessionData};
use monastery_db::repositories::SessionRepo;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::SessionConfig;

/// Minimum gap between two expiry extensions of the same session.
pub const TOUCH_INTERVAL_HOURS: i64 = 1;

/// Generate a new session token.
///
/// Returns `(plaintext_token, sha256_hex_hash)`. The plaintext goes into
/// the cookie; only the hash is persisted.
pub fn generate_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Create a session bound to `user_id` and return the cookie token.
pub async fn start(
    pool: &PgPool,
    config: &SessionConfig,
    user_id: DbId,
) -> Result<String, sqlx::Error> {
    let (token, sid) = generate_token();
    SessionRepo::create(
        pool,
        &CreateSession {
            sid,
            data: SessionData {
                user_id: Some(user_id),
            },
            expire: Utc::now() + Duration::days(config.ttl_days),
        },
    )
    .await?;
    Ok(token)
}

/// Resolve the unexpired session named by the request's cookie.
///
/// Extends the expiry to a full TTL when it has not been extended in the
/// last [`TOUCH_INTERVAL_HOURS`].
pub async fn load(
    pool: &PgPool,
    config: &SessionConfig,
    headers: &HeaderMap,
) -> Result<Option<Session>, sqlx::Error> {
    let Some(token) = cookies::token_from_headers(headers, &config.cookie_name) else {
        return Ok(None);
    };
    let sid = hash_token(&token);
    let Some(mut session) = SessionRepo::find_active(pool, &sid).await? else {
        return Ok(None);
    };

    let now = Utc::now();
    let full_expiry = now + Duration::days(config.ttl_days);
    if full_expiry - session.expire >= Duration::hours(TOUCH_INTERVAL_HOURS) {
        SessionRepo::touch(pool, &sid, full_expiry).await?;
        session.expire = full_expiry;
    }
    Ok(Some(session))
}

/// Delete the session named by the request's cookie, if any.
///
/// Returns `true` if a row was removed.
pub async fn destroy(
    pool: &PgPool,
    config: &SessionConfig,
    headers: &HeaderMap,
) -> Result<bool, sqlx::Error> {
    match cookies::token_from_headers(headers, &config.cookie_name) {
        Some(token) => SessionRepo::delete(pool, &hash_token(&token)).await,
        None => Ok(false),
    }
}
