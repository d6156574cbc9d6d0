//! Server-side session model.

use monastery_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Payload serialized into `sessions.sess`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    #[serde(default)]
    pub user_id: Option<DbId>,
}

/// A row from the `sessions` table. `sid` is the digest of the cookie token.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub sid: String,
    pub sess: Json<SessionData>,
    pub expire: Timestamp,
}

/// DTO for creating a session.
pub struct CreateSession {
    pub sid: String,
    pub data: SessionData,
    pub expire: Timestamp,
}
