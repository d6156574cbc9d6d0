//! Repository for the `sessions` table.

use monastery_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "sid, sess, expire";

/// Provides storage for server-side sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (sid, sess, expire)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(&input.sid)
            .bind(Json(&input.data))
            .bind(input.expire)
            .fetch_one(pool)
            .await
    }

    /// Find an unexpired session by its sid.
    pub async fn find_active(pool: &PgPool, sid: &str) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE sid = $1 AND expire > NOW()");
        sqlx::query_as::<_, Session>(&query)
            .bind(sid)
            .fetch_optional(pool)
            .await
    }

    /// Push a session's expiry out to `expire`. Returns `true` if the row
    /// was updated.
    pub async fn touch(pool: &PgPool, sid: &str, expire: Timestamp) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE sessions SET expire = $2 WHERE sid = $1")
            .bind(sid)
            .bind(expire)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a session. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, sid: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE sid = $1")
            .bind(sid)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every expired session. Returns the count of deleted rows.
    pub async fn delete_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expire <= NOW()")
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
