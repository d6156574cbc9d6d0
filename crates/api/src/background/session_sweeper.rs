//! Periodic purge of expired sessions.
//!
//! Expired rows are already invisible to session lookups; this keeps the
//! table from growing without bound.

use std::time::Duration;

use monastery_db::repositories::SessionRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

/// Run the sweep loop every `interval` until `cancel` is triggered.
pub async fn run(pool: PgPool, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Session sweeper started"
    );

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Session sweeper stopping");
                break;
            }
            _ = ticker.tick() => {
                if let Err(e) = sweep_once(&pool).await {
                    tracing::error!(error = %e, "Session sweeper: purge failed");
                }
            }
        }
    }
}

/// Delete every expired session once, returning how many rows went.
pub async fn sweep_once(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let deleted = SessionRepo::delete_expired(pool).await?;
    if deleted > 0 {
        tracing::info!(deleted, "Session sweeper: purged expired sessions");
    } else {
        tracing::debug!("Session sweeper: nothing to purge");
    }
    Ok(deleted)
}
