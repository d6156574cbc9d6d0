//! Create or refresh the back-office admin account.
//!
//! Upserts the user with email `ADMIN_EMAIL` (default
//! `admin@monastery360.com`) and marks it as admin. Safe to run repeatedly.

use anyhow::Context;
use monastery_db::models::user::UpsertUser;
use monastery_db::repositories::UserRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_ADMIN_EMAIL: &str = "admin@monastery360.com";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "monastery_seed_admin=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let email = std::env::var("ADMIN_EMAIL")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string());

    let pool = monastery_db::create_pool(&database_url, 1)
        .await
        .context("Failed to connect to database")?;
    monastery_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let user = UserRepo::upsert_by_email(
        &pool,
        &UpsertUser {
            email: email.clone(),
            first_name: Some("Admin".to_string()),
            last_name: Some("User".to_string()),
            profile_image_url: None,
            is_admin: true,
        },
    )
    .await
    .context("Failed to upsert admin user")?;

    tracing::info!(user_id = %user.id, %email, "Admin user ready");
    Ok(())
}
