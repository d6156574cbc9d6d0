//! Repository for the `users` table.

use monastery_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{UpsertUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, first_name, last_name, profile_image_url, is_admin, \
                        created_at, updated_at";

/// Provides lookups and the email-keyed upsert for users.
pub struct UserRepo;

impl UserRepo {
    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert a user, or refresh the existing row with the same email.
    pub async fn upsert_by_email(pool: &PgPool, input: &UpsertUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, first_name, last_name, profile_image_url, is_admin)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (email) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                profile_image_url = EXCLUDED.profile_image_url,
                is_admin = EXCLUDED.is_admin,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(input.first_name.as_deref())
            .bind(input.last_name.as_deref())
            .bind(input.profile_image_url.as_deref())
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }
}
