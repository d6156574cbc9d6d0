//! User entity model and DTOs.

use monastery_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: DbId,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting or refreshing a user keyed by email.
#[derive(Debug, Clone)]
pub struct UpsertUser {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub is_admin: bool,
}
