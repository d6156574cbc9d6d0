//! Media entity model, DTOs and list filter.

use monastery_core::error::FieldViolation;
use monastery_core::media::{validate_category, validate_file_size, validate_media_type};
use monastery_core::types::{nullable, DbId, Timestamp};
use monastery_core::validation::{check_nullable, validate_not_blank, CheckedInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// validator's derive passes `Copy` fields by value; adapt to the by-ref core validator.
fn file_size_by_value(value: i32) -> Result<(), validator::ValidationError> {
    validate_file_size(&value)
}

/// Rust field name → JSON name for the renamed `type` field.
const MEDIA_ALIASES: &[(&str, &str)] = &[("media_type", "type")];

/// A media row from the `media` table. Only the URL is stored; the asset
/// itself lives elsewhere.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: DbId,
    pub monastery_id: Option<DbId>,
    pub festival_id: Option<DbId>,
    #[serde(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub alt: Option<String>,
    pub category: Option<String>,
    pub is_main: bool,
    pub sort_order: i32,
    pub file_size: Option<i32>,
    pub mime_type: Option<String>,
    pub uploaded_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a media record.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedia {
    pub monastery_id: Option<DbId>,
    pub festival_id: Option<DbId>,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_media_type"))]
    pub media_type: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub alt: Option<String>,
    #[validate(custom(function = "validate_category"))]
    pub category: Option<String>,
    pub is_main: Option<bool>,
    pub sort_order: Option<i32>,
    #[validate(custom(function = "file_size_by_value"))]
    pub file_size: Option<i32>,
    pub mime_type: Option<String>,
    pub uploaded_by: Option<DbId>,
}

impl CheckedInput for CreateMedia {
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = MEDIA_ALIASES;
}

/// DTO for a partial update. Only supplied fields are changed; an explicit
/// `null` clears a nullable column.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMedia {
    #[serde(default, deserialize_with = "nullable")]
    pub monastery_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub festival_id: Option<Option<DbId>>,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_media_type"))]
    pub media_type: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub alt: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub category: Option<Option<String>>,
    pub is_main: Option<bool>,
    pub sort_order: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub file_size: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub mime_type: Option<Option<String>>,
}

impl CheckedInput for UpdateMedia {
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = MEDIA_ALIASES;

    fn extra_violations(&self) -> Vec<FieldViolation> {
        let mut out = Vec::new();
        check_nullable(
            &mut out,
            "category",
            self.category.as_ref().and_then(|c| c.as_deref()),
            validate_category,
        );
        check_nullable(&mut out, "fileSize", self.file_size.flatten().as_ref(), validate_file_size);
        out
    }
}

/// Optional predicates for listing media. Supplied keys are ANDed.
#[derive(Debug, Clone, Default)]
pub struct MediaFilter {
    pub monastery_id: Option<DbId>,
    pub festival_id: Option<DbId>,
    pub media_type: Option<String>,
    pub category: Option<String>,
}
