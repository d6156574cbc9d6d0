//! Festival entity model, DTOs and list filter.

use monastery_core::festival::{
    validate_date_range, validate_festival_type, validate_status, FestivalStatus,
};
use monastery_core::types::{nullable, DbId, Timestamp};
use monastery_core::validation::{validate_not_blank, CheckedInput};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A festival row from the `festivals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Festival {
    pub id: DbId,
    pub monastery_id: DbId,
    pub name: String,
    pub description: String,
    pub significance: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    /// Free text such as "3 days".
    pub duration: Option<String>,
    pub festival_type: String,
    pub traditions: Vec<String>,
    pub rituals: Vec<String>,
    pub image_url: Option<String>,
    pub is_annual: bool,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a festival.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_dates"))]
pub struct CreateFestival {
    pub monastery_id: DbId,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub significance: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub duration: Option<String>,
    #[validate(custom(function = "validate_festival_type"))]
    pub festival_type: String,
    #[serde(default)]
    pub traditions: Vec<String>,
    #[serde(default)]
    pub rituals: Vec<String>,
    pub image_url: Option<String>,
    /// Defaults to `true` when omitted.
    pub is_annual: Option<bool>,
    /// Defaults to `upcoming` when omitted.
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

fn validate_create_dates(input: &CreateFestival) -> Result<(), ValidationError> {
    validate_date_range(input.start_date, input.end_date)
}

impl CheckedInput for CreateFestival {}

impl CreateFestival {
    /// Status to insert, falling back to the column default.
    pub fn status_or_default(&self) -> &str {
        self.status
            .as_deref()
            .unwrap_or(FestivalStatus::Upcoming.as_str())
    }
}

/// DTO for a partial update. Only supplied fields are changed; an explicit
/// `null` clears a nullable column.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_dates"))]
pub struct UpdateFestival {
    pub monastery_id: Option<DbId>,
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub significance: Option<String>,
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "nullable")]
    pub duration: Option<Option<String>>,
    #[validate(custom(function = "validate_festival_type"))]
    pub festival_type: Option<String>,
    pub traditions: Option<Vec<String>>,
    pub rituals: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    pub is_annual: Option<bool>,
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
}

// A lone start or end date is left to the table's CHECK constraint, since
// the stored counterpart is not known here.
fn validate_update_dates(input: &UpdateFestival) -> Result<(), ValidationError> {
    match input.start_date {
        Some(start) => validate_date_range(start, input.end_date.flatten()),
        None => Ok(()),
    }
}

impl CheckedInput for UpdateFestival {}

/// Optional predicates for listing festivals. Supplied keys are ANDed.
#[derive(Debug, Clone, Default)]
pub struct FestivalFilter {
    pub monastery_id: Option<DbId>,
    pub status: Option<FestivalStatus>,
    /// `true` keeps festivals that start in the future. `false` is no filter.
    pub upcoming: bool,
}
