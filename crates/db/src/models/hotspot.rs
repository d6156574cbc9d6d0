//! Tour hotspot model and DTOs.

use monastery_core::hotspot::{validate_hotspot_type, validate_position};
use monastery_core::types::{nullable, DbId, Timestamp};
use monastery_core::validation::{validate_not_blank, CheckedInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

const HOTSPOT_ALIASES: &[(&str, &str)] = &[("hotspot_type", "type")];

/// A row from the `tour_hotspots` table. Positions are percentages of the
/// panorama's width and height, stored with two decimal places.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourHotspot {
    pub id: DbId,
    pub monastery_id: DbId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub hotspot_type: String,
    pub x_position: Decimal,
    pub y_position: Decimal,
    pub linked_media_id: Option<DbId>,
    pub audio_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a hotspot.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTourHotspot {
    pub monastery_id: DbId,
    #[validate(custom(function = "validate_not_blank"))]
    pub title: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_hotspot_type"))]
    pub hotspot_type: String,
    #[validate(custom(function = "validate_position"))]
    pub x_position: Decimal,
    #[validate(custom(function = "validate_position"))]
    pub y_position: Decimal,
    pub linked_media_id: Option<DbId>,
    pub audio_url: Option<String>,
    pub is_active: Option<bool>,
}

impl CheckedInput for CreateTourHotspot {
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = HOTSPOT_ALIASES;
}

/// DTO for a partial update. Only supplied fields are changed; an explicit
/// `null` unlinks the media or drops the audio track.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTourHotspot {
    pub monastery_id: Option<DbId>,
    #[validate(custom(function = "validate_not_blank"))]
    pub title: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub description: Option<String>,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_hotspot_type"))]
    pub hotspot_type: Option<String>,
    #[validate(custom(function = "validate_position"))]
    pub x_position: Option<Decimal>,
    #[validate(custom(function = "validate_position"))]
    pub y_position: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub linked_media_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "nullable")]
    pub audio_url: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl CheckedInput for UpdateTourHotspot {
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = HOTSPOT_ALIASES;
}
