//! Monastery entity model, DTOs and list filter.

use monastery_core::error::FieldViolation;
use monastery_core::monastery::{
    validate_altitude, validate_district, validate_entry_fee, validate_founded_year,
    validate_latitude, validate_longitude,
};
use monastery_core::types::{nullable, DbId, Timestamp};
use monastery_core::validation::{check_nullable, validate_not_blank, CheckedInput};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// validator's derive passes `Copy` fields by value; adapt to the by-ref core validators.
fn founded_year_by_value(value: i32) -> Result<(), validator::ValidationError> {
    validate_founded_year(&value)
}

fn altitude_by_value(value: i32) -> Result<(), validator::ValidationError> {
    validate_altitude(&value)
}

/// A monastery row from the `monasteries` table.
///
/// A non-null `panoramic_url` means the monastery has a virtual tour.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Monastery {
    pub id: DbId,
    pub name: String,
    pub location: String,
    pub district: String,
    pub founded_year: i32,
    pub history: String,
    pub rituals: Vec<String>,
    pub architecture: Option<String>,
    pub latitude: Option<Decimal>,
    pub longitude: Option<Decimal>,
    /// Metres above sea level.
    pub altitude: Option<i32>,
    pub main_image: Option<String>,
    pub image_gallery: Vec<String>,
    pub panoramic_url: Option<String>,
    pub significance: Option<String>,
    pub visiting_hours: Option<String>,
    pub entry_fee: Decimal,
    pub accessibility: Option<String>,
    pub nearby_attractions: Vec<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a monastery.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMonastery {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(custom(function = "validate_not_blank"))]
    pub location: String,
    #[validate(custom(function = "validate_district"))]
    pub district: String,
    #[validate(custom(function = "founded_year_by_value"))]
    pub founded_year: i32,
    #[validate(custom(function = "validate_not_blank"))]
    pub history: String,
    #[serde(default)]
    pub rituals: Vec<String>,
    pub architecture: Option<String>,
    #[validate(custom(function = "validate_latitude"))]
    pub latitude: Option<Decimal>,
    #[validate(custom(function = "validate_longitude"))]
    pub longitude: Option<Decimal>,
    #[validate(custom(function = "altitude_by_value"))]
    pub altitude: Option<i32>,
    pub main_image: Option<String>,
    #[serde(default)]
    pub image_gallery: Vec<String>,
    pub panoramic_url: Option<String>,
    pub significance: Option<String>,
    pub visiting_hours: Option<String>,
    /// Defaults to 0 when omitted.
    #[validate(custom(function = "validate_entry_fee"))]
    pub entry_fee: Option<Decimal>,
    pub accessibility: Option<String>,
    #[serde(default)]
    pub nearby_attractions: Vec<String>,
    /// Defaults to `true` when omitted.
    pub is_active: Option<bool>,
}

impl CheckedInput for CreateMonastery {}

/// DTO for a partial update. Only supplied fields are changed.
///
/// Nullable columns are `Option<Option<_>>`: an explicit `null` clears the
/// stored value, an absent key keeps it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMonastery {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_not_blank"))]
    pub location: Option<String>,
    #[validate(custom(function = "validate_district"))]
    pub district: Option<String>,
    #[validate(custom(function = "founded_year_by_value"))]
    pub founded_year: Option<i32>,
    #[validate(custom(function = "validate_not_blank"))]
    pub history: Option<String>,
    pub rituals: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub architecture: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub latitude: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "nullable")]
    pub longitude: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "nullable")]
    pub altitude: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub main_image: Option<Option<String>>,
    pub image_gallery: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub panoramic_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub significance: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub visiting_hours: Option<Option<String>>,
    #[validate(custom(function = "validate_entry_fee"))]
    pub entry_fee: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub accessibility: Option<Option<String>>,
    pub nearby_attractions: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl CheckedInput for UpdateMonastery {
    fn extra_violations(&self) -> Vec<FieldViolation> {
        let mut out = Vec::new();
        check_nullable(&mut out, "latitude", self.latitude.flatten().as_ref(), validate_latitude);
        check_nullable(&mut out, "longitude", self.longitude.flatten().as_ref(), validate_longitude);
        check_nullable(&mut out, "altitude", self.altitude.flatten().as_ref(), validate_altitude);
        out
    }
}

/// Optional predicates for listing monasteries. Supplied keys are ANDed.
#[derive(Debug, Clone, Default)]
pub struct MonasteryFilter {
    pub district: Option<String>,
    /// `Some(true)` keeps rows with a panoramic URL, `Some(false)` rows without.
    pub has_virtual_tour: Option<bool>,
    pub is_active: Option<bool>,
    /// Case-insensitive substring over name, location and history.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use monastery_core::error::CoreError;

    fn valid() -> CreateMonastery {
        serde_json::from_value(serde_json::json!({
            "name": "Rumtek Monastery",
            "location": "Rumtek, near Gangtok",
            "district": "East Sikkim",
            "foundedYear": 1966,
            "history": "Seat of the Karmapa in exile.",
            "rituals": ["Cham dance", "Losar prayers"],
            "latitude": "27.28820000",
            "entryFee": 10
        }))
        .unwrap()
    }

    #[test]
    fn create_defaults_and_camel_case_fields() {
        let input = valid();
        assert_eq!(input.founded_year, 1966);
        assert_eq!(input.rituals, vec!["Cham dance", "Losar prayers"]);
        assert!(input.image_gallery.is_empty());
        assert!(input.is_active.is_none());
        assert!(input.check().is_ok());
    }

    #[test]
    fn create_reports_every_bad_field() {
        let mut input = valid();
        input.name = "  ".into();
        input.district = "Darjeeling".into();
        input.entry_fee = Some(Decimal::from(-5));

        let err = input.check().unwrap_err();
        let CoreError::InvalidInput(violations) = err else {
            panic!("expected InvalidInput");
        };
        let fields: Vec<_> = violations.iter().filter_map(|v| v.field.as_deref()).collect();
        assert_eq!(fields, vec!["district", "entryFee", "name"]);
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateMonastery::default().check().is_ok());
    }

    #[test]
    fn update_checks_supplied_fields_only() {
        let input = UpdateMonastery {
            founded_year: Some(0),
            ..Default::default()
        };
        assert_matches!(input.check(), Err(CoreError::InvalidInput(v)) if v[0].field.as_deref() == Some("foundedYear"));
    }

    #[test]
    fn update_distinguishes_null_from_absent() {
        let input: UpdateMonastery = serde_json::from_value(serde_json::json!({
            "panoramicUrl": null,
            "latitude": "27.5"
        }))
        .unwrap();
        assert_eq!(input.panoramic_url, Some(None));
        assert_eq!(input.latitude, Some(Some(Decimal::new(275, 1))));
        assert_eq!(input.architecture, None);
        assert!(input.check().is_ok());
    }

    #[test]
    fn nullable_fields_are_still_range_checked() {
        let input: UpdateMonastery = serde_json::from_value(serde_json::json!({
            "latitude": "95",
            "altitude": -10,
            "longitude": null
        }))
        .unwrap();
        let CoreError::InvalidInput(violations) = input.check().unwrap_err() else {
            panic!("expected InvalidInput");
        };
        let fields: Vec<_> = violations.iter().filter_map(|v| v.field.as_deref()).collect();
        assert_eq!(fields, vec!["altitude", "latitude"]);
    }

    #[test]
    fn entry_fee_beyond_column_precision_is_rejected() {
        let mut input = valid();
        input.entry_fee = Some(Decimal::from(1_000_000_000));
        let CoreError::InvalidInput(violations) = input.check().unwrap_err() else {
            panic!("expected InvalidInput");
        };
        assert_eq!(violations[0].field.as_deref(), Some("entryFee"));
    }
}
