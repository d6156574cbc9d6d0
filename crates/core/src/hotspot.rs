//! Tour hotspot classification and position bounds.
//!
//! Positions are percentages of the panorama's width (`x`) and height (`y`).

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::validation::{rule_violation, validate_one_of};

pub const TYPE_ARTIFACT: &str = "artifact";
pub const TYPE_RITUAL: &str = "ritual";
pub const TYPE_ARCHITECTURE: &str = "architecture";
pub const TYPE_HISTORY: &str = "history";

pub const VALID_TYPES: &[&str] = &[TYPE_ARTIFACT, TYPE_RITUAL, TYPE_ARCHITECTURE, TYPE_HISTORY];

pub const POSITION_MIN: Decimal = Decimal::ZERO;
pub const POSITION_MAX: Decimal = Decimal::ONE_HUNDRED;

pub fn validate_hotspot_type(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, VALID_TYPES, "hotspot_type")
}

pub fn validate_position(value: &Decimal) -> Result<(), ValidationError> {
    if *value < POSITION_MIN || *value > POSITION_MAX {
        return Err(rule_violation(
            "position",
            format!("must be between {POSITION_MIN} and {POSITION_MAX}"),
        ));
    }
    Ok(())
}
