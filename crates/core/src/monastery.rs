//! Monastery field rules.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::validation::{rule_violation, validate_non_negative, validate_one_of};

pub const DISTRICT_EAST: &str = "East Sikkim";
pub const DISTRICT_WEST: &str = "West Sikkim";
pub const DISTRICT_NORTH: &str = "North Sikkim";
pub const DISTRICT_SOUTH: &str = "South Sikkim";

/// The four administrative districts a monastery can belong to.
pub const VALID_DISTRICTS: &[&str] = &[DISTRICT_EAST, DISTRICT_WEST, DISTRICT_NORTH, DISTRICT_SOUTH];

/// Earliest founding year accepted.
pub const MIN_FOUNDED_YEAR: i32 = 1;
/// Latest founding year accepted.
pub const MAX_FOUNDED_YEAR: i32 = 2100;

/// Largest fee the `NUMERIC(10, 2)` column holds: 99,999,999.99.
pub const MAX_ENTRY_FEE: Decimal = Decimal::from_parts(0x540B_E3FF, 2, 0, false, 2);

pub fn validate_district(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, VALID_DISTRICTS, "district")
}

pub fn validate_founded_year(value: &i32) -> Result<(), ValidationError> {
    if !(MIN_FOUNDED_YEAR..=MAX_FOUNDED_YEAR).contains(value) {
        return Err(rule_violation(
            "founded_year",
            format!("must be between {MIN_FOUNDED_YEAR} and {MAX_FOUNDED_YEAR}"),
        ));
    }
    Ok(())
}

pub fn validate_altitude(value: &i32) -> Result<(), ValidationError> {
    if *value < 0 {
        return Err(rule_violation("altitude", "must not be negative"));
    }
    Ok(())
}

pub fn validate_entry_fee(value: &Decimal) -> Result<(), ValidationError> {
    validate_non_negative(value)?;
    if *value > MAX_ENTRY_FEE {
        return Err(rule_violation(
            "entry_fee",
            format!("must not exceed {MAX_ENTRY_FEE}"),
        ));
    }
    Ok(())
}

pub fn validate_latitude(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::from(-90) || *value > Decimal::from(90) {
        return Err(rule_violation("latitude", "must be between -90 and 90"));
    }
    Ok(())
}

pub fn validate_longitude(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::from(-180) || *value > Decimal::from(180) {
        return Err(rule_violation("longitude", "must be between -180 and 180"));
    }
    Ok(())
}
