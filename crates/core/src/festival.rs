//! Festival status and type vocabularies, plus the date-range rule.

use std::str::FromStr;

use validator::ValidationError;

use crate::error::CoreError;
use crate::types::Timestamp;
use crate::validation::{field_rule_violation, validate_one_of};

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

pub const STATUS_UPCOMING: &str = "upcoming";
pub const STATUS_ONGOING: &str = "ongoing";
pub const STATUS_PAST: &str = "past";

pub const VALID_STATUSES: &[&str] = &[STATUS_UPCOMING, STATUS_ONGOING, STATUS_PAST];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FestivalStatus {
    Upcoming,
    Ongoing,
    Past,
}

impl FestivalStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => STATUS_UPCOMING,
            Self::Ongoing => STATUS_ONGOING,
            Self::Past => STATUS_PAST,
        }
    }
}

impl FromStr for FestivalStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_UPCOMING => Ok(Self::Upcoming),
            STATUS_ONGOING => Ok(Self::Ongoing),
            STATUS_PAST => Ok(Self::Past),
            other => Err(CoreError::Validation(format!(
                "Unknown festival status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

pub fn validate_status(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, VALID_STATUSES, "festival_status")
}

// ---------------------------------------------------------------------------
// Type
// ---------------------------------------------------------------------------

pub const TYPE_RELIGIOUS: &str = "religious";
pub const TYPE_CULTURAL: &str = "cultural";
pub const TYPE_SEASONAL: &str = "seasonal";

pub const VALID_TYPES: &[&str] = &[TYPE_RELIGIOUS, TYPE_CULTURAL, TYPE_SEASONAL];

pub fn validate_festival_type(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, VALID_TYPES, "festival_type")
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// An end date, when given, must not precede the start date.
pub fn validate_date_range(start: Timestamp, end: Option<Timestamp>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => Err(field_rule_violation(
            "endDate",
            "date_range",
            "must not be before startDate",
        )),
        _ => Ok(()),
    }
}
