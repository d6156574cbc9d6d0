//! Media type and category vocabularies.

use validator::ValidationError;

use crate::validation::{rule_violation, validate_one_of};

pub const TYPE_IMAGE: &str = "image";
pub const TYPE_PANORAMIC: &str = "panoramic";
pub const TYPE_VIDEO: &str = "video";
pub const TYPE_AUDIO: &str = "audio";

pub const VALID_TYPES: &[&str] = &[TYPE_IMAGE, TYPE_PANORAMIC, TYPE_VIDEO, TYPE_AUDIO];

pub const CATEGORY_EXTERIOR: &str = "exterior";
pub const CATEGORY_INTERIOR: &str = "interior";
pub const CATEGORY_RITUAL: &str = "ritual";
pub const CATEGORY_FESTIVAL: &str = "festival";
pub const CATEGORY_ARTIFACT: &str = "artifact";

pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_EXTERIOR,
    CATEGORY_INTERIOR,
    CATEGORY_RITUAL,
    CATEGORY_FESTIVAL,
    CATEGORY_ARTIFACT,
];

pub fn validate_media_type(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, VALID_TYPES, "media_type")
}

pub fn validate_category(value: &str) -> Result<(), ValidationError> {
    validate_one_of(value, VALID_CATEGORIES, "media_category")
}

/// Byte counts are never negative.
pub fn validate_file_size(value: &i32) -> Result<(), ValidationError> {
    if *value < 0 {
        return Err(rule_violation("file_size", "must not be negative"));
    }
    Ok(())
}
