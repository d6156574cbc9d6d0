//! Bind helpers for partial updates.
//!
//! Plain `Option` fields are applied with `COALESCE($n, col)`. Nullable
//! columns need two placeholders instead, written as
//! `col = CASE WHEN $set THEN $value ELSE col END`, so that an explicit
//! `null` can clear the column.

/// Split a nullable patch field into its "was supplied" flag and value.
pub(crate) fn nullable<T>(field: &Option<Option<T>>) -> (bool, Option<&T>) {
    (field.is_some(), field.as_ref().and_then(Option::as_ref))
}
