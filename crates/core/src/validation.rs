//! Request-body validation glue.
//!
//! DTOs derive [`validator::Validate`] and reference the rule functions in
//! this crate through `#[validate(custom(function = ...))]`. [`CheckedInput`]
//! turns the resulting [`ValidationErrors`] into camelCase
//! [`FieldViolation`]s so the HTTP layer can report field-level detail.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{CoreError, FieldViolation};

/// Key validator uses for struct-level (schema) errors.
const SCHEMA_KEY: &str = "__all__";

/// Param name a schema-level rule uses to attribute itself to a field.
pub const FIELD_PARAM: &str = "field";

/// Build a [`ValidationError`] with an explicit human-readable message.
pub fn rule_violation(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Like [`rule_violation`] but for schema-level rules that still belong to
/// one field (e.g. an end date that precedes the start date).
pub fn field_rule_violation(
    field: &'static str,
    code: &'static str,
    message: impl Into<Cow<'static, str>>,
) -> ValidationError {
    let mut err = rule_violation(code, message);
    err.add_param(Cow::Borrowed(FIELD_PARAM), &field);
    err
}

/// Reject strings that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_violation("not_blank", "must not be blank"));
    }
    Ok(())
}

/// Reject negative decimal amounts.
pub fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(rule_violation("non_negative", "must not be negative"));
    }
    Ok(())
}

/// Check that `value` is one of `allowed`, producing a message that lists
/// the accepted values.
pub fn validate_one_of(
    value: &str,
    allowed: &[&str],
    code: &'static str,
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(rule_violation(
        code,
        format!("must be one of: {}", allowed.join(", ")),
    ))
}

/// Convert a snake_case Rust field name into the camelCase name clients use.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut capitalize_next = false;
    for c in s.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            out.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Flatten validator output into a sorted list of [`FieldViolation`]s.
///
/// `aliases` maps Rust field names to JSON names where the two differ by
/// more than case (e.g. `media_type` is sent as `type`).
pub fn violations_from(errors: &ValidationErrors, aliases: &[(&str, &str)]) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    for (field, errs) in errors.field_errors() {
        let field = field.to_string();
        for err in errs.iter() {
            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("failed '{}' check", err.code));

            let json_field = if field == SCHEMA_KEY {
                err.params
                    .get(FIELD_PARAM)
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            } else {
                let name = aliases
                    .iter()
                    .find(|(rust, _)| *rust == field)
                    .map(|(_, json)| (*json).to_string())
                    .unwrap_or_else(|| to_camel_case(&field));
                Some(name)
            };

            out.push(FieldViolation {
                field: json_field,
                message,
            });
        }
    }
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    out
}

/// Apply `rule` to a nullable patch field when it carries a value.
///
/// Absent fields and explicit `null`s pass; `field` is the JSON name.
pub fn check_nullable<T: ?Sized>(
    out: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<&T>,
    rule: impl FnOnce(&T) -> Result<(), ValidationError>,
) {
    if let Some(Err(err)) = value.map(rule) {
        let message = err
            .message
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("failed '{}' check", err.code));
        out.push(FieldViolation::new(field, message));
    }
}

/// A request DTO that can be checked before it reaches the database.
pub trait CheckedInput: Validate {
    /// Rust field name → JSON field name, for fields renamed beyond case.
    const FIELD_ALIASES: &'static [(&'static str, &'static str)] = &[];

    /// Rules the `validator` derive cannot attach, such as those on
    /// nullable patch fields. See [`check_nullable`].
    fn extra_violations(&self) -> Vec<FieldViolation> {
        Vec::new()
    }

    /// Run every rule, mapping failures to [`CoreError::InvalidInput`].
    fn check(&self) -> Result<(), CoreError> {
        let mut violations = match self.validate() {
            Ok(()) => Vec::new(),
            Err(e) => violations_from(&e, Self::FIELD_ALIASES),
        };
        violations.extend(self.extra_violations());
        if violations.is_empty() {
            return Ok(());
        }
        violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        Err(CoreError::InvalidInput(violations))
    }
}
