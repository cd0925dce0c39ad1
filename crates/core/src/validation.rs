//! Write-request validation.
//!
//! Field rules are declared on [`MovieRequest`] with the `validator` derive.
//! This module holds the custom rule functions and turns the unordered
//! `ValidationErrors` map into a list ordered by field declaration.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::movie::{MovieFields, MovieRequest};

/// Lowest accepted rank (inclusive).
pub const RANK_MIN: Decimal = Decimal::ZERO;

/// Highest accepted rank (inclusive).
pub const RANK_MAX: Decimal = Decimal::TEN;

/// Lowest accepted revenue (inclusive).
pub const REVENUE_MIN: Decimal = Decimal::ZERO;

/// Request fields in declaration order, as `(struct field, wire name)`.
const FIELD_ORDER: [(&str, &str); 4] = [
    ("title", "title"),
    ("launch_date", "launchDate"),
    ("rank", "rank"),
    ("revenue", "revenue"),
];

/// Which constraint a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    NotBlank,
    Required,
    Range,
    Min,
}

impl Rule {
    fn from_code(code: &str) -> Self {
        match code {
            "not_blank" => Self::NotBlank,
            "range" => Self::Range,
            "min" => Self::Min,
            _ => Self::Required,
        }
    }
}

/// A single field-level rule violation, named by its wire field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    #[serde(skip)]
    pub rule: Rule,
    pub message: String,
}

/// Validate a write request.
///
/// Returns the validated business fields, or every violation found (at most
/// one per field) in field declaration order.
pub fn validate_request(request: &MovieRequest) -> Result<MovieFields, Vec<FieldViolation>> {
    let violations = match request.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => ordered_violations(&errors),
    };

    match request.to_fields() {
        Some(fields) if violations.is_empty() => Ok(fields),
        _ => Err(violations),
    }
}

/// Flatten `errors` into declaration order, keeping the first error per field.
fn ordered_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let by_field = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|(field, wire)| {
            let first = by_field
                .get(*field)
                .or_else(|| by_field.get(*wire))
                .and_then(|errs| errs.first())?;
            Some(FieldViolation {
                field: (*wire).to_string(),
                rule: Rule::from_code(&first.code),
                message: first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string()),
            })
        })
        .collect()
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Rejects empty and whitespace-only text.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(violation("not_blank", "must not be blank"));
    }
    Ok(())
}

/// Accepts ranks in `[RANK_MIN, RANK_MAX]`.
pub(crate) fn rank_in_range(rank: &Decimal) -> Result<(), ValidationError> {
    if *rank < RANK_MIN || *rank > RANK_MAX {
        return Err(violation("range", "must be between 0 and 10"));
    }
    Ok(())
}

/// Accepts amounts `>= REVENUE_MIN`.
pub(crate) fn non_negative(amount: &Decimal) -> Result<(), ValidationError> {
    if *amount < REVENUE_MIN {
        return Err(violation("min", "must be greater than or equal to 0"));
    }
    Ok(())
}
