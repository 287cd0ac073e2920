//! Shared validation helpers for inbound HTTP adapters.
//!
//! Decode failures are reported as `invalid_request` errors whose details
//! name the offending field and a machine-readable code.

use serde_json::json;

use crate::domain::{CrewCapacity, Error, ExoplanetId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidUuid,
    InvalidCrewCapacity,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::InvalidCrewCapacity => "invalid_crew_capacity",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

/// Parse a path identifier, reporting malformed text as a decode failure.
pub(crate) fn parse_exoplanet_id(value: &str, field: FieldName) -> Result<ExoplanetId, Error> {
    ExoplanetId::new(value).map_err(|_| invalid_uuid_error(field, value))
}

/// Parse a path identifier where malformed text cannot name a stored record.
pub(crate) fn parse_existing_exoplanet_id(value: &str) -> Result<ExoplanetId, Error> {
    ExoplanetId::new(value).map_err(|_| Error::not_found(format!("exoplanet {value} not found")))
}

/// Parse a crew capacity query value.
///
/// Accepts decimal integers in `1..=i64::MAX`; anything else, including an
/// absent value, is rejected.
pub(crate) fn parse_crew_capacity(
    value: Option<&str>,
    field: FieldName,
) -> Result<CrewCapacity, Error> {
    let raw = value.ok_or_else(|| missing_field_error(field))?;
    raw.parse::<i64>()
        .ok()
        .and_then(|count| u64::try_from(count).ok())
        .and_then(|count| CrewCapacity::new(count).ok())
        .ok_or_else(|| {
            let field = field.as_str();
            ValidationError::new(field, format!("{field} must be a positive integer"))
                .with_value(ErrorCode::InvalidCrewCapacity, raw)
        })
}
