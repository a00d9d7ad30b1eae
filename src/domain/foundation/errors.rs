//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    OutOfRange,

    // Not found errors
    FrameworkNotFound,
    ScenarioNotFound,
    TemplateNotFound,
    ComparisonNotFound,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::FrameworkNotFound => "FRAMEWORK_NOT_FOUND",
            ErrorCode::ScenarioNotFound => "SCENARIO_NOT_FOUND",
            ErrorCode::TemplateNotFound => "TEMPLATE_NOT_FOUND",
            ErrorCode::ComparisonNotFound => "COMPARISON_NOT_FOUND",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error with a human-readable reason.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message)
    }

    /// Creates a framework-not-found error.
    pub fn framework_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::FrameworkNotFound,
            format!("Framework with id {} not found", id),
        )
    }

    /// Creates a scenario-not-found error.
    pub fn scenario_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ScenarioNotFound,
            format!("Scenario with id {} not found", id),
        )
    }

    /// Creates a template-not-found error.
    pub fn template_not_found(id: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::TemplateNotFound,
            format!("Template with id {} not found", id),
        )
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::OutOfRange, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("weight", 0.0, 100.0, 150.0);
        assert_eq!(
            format!("{}", err),
            "Field 'weight' must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::out_of_range("accuracy", 0.0, 100.0, 150.0).into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(err.message.contains("accuracy"));
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::ScenarioNotFound, "Scenario not found");
        assert_eq!(format!("{}", err), "[SCENARIO_NOT_FOUND] Scenario not found");
    }

    #[test]
    fn not_found_constructors_carry_the_id() {
        let err = DomainError::framework_not_found("abc");
        assert_eq!(err.code, ErrorCode::FrameworkNotFound);
        assert!(err.message.contains("abc"));
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::validation("bad framework").with_detail("field", "thresholds");
        assert_eq!(err.details.get("field").map(String::as_str), Some("thresholds"));
    }
}
