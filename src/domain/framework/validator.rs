//! Framework Validator - read-only structural checks on a framework.
//!
//! Validation never mutates the framework and never fails: it always
//! returns a full report. Calling code is expected to run it before
//! persisting or scoring with a new or edited framework.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Category;

use super::Framework;

/// Tolerance for the category-weight sum check.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.01;

/// Minimum criterion count below which a warning is emitted.
const RECOMMENDED_CRITERIA_COUNT: usize = 5;

/// A structural error that makes a framework unusable for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationIssue {
    /// Category weights must sum to 100 (within tolerance).
    WeightSumMismatch { actual: f64 },
    /// At least one criterion must exist.
    NoCriteria,
    /// The bid threshold must exceed the no-bid threshold.
    ThresholdOrder { bid: f64, no_bid: f64 },
}

/// A non-fatal concern about framework quality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationWarning {
    /// Fewer criteria than recommended for a thorough evaluation.
    FewCriteria { count: usize },
}

/// An improvement suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationSuggestion {
    /// No criterion is tagged with the risk category.
    AddRiskCriteria,
}

/// Full validation report for a framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationWarning>,
    pub suggestions: Vec<ValidationSuggestion>,
}

/// Structural validation for frameworks.
pub struct FrameworkValidator;

impl FrameworkValidator {
    /// Validates a framework's structural invariants.
    ///
    /// Errors: weight sum, empty criteria, threshold ordering.
    /// Warnings: fewer than five criteria.
    /// Suggestions: no risk-category criterion.
    pub fn validate(framework: &Framework) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        let total_weight = framework.weighting_scheme.total();
        if (total_weight - 100.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(ValidationIssue::WeightSumMismatch { actual: total_weight });
        }

        if framework.criteria.is_empty() {
            errors.push(ValidationIssue::NoCriteria);
        }

        if framework.thresholds.bid <= framework.thresholds.no_bid {
            errors.push(ValidationIssue::ThresholdOrder {
                bid: framework.thresholds.bid,
                no_bid: framework.thresholds.no_bid,
            });
        }

        if framework.criteria.len() < RECOMMENDED_CRITERIA_COUNT {
            warnings.push(ValidationWarning::FewCriteria {
                count: framework.criteria.len(),
            });
        }

        if framework.criteria_in(Category::Risk).next().is_none() {
            suggestions.push(ValidationSuggestion::AddRiskCriteria);
        }

        ValidationReport {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            suggestions,
        }
    }
}
