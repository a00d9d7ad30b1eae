//! Decision framework types: weighted criteria, category weights,
//! thresholds, and structural validation.

mod criterion;
mod framework;
mod validator;

pub use criterion::{Criterion, CriterionValue, DataType};
pub use framework::{Framework, Thresholds, WeightingScheme};
pub use validator::{
    FrameworkValidator, ValidationIssue, ValidationReport, ValidationSuggestion,
    ValidationWarning, WEIGHT_SUM_TOLERANCE,
};
