//! Rendering for framework validation reports.

use crate::domain::framework::{
    ValidationIssue, ValidationReport, ValidationSuggestion, ValidationWarning,
};

/// Renders a structural validation error.
pub fn render_issue(issue: &ValidationIssue) -> String {
    match issue {
        ValidationIssue::WeightSumMismatch { actual } => {
            format!("Category weights must sum to 100% (currently {:.2}%)", actual)
        }
        ValidationIssue::NoCriteria => "At least one criterion is required".to_string(),
        ValidationIssue::ThresholdOrder { bid, no_bid } => format!(
            "The bid threshold ({:.1}) must be greater than the no-bid threshold ({:.1})",
            bid, no_bid
        ),
    }
}

/// Renders a non-fatal warning.
pub fn render_warning(warning: &ValidationWarning) -> String {
    match warning {
        ValidationWarning::FewCriteria { count } => format!(
            "Only {} criteria defined; consider at least 5 for a thorough evaluation",
            count
        ),
    }
}

/// Renders an improvement suggestion.
pub fn render_suggestion(suggestion: ValidationSuggestion) -> String {
    match suggestion {
        ValidationSuggestion::AddRiskCriteria => {
            "Add criteria in the risk category to improve decision quality".to_string()
        }
    }
}

/// Renders a whole report as a flat list of lines, errors first.
pub fn render_report(report: &ValidationReport) -> Vec<String> {
    report
        .errors
        .iter()
        .map(render_issue)
        .chain(report.warnings.iter().map(render_warning))
        .chain(report.suggestions.iter().map(|s| render_suggestion(*s)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines_list_errors_first() {
        let report = ValidationReport {
            is_valid: false,
            errors: vec![ValidationIssue::NoCriteria],
            warnings: vec![ValidationWarning::FewCriteria { count: 0 }],
            suggestions: vec![ValidationSuggestion::AddRiskCriteria],
        };

        let lines = render_report(&report);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "At least one criterion is required");
        assert!(lines[1].starts_with("Only 0 criteria"));
    }

    #[test]
    fn weight_mismatch_shows_the_actual_sum() {
        let line = render_issue(&ValidationIssue::WeightSumMismatch { actual: 105.0 });
        assert!(line.contains("105.00"));
    }
}
