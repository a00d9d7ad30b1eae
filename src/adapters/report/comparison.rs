//! Rendering for comparison insights and recommendations.

use crate::domain::analysis::{
    ComparisonInsight, ComparisonInsightKind, ComparisonRecommendation,
};

/// Renders a comparison insight as a sentence with its numeric basis.
pub fn render_comparison_insight(insight: &ComparisonInsight) -> String {
    match insight.kind {
        ComparisonInsightKind::BestOverall => format!(
            "{} has the highest overall score ({:.1})",
            insight.scenario_name,
            insight.basis.value()
        ),
        ComparisonInsightKind::CategoryLeader => {
            let category = insight
                .category
                .map(|c| c.label().to_lowercase())
                .unwrap_or_default();
            format!(
                "{} leads in the {} category ({:.1})",
                insight.scenario_name,
                category,
                insight.basis.value()
            )
        }
    }
}

/// Renders a templated comparison recommendation.
pub fn render_comparison_recommendation(recommendation: ComparisonRecommendation) -> String {
    match recommendation {
        ComparisonRecommendation::FocusTopRanked { rank } => format!(
            "Focus resources on the rank {} scenario, which shows the strongest overall position",
            rank
        ),
        ComparisonRecommendation::ReviewUnderperformers => {
            "Review lower-ranked scenarios for improvement potential before discarding them"
                .to_string()
        }
        ComparisonRecommendation::RunSensitivityAnalysis => {
            "Run a sensitivity analysis on the highest-weighted criteria to confirm the ranking"
                .to_string()
        }
    }
}
