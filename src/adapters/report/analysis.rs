//! Rendering for per-analysis records: key factors, insights, and
//! assumptions.

use crate::domain::scenario::{AnalysisInsight, Assumption, FactorSentiment, InsightKind, KeyFactor};

/// Renders a key factor as a sentence with its numeric basis.
pub fn render_key_factor(factor: &KeyFactor) -> String {
    let qualifier = match factor.sentiment {
        FactorSentiment::Positive => "Strong",
        FactorSentiment::Negative => "Weak",
        FactorSentiment::Neutral => "Moderate",
    };
    format!(
        "{} {} performance ({:.1})",
        qualifier,
        factor.category.label().to_lowercase(),
        factor.score.value()
    )
}

/// Renders a derived insight (critical issue, opportunity, or threat).
pub fn render_insight(insight: &AnalysisInsight) -> String {
    match insight.kind {
        InsightKind::FinancialConcern => {
            "Low financial score indicates potential profitability issues".to_string()
        }
        InsightKind::HighRiskExposure => {
            "High risk exposure requires mitigation planning".to_string()
        }
        InsightKind::OperationalChallenge => {
            "Operational constraints may impact delivery".to_string()
        }
        InsightKind::MarketGrowth => {
            "Favorable market conditions present growth opportunities".to_string()
        }
        InsightKind::StrategicAlignment => {
            "Strong strategic alignment with business goals".to_string()
        }
        InsightKind::AttractiveReturns => "Attractive financial returns expected".to_string(),
        InsightKind::UnfavorableMarket => "Unfavorable market conditions".to_string(),
        InsightKind::SuccessRisk => "High risk of project failure".to_string(),
    }
}

/// The fixed wording for a stated assumption.
pub fn assumption_text(assumption: Assumption) -> &'static str {
    match assumption {
        Assumption::StableEconomicConditions => "Economic conditions remain stable",
        Assumption::ResourceAvailability => "Required resources will be available",
        Assumption::NoMajorRequirementChanges => "No major changes in project requirements",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Category, Score};

    #[test]
    fn key_factor_wording_follows_sentiment() {
        let positive = KeyFactor {
            sentiment: FactorSentiment::Positive,
            category: Category::Financial,
            score: Score::new(85.0),
        };
        assert_eq!(render_key_factor(&positive), "Strong financial performance (85.0)");

        let negative = KeyFactor {
            sentiment: FactorSentiment::Negative,
            category: Category::Risk,
            score: Score::new(20.0),
        };
        assert_eq!(render_key_factor(&negative), "Weak risk performance (20.0)");
    }

    #[test]
    fn every_assumption_has_wording() {
        for assumption in Assumption::ALL {
            assert!(!assumption_text(assumption).is_empty());
        }
    }
}
