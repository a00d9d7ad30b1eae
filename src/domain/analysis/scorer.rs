//! Scorer - category and overall weighted scores, recommendation, and
//! risk classification.

use crate::domain::foundation::{Category, Score};
use crate::domain::framework::Framework;
use crate::domain::scenario::{AnalysisResult, CategoryScores, RiskLevel, Scenario};

use super::{InsightGenerator, Normalizer};

/// Pure scoring of one scenario against one framework.
pub struct Scorer;

impl Scorer {
    /// Scores a scenario against a framework, producing a complete,
    /// freshly allocated analysis result.
    ///
    /// Neither input is mutated; attaching the result to the scenario
    /// is the caller's job.
    pub fn score(scenario: &Scenario, framework: &Framework) -> AnalysisResult {
        let category_scores =
            CategoryScores::from_fn(|category| Self::category_score(scenario, framework, category));

        let overall = Self::overall_score(&category_scores, framework).rounded2();

        // Recommendation and combined risk both use the rounded value,
        // matching what callers see in the stored result.
        let recommendation = framework.thresholds.classify(overall);
        let risk_level = Self::risk_level(&category_scores, overall);

        AnalysisResult {
            overall_score: overall,
            recommendation,
            risk_level,
            category_scores,
            key_factors: InsightGenerator::key_factors(&category_scores),
            critical_issues: InsightGenerator::critical_issues(&category_scores),
            opportunities: InsightGenerator::opportunities(&category_scores),
            threats: InsightGenerator::threats(&category_scores),
            assumptions: InsightGenerator::assumptions(),
        }
    }

    /// Weighted mean of the normalized values of a category's criteria.
    ///
    /// Criteria with no value present on the scenario are excluded from
    /// both numerator and denominator; a category with no scored
    /// criteria (or none at all) yields 0.
    fn category_score(scenario: &Scenario, framework: &Framework, category: Category) -> Score {
        let mut total_score = 0.0;
        let mut total_weight = 0.0;

        for criterion in framework.criteria_in(category) {
            if let Some(value) = scenario.value_for(&criterion.id) {
                let normalized = Normalizer::normalize(value, criterion);
                total_score += normalized.value() * criterion.weight;
                total_weight += criterion.weight;
            }
        }

        if total_weight > 0.0 {
            Score::new(total_score / total_weight)
        } else {
            Score::ZERO
        }
    }

    /// Overall score: category scores combined by the framework's
    /// weighting scheme, whose entries are percentages of the overall.
    fn overall_score(scores: &CategoryScores, framework: &Framework) -> Score {
        let weighted: f64 = scores
            .iter()
            .map(|(category, score)| score.value() * framework.weighting_scheme.get(category))
            .sum();
        Score::new(weighted / 100.0)
    }

    /// Combined risk classification.
    ///
    /// The risk category is scored as mitigation strength, so a high
    /// category score means low risk; both terms are inverted before
    /// averaging.
    fn risk_level(scores: &CategoryScores, overall: Score) -> RiskLevel {
        let combined = ((100.0 - scores.risk.value()) + (100.0 - overall.value())) / 2.0;

        if combined >= 80.0 {
            RiskLevel::Critical
        } else if combined >= 60.0 {
            RiskLevel::High
        } else if combined >= 40.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
