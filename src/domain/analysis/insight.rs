//! Insight Generator - derives factors, issues, opportunities, and
//! threats from category scores.
//!
//! The numeric thresholds here are independent fixed constants of the
//! analysis method, not derived from any framework's own thresholds.

use crate::domain::foundation::Category;
use crate::domain::scenario::{
    AnalysisInsight, Assumption, CategoryScores, FactorSentiment, InsightKind, KeyFactor,
    KeyFactors,
};

/// A category score at or above this is a positive factor.
pub const POSITIVE_FACTOR_MIN: f64 = 70.0;

/// A category score at or below this is a negative factor.
pub const NEGATIVE_FACTOR_MAX: f64 = 30.0;

/// Financial score below this raises a critical issue.
pub const FINANCIAL_CONCERN_MAX: f64 = 40.0;

/// Operational score below this raises a critical issue.
pub const OPERATIONAL_CHALLENGE_MAX: f64 = 35.0;

const HIGH_RISK_ISSUE_MAX: f64 = 30.0;
const MARKET_OPPORTUNITY_MIN: f64 = 70.0;
const STRATEGIC_OPPORTUNITY_MIN: f64 = 75.0;
const FINANCIAL_OPPORTUNITY_MIN: f64 = 80.0;
const MARKET_THREAT_MAX: f64 = 40.0;
const RISK_THREAT_MAX: f64 = 35.0;

/// Derivation of qualitative insight records from category scores.
pub struct InsightGenerator;

impl InsightGenerator {
    /// Classifies each category independently as a positive, negative,
    /// or neutral factor. A scenario can carry both positive and
    /// negative factors at once.
    pub fn key_factors(scores: &CategoryScores) -> KeyFactors {
        let mut factors = KeyFactors::default();

        for (category, score) in scores.iter() {
            let sentiment = if score.value() >= POSITIVE_FACTOR_MIN {
                FactorSentiment::Positive
            } else if score.value() <= NEGATIVE_FACTOR_MAX {
                FactorSentiment::Negative
            } else {
                FactorSentiment::Neutral
            };

            let factor = KeyFactor {
                sentiment,
                category,
                score,
            };

            match sentiment {
                FactorSentiment::Positive => factors.positive.push(factor),
                FactorSentiment::Negative => factors.negative.push(factor),
                FactorSentiment::Neutral => factors.neutral.push(factor),
            }
        }

        factors
    }

    /// Issues severe enough to require explicit review before bidding.
    pub fn critical_issues(scores: &CategoryScores) -> Vec<AnalysisInsight> {
        let mut issues = Vec::new();

        if scores.financial.value() < FINANCIAL_CONCERN_MAX {
            issues.push(AnalysisInsight {
                kind: InsightKind::FinancialConcern,
                category: Category::Financial,
                basis: scores.financial,
            });
        }

        // Low risk-category score means weak risk mitigation.
        if scores.risk.value() < HIGH_RISK_ISSUE_MAX {
            issues.push(AnalysisInsight {
                kind: InsightKind::HighRiskExposure,
                category: Category::Risk,
                basis: scores.risk,
            });
        }

        if scores.operational.value() < OPERATIONAL_CHALLENGE_MAX {
            issues.push(AnalysisInsight {
                kind: InsightKind::OperationalChallenge,
                category: Category::Operational,
                basis: scores.operational,
            });
        }

        issues
    }

    /// Independently triggered opportunities.
    pub fn opportunities(scores: &CategoryScores) -> Vec<AnalysisInsight> {
        let mut opportunities = Vec::new();

        if scores.market.value() > MARKET_OPPORTUNITY_MIN {
            opportunities.push(AnalysisInsight {
                kind: InsightKind::MarketGrowth,
                category: Category::Market,
                basis: scores.market,
            });
        }

        if scores.strategic.value() > STRATEGIC_OPPORTUNITY_MIN {
            opportunities.push(AnalysisInsight {
                kind: InsightKind::StrategicAlignment,
                category: Category::Strategic,
                basis: scores.strategic,
            });
        }

        if scores.financial.value() > FINANCIAL_OPPORTUNITY_MIN {
            opportunities.push(AnalysisInsight {
                kind: InsightKind::AttractiveReturns,
                category: Category::Financial,
                basis: scores.financial,
            });
        }

        opportunities
    }

    /// Independently triggered threats.
    pub fn threats(scores: &CategoryScores) -> Vec<AnalysisInsight> {
        let mut threats = Vec::new();

        if scores.market.value() < MARKET_THREAT_MAX {
            threats.push(AnalysisInsight {
                kind: InsightKind::UnfavorableMarket,
                category: Category::Market,
                basis: scores.market,
            });
        }

        if scores.risk.value() < RISK_THREAT_MAX {
            threats.push(AnalysisInsight {
                kind: InsightKind::SuccessRisk,
                category: Category::Risk,
                basis: scores.risk,
            });
        }

        threats
    }

    /// The fixed assumptions attached to every analysis.
    pub fn assumptions() -> Vec<Assumption> {
        Assumption::ALL.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Score;

    fn scores(financial: f64, strategic: f64, operational: f64, risk: f64, market: f64) -> CategoryScores {
        CategoryScores {
            financial: Score::new(financial),
            strategic: Score::new(strategic),
            operational: Score::new(operational),
            risk: Score::new(risk),
            market: Score::new(market),
        }
    }

    #[test]
    fn key_factors_classify_each_category_independently() {
        let factors = InsightGenerator::key_factors(&scores(85.0, 50.0, 20.0, 70.0, 30.0));

        let positive: Vec<_> = factors.positive.iter().map(|f| f.category).collect();
        let negative: Vec<_> = factors.negative.iter().map(|f| f.category).collect();
        let neutral: Vec<_> = factors.neutral.iter().map(|f| f.category).collect();

        assert_eq!(positive, vec![Category::Financial, Category::Risk]);
        assert_eq!(negative, vec![Category::Operational, Category::Market]);
        assert_eq!(neutral, vec![Category::Strategic]);
    }

    #[test]
    fn factor_boundaries_are_inclusive() {
        let factors = InsightGenerator::key_factors(&scores(70.0, 30.0, 69.99, 30.01, 50.0));
        assert_eq!(factors.positive.len(), 1); // exactly 70 is positive
        assert_eq!(factors.negative.len(), 1); // exactly 30 is negative
        assert_eq!(factors.neutral.len(), 3);
    }

    #[test]
    fn critical_issues_fire_below_their_thresholds() {
        let issues = InsightGenerator::critical_issues(&scores(39.9, 50.0, 34.9, 29.9, 50.0));
        let kinds: Vec<_> = issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::FinancialConcern,
                InsightKind::HighRiskExposure,
                InsightKind::OperationalChallenge,
            ]
        );
    }

    #[test]
    fn critical_issue_thresholds_are_strict() {
        let issues = InsightGenerator::critical_issues(&scores(40.0, 50.0, 35.0, 30.0, 50.0));
        assert!(issues.is_empty());
    }

    #[test]
    fn opportunities_fire_above_their_thresholds() {
        let opportunities = InsightGenerator::opportunities(&scores(80.1, 75.1, 0.0, 0.0, 70.1));
        let kinds: Vec<_> = opportunities.iter().map(|o| o.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::MarketGrowth,
                InsightKind::StrategicAlignment,
                InsightKind::AttractiveReturns,
            ]
        );
    }

    #[test]
    fn opportunity_thresholds_are_strict() {
        let opportunities = InsightGenerator::opportunities(&scores(80.0, 75.0, 0.0, 0.0, 70.0));
        assert!(opportunities.is_empty());
    }

    #[test]
    fn threats_fire_below_their_thresholds() {
        let threats = InsightGenerator::threats(&scores(50.0, 50.0, 50.0, 34.9, 39.9));
        let kinds: Vec<_> = threats.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![InsightKind::UnfavorableMarket, InsightKind::SuccessRisk]);
    }

    #[test]
    fn assumptions_are_the_fixed_three() {
        assert_eq!(InsightGenerator::assumptions(), Assumption::ALL.to_vec());
    }
}
