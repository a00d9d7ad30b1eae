//! Analysis result types - the frozen output of scoring one scenario
//! against one framework.
//!
//! Insight collections carry structured records; turning them into
//! user-facing text is the job of the report rendering adapter.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Category, Score};

/// The bid / no-bid classification derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Bid,
    NoBid,
    ConditionalBid,
}

/// Four-tier risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Per-category scores on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryScores {
    pub financial: Score,
    pub strategic: Score,
    pub operational: Score,
    pub risk: Score,
    pub market: Score,
}

impl CategoryScores {
    /// Returns the score for a category.
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::Financial => self.financial,
            Category::Strategic => self.strategic,
            Category::Operational => self.operational,
            Category::Risk => self.risk,
            Category::Market => self.market,
        }
    }

    /// Builds scores by evaluating a function per category.
    pub fn from_fn(mut f: impl FnMut(Category) -> Score) -> Self {
        Self {
            financial: f(Category::Financial),
            strategic: f(Category::Strategic),
            operational: f(Category::Operational),
            risk: f(Category::Risk),
            market: f(Category::Market),
        }
    }

    /// Iterates (category, score) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Score)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Sentiment of a per-category key factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorSentiment {
    Positive,
    Negative,
    Neutral,
}

/// A per-category performance factor with its numeric basis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyFactor {
    pub sentiment: FactorSentiment,
    pub category: Category,
    pub score: Score,
}

/// Key factors grouped by sentiment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyFactors {
    pub positive: Vec<KeyFactor>,
    pub negative: Vec<KeyFactor>,
    pub neutral: Vec<KeyFactor>,
}

/// Kinds of derived insight (critical issues, opportunities, threats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    // Critical issues
    FinancialConcern,
    HighRiskExposure,
    OperationalChallenge,
    // Opportunities
    MarketGrowth,
    StrategicAlignment,
    AttractiveReturns,
    // Threats
    UnfavorableMarket,
    SuccessRisk,
}

/// A derived insight with the category score that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInsight {
    pub kind: InsightKind,
    pub category: Category,
    pub basis: Score,
}

/// Stated assumptions attached to every analysis. These are constants,
/// not computed from scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Assumption {
    StableEconomicConditions,
    ResourceAvailability,
    NoMajorRequirementChanges,
}

impl Assumption {
    /// The fixed set attached to every analysis.
    pub const ALL: [Assumption; 3] = [
        Assumption::StableEconomicConditions,
        Assumption::ResourceAvailability,
        Assumption::NoMajorRequirementChanges,
    ];
}

/// The complete, frozen result of analyzing a scenario.
///
/// Produced atomically by the scorer together with the insight
/// generator; never constructed piecemeal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: Score,
    pub recommendation: Recommendation,
    pub risk_level: RiskLevel,
    pub category_scores: CategoryScores,
    pub key_factors: KeyFactors,
    pub critical_issues: Vec<AnalysisInsight>,
    pub opportunities: Vec<AnalysisInsight>,
    pub threats: Vec<AnalysisInsight>,
    pub assumptions: Vec<Assumption>,
}

impl AnalysisResult {
    /// Zeroed, neutral placeholder attached to newly created scenarios
    /// so the field is never partially populated.
    pub fn placeholder() -> Self {
        Self {
            overall_score: Score::ZERO,
            recommendation: Recommendation::NoBid,
            risk_level: RiskLevel::Medium,
            category_scores: CategoryScores::default(),
            key_factors: KeyFactors::default(),
            critical_issues: Vec::new(),
            opportunities: Vec::new(),
            threats: Vec::new(),
            assumptions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_zeroed_and_neutral() {
        let result = AnalysisResult::placeholder();
        assert_eq!(result.overall_score, Score::ZERO);
        assert_eq!(result.recommendation, Recommendation::NoBid);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.category_scores.financial, Score::ZERO);
        assert!(result.key_factors.positive.is_empty());
        assert!(result.critical_issues.is_empty());
    }

    #[test]
    fn category_scores_iter_follows_canonical_order() {
        let scores = CategoryScores::from_fn(|c| match c {
            Category::Financial => Score::new(10.0),
            Category::Strategic => Score::new(20.0),
            Category::Operational => Score::new(30.0),
            Category::Risk => Score::new(40.0),
            Category::Market => Score::new(50.0),
        });

        let collected: Vec<_> = scores.iter().map(|(_, s)| s.value()).collect();
        assert_eq!(collected, vec![10.0, 20.0, 30.0, 40.0, 50.0]);
    }

    #[test]
    fn recommendation_serializes_snake_case() {
        let json = serde_json::to_string(&Recommendation::ConditionalBid).unwrap();
        assert_eq!(json, "\"conditional_bid\"");
    }

    #[test]
    fn risk_levels_order_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }
}
