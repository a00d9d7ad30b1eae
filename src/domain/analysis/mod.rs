//! Analysis Module - Pure engines for bid/no-bid decision support.
//!
//! # Components
//!
//! - `Normalizer` - Raw criterion values onto the common 0-100 scale
//! - `Scorer` - Category and overall weighted scores, recommendation, risk level
//! - `InsightGenerator` - Key factors, critical issues, opportunities, threats
//! - `Comparator` - Multi-scenario comparison matrix, rankings, insights
//! - `generate_recommendations` - Templated recommendation records
//! - `AnalyticsCalculator` - Decision history aggregates and trends
//!
//! # Design Philosophy
//!
//! All functions are pure and stateless: immutable inputs, freshly
//! constructed outputs, no I/O, no hidden state. Persistence happens in
//! the application layer through repository ports.

mod analytics;
mod comparator;
mod insight;
mod normalizer;
mod recommendation;
mod scorer;

pub use analytics::{AnalyticsCalculator, DecisionAnalytics, MonthlyTrend, TREND_MONTHS};
pub use comparator::{
    Comparator, ComparisonImpact, ComparisonInsight, ComparisonInsightKind, ComparisonOutcome,
    ComparisonRecommendation, ComparisonMatrix, MatrixEntry, Ranking, ScenarioComparison,
    COMPARISON_CATEGORY_WEIGHT, MIN_SCENARIOS_FOR_COMPARISON,
};
pub use insight::{
    InsightGenerator, FINANCIAL_CONCERN_MAX, NEGATIVE_FACTOR_MAX, OPERATIONAL_CHALLENGE_MAX,
    POSITIVE_FACTOR_MIN,
};
pub use normalizer::{Normalizer, NEUTRAL_SCORE};
pub use recommendation::{
    generate_recommendations, Condition, DecisionRecommendation, MitigationAction,
    OutcomeLikelihood, Priority, RecommendationKind, RecommendedAction, ResourceKind,
    SuccessMetric, Timeline,
};
pub use scorer::Scorer;
