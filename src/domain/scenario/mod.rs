//! Scenario types: the opportunity under evaluation, its frozen
//! analysis result, and reusable value templates.

mod analysis_result;
mod scenario;
mod template;

pub use analysis_result::{
    AnalysisInsight, AnalysisResult, Assumption, CategoryScores, FactorSentiment, InsightKind,
    KeyFactor, KeyFactors, Recommendation, RiskLevel,
};
pub use scenario::{Scenario, ScenarioStatus};
pub use template::ScenarioTemplate;
