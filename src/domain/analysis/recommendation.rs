//! Recommendation generation - deterministic expansion of structured
//! recommendation records from an analysis result.
//!
//! Every field is an enum; turning records into user-facing text is the
//! report rendering adapter's job.

use serde::{Deserialize, Serialize};

use crate::domain::scenario::{AnalysisResult, Recommendation, RiskLevel};

/// Whether a record is the primary course of action or an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Primary,
    Alternative,
}

/// The recommended course of action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    SubmitBid,
    DeclineBid,
    BidWithConditions,
    ConductFurtherAnalysis,
}

/// Priority of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Execution timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Immediate,
    OneWeek,
    AsNeeded,
}

/// Expected outcome band, derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeLikelihood {
    HighSuccess,
    ModerateSuccess,
    LowSuccess,
    ClearerDecision,
}

/// Resources a recommendation calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    ProposalTeam,
    FinancialData,
    RiskSpecialist,
    AnalysisTeam,
    AdditionalData,
}

/// Risk mitigation steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MitigationAction {
    RiskManagementPlan,
    CostMarginReview,
    ContinuousMonitoring,
    AssumptionReview,
    SensitivityAnalysis,
}

/// Success criteria for the recommended action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessMetric {
    TargetMargins,
    ScheduleAdherence,
    ClientSatisfaction,
    ExecutionQuality,
    DecisionClarity,
    DecisionConfidence,
}

/// Preconditions the recommendation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    ManagementApproval,
    ContractTermsReview,
    ResourceConfirmation,
    DataAvailability,
    AnalysisTime,
}

/// A fully structured decision recommendation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecommendation {
    pub kind: RecommendationKind,
    pub action: RecommendedAction,
    /// The numbers the recommendation rests on.
    pub overall_score: crate::domain::foundation::Score,
    pub risk_level: RiskLevel,
    pub priority: Priority,
    pub timeline: Timeline,
    pub expected_outcome: OutcomeLikelihood,
    pub required_resources: Vec<ResourceKind>,
    pub risk_mitigation: Vec<MitigationAction>,
    pub success_metrics: Vec<SuccessMetric>,
    pub conditions: Vec<Condition>,
}

/// Expands recommendation records from a completed analysis.
///
/// Always produces a primary record; adds an alternative
/// further-analysis record only for conditional bids. The expansion is
/// deterministic: the same analysis always yields the same records.
pub fn generate_recommendations(analysis: &AnalysisResult) -> Vec<DecisionRecommendation> {
    let mut recommendations = vec![primary(analysis)];

    if analysis.recommendation == Recommendation::ConditionalBid {
        recommendations.push(alternative(analysis));
    }

    recommendations
}

fn primary(analysis: &AnalysisResult) -> DecisionRecommendation {
    let high_risk = matches!(analysis.risk_level, RiskLevel::High | RiskLevel::Critical);

    let action = match analysis.recommendation {
        Recommendation::Bid => RecommendedAction::SubmitBid,
        Recommendation::NoBid => RecommendedAction::DeclineBid,
        Recommendation::ConditionalBid => RecommendedAction::BidWithConditions,
    };

    let timeline = match analysis.recommendation {
        Recommendation::Bid | Recommendation::NoBid => Timeline::Immediate,
        Recommendation::ConditionalBid => Timeline::OneWeek,
    };

    let expected_outcome = if analysis.overall_score.value() > 80.0 {
        OutcomeLikelihood::HighSuccess
    } else if analysis.overall_score.value() > 60.0 {
        OutcomeLikelihood::ModerateSuccess
    } else {
        OutcomeLikelihood::LowSuccess
    };

    let mut required_resources = vec![ResourceKind::ProposalTeam, ResourceKind::FinancialData];
    if high_risk {
        required_resources.push(ResourceKind::RiskSpecialist);
    }

    let mut risk_mitigation = Vec::new();
    if high_risk {
        risk_mitigation.push(MitigationAction::RiskManagementPlan);
    }
    if analysis.category_scores.financial.value() < 60.0 {
        risk_mitigation.push(MitigationAction::CostMarginReview);
    }
    risk_mitigation.push(MitigationAction::ContinuousMonitoring);

    let mut conditions = vec![Condition::ManagementApproval];
    if analysis.recommendation == Recommendation::ConditionalBid {
        conditions.push(Condition::ContractTermsReview);
        conditions.push(Condition::ResourceConfirmation);
    }

    DecisionRecommendation {
        kind: RecommendationKind::Primary,
        action,
        overall_score: analysis.overall_score,
        risk_level: analysis.risk_level,
        priority: Priority::High,
        timeline,
        expected_outcome,
        required_resources,
        risk_mitigation,
        success_metrics: vec![
            SuccessMetric::TargetMargins,
            SuccessMetric::ScheduleAdherence,
            SuccessMetric::ClientSatisfaction,
            SuccessMetric::ExecutionQuality,
        ],
        conditions,
    }
}

fn alternative(analysis: &AnalysisResult) -> DecisionRecommendation {
    DecisionRecommendation {
        kind: RecommendationKind::Alternative,
        action: RecommendedAction::ConductFurtherAnalysis,
        overall_score: analysis.overall_score,
        risk_level: analysis.risk_level,
        priority: Priority::Medium,
        timeline: Timeline::OneWeek,
        expected_outcome: OutcomeLikelihood::ClearerDecision,
        required_resources: vec![ResourceKind::AnalysisTeam, ResourceKind::AdditionalData],
        risk_mitigation: vec![
            MitigationAction::AssumptionReview,
            MitigationAction::SensitivityAnalysis,
        ],
        success_metrics: vec![SuccessMetric::DecisionClarity, SuccessMetric::DecisionConfidence],
        conditions: vec![Condition::DataAvailability, Condition::AnalysisTime],
    }
}
