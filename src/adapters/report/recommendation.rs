//! Rendering for structured decision recommendation records.

use std::fmt::Write as _;

use crate::domain::analysis::{
    Condition, DecisionRecommendation, MitigationAction, OutcomeLikelihood, Priority,
    RecommendationKind, RecommendedAction, ResourceKind, SuccessMetric, Timeline,
};

/// The short label for a recommended action.
pub fn action_label(action: RecommendedAction) -> &'static str {
    match action {
        RecommendedAction::SubmitBid => "Submit Bid",
        RecommendedAction::DeclineBid => "Decline Bid",
        RecommendedAction::BidWithConditions => "Bid with Conditions",
        RecommendedAction::ConductFurtherAnalysis => "Conduct Further Analysis",
    }
}

/// The label for a priority tier.
pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

/// The wording for an execution timeline.
pub fn timeline_text(timeline: Timeline) -> &'static str {
    match timeline {
        Timeline::Immediate => "Immediate",
        Timeline::OneWeek => "Within one week",
        Timeline::AsNeeded => "As needed",
    }
}

/// The wording for an expected outcome band.
pub fn outcome_text(outcome: OutcomeLikelihood) -> &'static str {
    match outcome {
        OutcomeLikelihood::HighSuccess => "High likelihood of success",
        OutcomeLikelihood::ModerateSuccess => "Moderate likelihood of success",
        OutcomeLikelihood::LowSuccess => "Low likelihood of success",
        OutcomeLikelihood::ClearerDecision => "A clearer basis for the final decision",
    }
}

/// The wording for a required resource.
pub fn resource_text(resource: ResourceKind) -> &'static str {
    match resource {
        ResourceKind::ProposalTeam => "Proposal preparation team",
        ResourceKind::FinancialData => "Detailed financial data",
        ResourceKind::RiskSpecialist => "Risk management specialist",
        ResourceKind::AnalysisTeam => "Analysis team",
        ResourceKind::AdditionalData => "Additional project data",
    }
}

/// The wording for a risk mitigation step.
pub fn mitigation_text(action: MitigationAction) -> &'static str {
    match action {
        MitigationAction::RiskManagementPlan => "Develop a risk management plan",
        MitigationAction::CostMarginReview => "Review cost estimates and margins",
        MitigationAction::ContinuousMonitoring => "Monitor key factors continuously",
        MitigationAction::AssumptionReview => "Re-examine the stated assumptions",
        MitigationAction::SensitivityAnalysis => "Run a sensitivity analysis on critical inputs",
    }
}

/// The wording for a success metric.
pub fn metric_text(metric: SuccessMetric) -> &'static str {
    match metric {
        SuccessMetric::TargetMargins => "Margins meet the target",
        SuccessMetric::ScheduleAdherence => "Delivery stays on schedule",
        SuccessMetric::ClientSatisfaction => "Client satisfaction",
        SuccessMetric::ExecutionQuality => "Execution quality",
        SuccessMetric::DecisionClarity => "A clear bid or no-bid decision",
        SuccessMetric::DecisionConfidence => "Confidence in the final decision",
    }
}

/// The wording for a precondition.
pub fn condition_text(condition: Condition) -> &'static str {
    match condition {
        Condition::ManagementApproval => "Management approval",
        Condition::ContractTermsReview => "Contract terms reviewed",
        Condition::ResourceConfirmation => "Resource availability confirmed",
        Condition::DataAvailability => "Required data is available",
        Condition::AnalysisTime => "Time allocated for further analysis",
    }
}

/// Renders a full recommendation record as a multi-line report block.
pub fn render_recommendation(recommendation: &DecisionRecommendation) -> String {
    let heading = match recommendation.kind {
        RecommendationKind::Primary => "Primary recommendation",
        RecommendationKind::Alternative => "Alternative",
    };

    let mut out = format!(
        "{}: {} (priority: {}, timeline: {})\n",
        heading,
        action_label(recommendation.action),
        priority_label(recommendation.priority),
        timeline_text(recommendation.timeline),
    );
    let _ = writeln!(
        out,
        "Based on an overall score of {:.1} with {:?} risk.",
        recommendation.overall_score.value(),
        recommendation.risk_level,
    );
    let _ = writeln!(out, "Expected outcome: {}", outcome_text(recommendation.expected_outcome));

    push_section(&mut out, "Required resources", recommendation.required_resources.iter().map(|r| resource_text(*r)));
    push_section(&mut out, "Risk mitigation", recommendation.risk_mitigation.iter().map(|m| mitigation_text(*m)));
    push_section(&mut out, "Success metrics", recommendation.success_metrics.iter().map(|m| metric_text(*m)));
    push_section(&mut out, "Conditions", recommendation.conditions.iter().map(|c| condition_text(*c)));

    out
}

fn push_section<'a>(out: &mut String, title: &str, items: impl Iterator<Item = &'a str>) {
    let mut wrote_title = false;
    for item in items {
        if !wrote_title {
            let _ = writeln!(out, "{}:", title);
            wrote_title = true;
        }
        let _ = writeln!(out, "  - {}", item);
    }
}
