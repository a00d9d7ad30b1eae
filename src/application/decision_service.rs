//! DecisionSupportService - orchestrates scoring, comparison, and
//! recommendation generation over repository ports.
//!
//! The service owns no state beyond its injected repositories; all
//! computation is delegated to the pure engines in `domain::analysis`.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::domain::analysis::{
    generate_recommendations, AnalyticsCalculator, Comparator, DecisionAnalytics,
    DecisionRecommendation, ScenarioComparison, Scorer,
};
use crate::domain::foundation::{
    CriterionId, DomainError, FrameworkId, ScenarioId, TemplateId, Timestamp,
};
use crate::domain::framework::{CriterionValue, Framework, FrameworkValidator, ValidationReport};
use crate::domain::history::DecisionHistory;
use crate::domain::scenario::{AnalysisResult, Scenario, ScenarioTemplate};
use crate::ports::{
    ComparisonRepository, FrameworkRepository, HistoryRepository, ScenarioRepository,
    TemplateRepository,
};

/// The decision support engine's application service.
///
/// Repositories are constructor-injected; there is no process-wide
/// instance. Scoring itself never touches storage - reads happen
/// before, the write-back after.
pub struct DecisionSupportService {
    frameworks: Arc<dyn FrameworkRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
    templates: Arc<dyn TemplateRepository>,
    comparisons: Arc<dyn ComparisonRepository>,
    history: Arc<dyn HistoryRepository>,
}

impl DecisionSupportService {
    /// Creates a service over the given repositories.
    pub fn new(
        frameworks: Arc<dyn FrameworkRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
        templates: Arc<dyn TemplateRepository>,
        comparisons: Arc<dyn ComparisonRepository>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            frameworks,
            scenarios,
            templates,
            comparisons,
            history,
        }
    }

    // === Framework management ===

    /// Validates and persists a new framework.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the framework's structural invariants do
    ///   not hold; the report's errors are attached as a detail
    pub async fn create_framework(&self, framework: Framework) -> Result<Framework, DomainError> {
        Self::ensure_valid(&framework)?;
        self.frameworks.save(&framework).await?;
        debug!(framework_id = %framework.id, "Created decision framework");
        Ok(framework)
    }

    /// Validates and persists changes to an existing framework.
    ///
    /// Prior analyses are frozen copies and are not re-scored.
    pub async fn update_framework(&self, mut framework: Framework) -> Result<Framework, DomainError> {
        Self::ensure_valid(&framework)?;
        framework.updated_at = Timestamp::now();
        self.frameworks.update(&framework).await?;
        Ok(framework)
    }

    /// Fetches a framework.
    ///
    /// # Errors
    ///
    /// - `FrameworkNotFound` if absent
    pub async fn get_framework(&self, id: &FrameworkId) -> Result<Framework, DomainError> {
        self.frameworks
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::framework_not_found(id))
    }

    /// Lists all frameworks.
    pub async fn list_frameworks(&self) -> Result<Vec<Framework>, DomainError> {
        self.frameworks.find_all().await
    }

    /// Deletes a framework.
    pub async fn delete_framework(&self, id: &FrameworkId) -> Result<(), DomainError> {
        self.frameworks.delete(id).await
    }

    /// Validates a framework without persisting anything. Never errs;
    /// always returns the full report.
    pub fn validate_framework(&self, framework: &Framework) -> ValidationReport {
        FrameworkValidator::validate(framework)
    }

    fn ensure_valid(framework: &Framework) -> Result<(), DomainError> {
        let report = FrameworkValidator::validate(framework);
        if report.is_valid {
            return Ok(());
        }
        Err(DomainError::validation("Framework validation failed").with_detail(
            "errors",
            serde_json::to_string(&report.errors).unwrap_or_default(),
        ))
    }

    // === Scenario management ===

    /// Persists a new scenario (placeholder analysis already attached).
    pub async fn create_scenario(&self, scenario: Scenario) -> Result<Scenario, DomainError> {
        self.scenarios.save(&scenario).await?;
        Ok(scenario)
    }

    /// Fetches a scenario.
    ///
    /// # Errors
    ///
    /// - `ScenarioNotFound` if absent
    pub async fn get_scenario(&self, id: &ScenarioId) -> Result<Scenario, DomainError> {
        self.scenarios
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::scenario_not_found(id))
    }

    /// Lists all scenarios.
    pub async fn list_scenarios(&self) -> Result<Vec<Scenario>, DomainError> {
        self.scenarios.find_all().await
    }

    /// Deletes a scenario.
    pub async fn delete_scenario(&self, id: &ScenarioId) -> Result<(), DomainError> {
        self.scenarios.delete(id).await
    }

    /// Replaces or adds raw criterion values on a scenario.
    pub async fn set_criteria_values(
        &self,
        scenario_id: &ScenarioId,
        values: HashMap<CriterionId, CriterionValue>,
    ) -> Result<Scenario, DomainError> {
        let mut scenario = self.get_scenario(scenario_id).await?;
        for (criterion_id, value) in values {
            scenario.set_value(criterion_id, value);
        }
        self.scenarios.update(&scenario).await?;
        Ok(scenario)
    }

    // === Analysis ===

    /// Scores a scenario against a framework and persists the result
    /// back onto the scenario.
    ///
    /// The scoring itself is pure; the write-back is the only side
    /// effect and happens after the result is fully computed.
    ///
    /// # Errors
    ///
    /// - `ScenarioNotFound` / `FrameworkNotFound` if either is absent
    pub async fn analyze_scenario(
        &self,
        scenario_id: &ScenarioId,
        framework_id: &FrameworkId,
    ) -> Result<AnalysisResult, DomainError> {
        let mut scenario = self.get_scenario(scenario_id).await?;
        let framework = self.get_framework(framework_id).await?;

        let result = Scorer::score(&scenario, &framework);

        scenario.record_analysis(result.clone());
        self.scenarios.update(&scenario).await?;

        debug!(
            scenario_id = %scenario_id,
            framework_id = %framework_id,
            overall = result.overall_score.value(),
            recommendation = ?result.recommendation,
            "Analyzed scenario"
        );

        Ok(result)
    }

    /// Compares two or more analyzed scenarios and persists the
    /// comparison record.
    ///
    /// Ids that resolve to no scenario are skipped; at least two must
    /// resolve.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if fewer than two valid scenarios remain
    pub async fn compare_scenarios(
        &self,
        scenario_ids: &[ScenarioId],
    ) -> Result<ScenarioComparison, DomainError> {
        if scenario_ids.len() < 2 {
            return Err(DomainError::validation(
                "At least 2 scenarios are required for comparison",
            ));
        }

        let lookups = join_all(
            scenario_ids
                .iter()
                .map(|id| self.scenarios.find_by_id(id)),
        )
        .await;

        let mut scenarios = Vec::with_capacity(scenario_ids.len());
        for lookup in lookups {
            if let Some(scenario) = lookup? {
                scenarios.push(scenario);
            }
        }

        let outcome = Comparator::compare(&scenarios)?;
        let comparison = ScenarioComparison::from_outcome(outcome);
        self.comparisons.save(&comparison).await?;

        debug!(
            comparison_id = %comparison.id,
            scenarios = comparison.scenario_ids.len(),
            "Compared scenarios"
        );

        Ok(comparison)
    }

    /// Expands structured recommendation records from a scenario's
    /// stored analysis result.
    pub async fn generate_recommendations(
        &self,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<DecisionRecommendation>, DomainError> {
        let scenario = self.get_scenario(scenario_id).await?;
        Ok(generate_recommendations(&scenario.analysis_results))
    }

    // === Templates ===

    /// Persists a new scenario template.
    pub async fn create_template(
        &self,
        template: ScenarioTemplate,
    ) -> Result<ScenarioTemplate, DomainError> {
        self.templates.save(&template).await?;
        Ok(template)
    }

    /// Lists templates, optionally filtered by category label.
    pub async fn list_templates(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<ScenarioTemplate>, DomainError> {
        self.templates.find_all(category).await
    }

    /// Applies a template's default values to a scenario (template
    /// values win on conflict) and records the usage.
    ///
    /// # Errors
    ///
    /// - `TemplateNotFound` / `ScenarioNotFound` if either is absent
    pub async fn apply_template(
        &self,
        template_id: &TemplateId,
        scenario_id: &ScenarioId,
    ) -> Result<Scenario, DomainError> {
        let mut template = self
            .templates
            .find_by_id(template_id)
            .await?
            .ok_or_else(|| DomainError::template_not_found(template_id))?;
        let mut scenario = self.get_scenario(scenario_id).await?;

        scenario.merge_values(&template.default_values);
        self.scenarios.update(&scenario).await?;

        template.record_usage();
        self.templates.update(&template).await?;

        Ok(scenario)
    }

    // === Decision history and analytics ===

    /// Appends a decision record.
    pub async fn record_decision(
        &self,
        record: DecisionHistory,
    ) -> Result<DecisionHistory, DomainError> {
        self.history.append(&record).await?;
        Ok(record)
    }

    /// Decision records for one scenario, in recording order.
    pub async fn scenario_history(
        &self,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<DecisionHistory>, DomainError> {
        self.history.find_by_scenario(scenario_id).await
    }

    /// Aggregated analytics over all recorded decisions, with trend
    /// windows anchored at the current time.
    pub async fn decision_analytics(&self) -> Result<DecisionAnalytics, DomainError> {
        let records = self.history.find_all().await?;
        Ok(AnalyticsCalculator::analyze(&records, Timestamp::now()))
    }
}
