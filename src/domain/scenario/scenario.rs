//! Scenario aggregate - one opportunity being evaluated.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, ScenarioId, Timestamp};
use crate::domain::framework::CriterionValue;

use super::AnalysisResult;

/// Lifecycle status of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    Draft,
    InProgress,
    Completed,
    Archived,
}

/// One opportunity under evaluation: raw answers to the framework's
/// criteria plus the most recent analysis result.
///
/// `analysis_results` is initialized to a zeroed placeholder at creation
/// and replaced wholesale by each analysis; it is a frozen copy, not a
/// live view of the framework that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    pub project_name: String,
    pub created_by: String,
    pub status: ScenarioStatus,
    pub criteria_values: HashMap<CriterionId, CriterionValue>,
    pub analysis_results: AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_analyzed: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Scenario {
    /// Creates a draft scenario with an empty value map and a
    /// placeholder analysis.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        project_name: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: ScenarioId::new(),
            name: name.into(),
            description: description.into(),
            project_name: project_name.into(),
            created_by: created_by.into(),
            status: ScenarioStatus::Draft,
            criteria_values: HashMap::new(),
            analysis_results: AnalysisResult::placeholder(),
            last_analyzed: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the raw value for a criterion.
    pub fn set_value(&mut self, criterion_id: CriterionId, value: CriterionValue) {
        self.criteria_values.insert(criterion_id, value);
        self.updated_at = Timestamp::now();
    }

    /// Returns the raw value for a criterion, if present.
    pub fn value_for(&self, criterion_id: &CriterionId) -> Option<&CriterionValue> {
        self.criteria_values.get(criterion_id)
    }

    /// Merges default values over this scenario's values; defaults win
    /// on conflict.
    pub fn merge_values(&mut self, defaults: &HashMap<CriterionId, CriterionValue>) {
        for (id, value) in defaults {
            self.criteria_values.insert(*id, value.clone());
        }
        self.updated_at = Timestamp::now();
    }

    /// Attaches a fresh analysis result and marks the scenario completed.
    pub fn record_analysis(&mut self, result: AnalysisResult) {
        self.analysis_results = result;
        self.status = ScenarioStatus::Completed;
        let now = Timestamp::now();
        self.last_analyzed = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scenario::Recommendation;

    #[test]
    fn new_scenario_starts_draft_with_placeholder_analysis() {
        let scenario = Scenario::new("Metro tender", "", "Metro line 3", "analyst");
        assert_eq!(scenario.status, ScenarioStatus::Draft);
        assert!(scenario.criteria_values.is_empty());
        assert!(scenario.last_analyzed.is_none());
        assert_eq!(scenario.analysis_results, AnalysisResult::placeholder());
    }

    #[test]
    fn set_value_stores_and_overwrites() {
        let mut scenario = Scenario::new("S", "", "P", "u");
        let id = CriterionId::new();

        scenario.set_value(id, CriterionValue::Numeric(10.0));
        scenario.set_value(id, CriterionValue::Numeric(20.0));

        assert_eq!(scenario.value_for(&id), Some(&CriterionValue::Numeric(20.0)));
    }

    #[test]
    fn merge_values_lets_defaults_win() {
        let mut scenario = Scenario::new("S", "", "P", "u");
        let kept = CriterionId::new();
        let overridden = CriterionId::new();
        scenario.set_value(kept, CriterionValue::Boolean(true));
        scenario.set_value(overridden, CriterionValue::Numeric(1.0));

        let mut defaults = HashMap::new();
        defaults.insert(overridden, CriterionValue::Numeric(9.0));
        scenario.merge_values(&defaults);

        assert_eq!(scenario.value_for(&kept), Some(&CriterionValue::Boolean(true)));
        assert_eq!(
            scenario.value_for(&overridden),
            Some(&CriterionValue::Numeric(9.0))
        );
    }

    #[test]
    fn record_analysis_completes_the_scenario() {
        let mut scenario = Scenario::new("S", "", "P", "u");
        let mut result = AnalysisResult::placeholder();
        result.recommendation = Recommendation::Bid;

        scenario.record_analysis(result.clone());

        assert_eq!(scenario.status, ScenarioStatus::Completed);
        assert!(scenario.last_analyzed.is_some());
        assert_eq!(scenario.analysis_results, result);
    }
}
