//! Recorded decisions and their eventual outcomes.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{HistoryId, ScenarioId, Timestamp, ValidationError};
use crate::domain::scenario::Recommendation;

/// Eventual outcome of a bid decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionOutcome {
    Won,
    Lost,
    Cancelled,
    Pending,
}

/// A decision taken on a scenario, recorded for later analytics.
///
/// `accuracy` is a caller-supplied retrospective measure (0-100) of how
/// well the analysis predicted the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionHistory {
    pub id: HistoryId,
    pub scenario_id: ScenarioId,
    pub decision: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<DecisionOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    pub decision_date: Timestamp,
    pub notes: String,
}

impl DecisionHistory {
    /// Records a decision taken now, with no outcome yet.
    pub fn new(scenario_id: ScenarioId, decision: Recommendation) -> Self {
        Self {
            id: HistoryId::new(),
            scenario_id,
            decision,
            outcome: None,
            accuracy: None,
            decision_date: Timestamp::now(),
            notes: String::new(),
        }
    }

    /// Sets the eventual outcome.
    pub fn with_outcome(mut self, outcome: DecisionOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Sets the retrospective accuracy measure.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if the accuracy is outside 0-100.
    pub fn with_accuracy(mut self, accuracy: f64) -> Result<Self, ValidationError> {
        if !(0.0..=100.0).contains(&accuracy) {
            return Err(ValidationError::out_of_range("accuracy", 0.0, 100.0, accuracy));
        }
        self.accuracy = Some(accuracy);
        Ok(self)
    }

    /// Sets the decision date (defaults to now at construction).
    pub fn with_decision_date(mut self, date: Timestamp) -> Self {
        self.decision_date = date;
        self
    }
}
