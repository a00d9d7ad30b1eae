//! Decision history repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ScenarioId};
use crate::domain::history::DecisionHistory;

/// Repository port for recorded decisions.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append a decision record.
    async fn append(&self, record: &DecisionHistory) -> Result<(), DomainError>;

    /// All records, in insertion order.
    async fn find_all(&self) -> Result<Vec<DecisionHistory>, DomainError>;

    /// Records for one scenario, in insertion order.
    async fn find_by_scenario(
        &self,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<DecisionHistory>, DomainError>;
}
