//! In-memory decision history repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ScenarioId};
use crate::domain::history::DecisionHistory;
use crate::ports::HistoryRepository;

/// In-memory implementation of the `HistoryRepository` port.
///
/// Records are append-only; there is no update path.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryRepository {
    items: Arc<RwLock<Vec<DecisionHistory>>>,
}

impl InMemoryHistoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn append(&self, record: &DecisionHistory) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        items.push(record.clone());
        *self.items.write().await = items;
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<DecisionHistory>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_scenario(
        &self,
        scenario_id: &ScenarioId,
    ) -> Result<Vec<DecisionHistory>, DomainError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|r| &r.scenario_id == scenario_id)
            .cloned()
            .collect())
    }
}
