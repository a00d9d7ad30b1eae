//! In-memory comparison repository.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::analysis::ScenarioComparison;
use crate::domain::foundation::{ComparisonId, DomainError};
use crate::ports::ComparisonRepository;

/// In-memory implementation of the `ComparisonRepository` port.
#[derive(Debug, Clone, Default)]
pub struct InMemoryComparisonRepository {
    items: Arc<RwLock<Vec<ScenarioComparison>>>,
}

impl InMemoryComparisonRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ComparisonRepository for InMemoryComparisonRepository {
    async fn save(&self, comparison: &ScenarioComparison) -> Result<(), DomainError> {
        let mut items = self.items.read().await.clone();
        items.push(comparison.clone());
        *self.items.write().await = items;
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ComparisonId,
    ) -> Result<Option<ScenarioComparison>, DomainError> {
        Ok(self.items.read().await.iter().find(|c| &c.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ScenarioComparison>, DomainError> {
        Ok(self.items.read().await.clone())
    }
}
