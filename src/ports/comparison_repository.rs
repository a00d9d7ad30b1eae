//! Scenario comparison repository port.

use async_trait::async_trait;

use crate::domain::analysis::ScenarioComparison;
use crate::domain::foundation::{ComparisonId, DomainError};

/// Repository port for persisted scenario comparisons.
#[async_trait]
pub trait ComparisonRepository: Send + Sync {
    /// Save a comparison record.
    async fn save(&self, comparison: &ScenarioComparison) -> Result<(), DomainError>;

    /// Find a comparison by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ComparisonId)
        -> Result<Option<ScenarioComparison>, DomainError>;

    /// All comparisons, in insertion order.
    async fn find_all(&self) -> Result<Vec<ScenarioComparison>, DomainError>;
}
