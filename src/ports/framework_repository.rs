//! Framework repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FrameworkId};
use crate::domain::framework::Framework;

/// Repository port for decision framework persistence.
#[async_trait]
pub trait FrameworkRepository: Send + Sync {
    /// Save a new framework.
    async fn save(&self, framework: &Framework) -> Result<(), DomainError>;

    /// Update an existing framework.
    ///
    /// # Errors
    ///
    /// - `FrameworkNotFound` if the framework doesn't exist
    async fn update(&self, framework: &Framework) -> Result<(), DomainError>;

    /// Find a framework by its ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &FrameworkId) -> Result<Option<Framework>, DomainError>;

    /// All frameworks, in insertion order.
    async fn find_all(&self) -> Result<Vec<Framework>, DomainError>;

    /// Delete a framework by ID. Deleting an absent framework is a no-op.
    async fn delete(&self, id: &FrameworkId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framework_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn FrameworkRepository) {}
    }
}
