//! Adapters - implementations of port interfaces and outward-facing
//! rendering.
//!
//! - `memory` - in-memory repository implementations
//! - `report` - English rendering of structured analysis records

pub mod memory;
pub mod report;

pub use memory::{
    InMemoryComparisonRepository, InMemoryFrameworkRepository, InMemoryHistoryRepository,
    InMemoryScenarioRepository, InMemoryTemplateRepository,
};
