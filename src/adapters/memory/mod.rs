//! In-memory repository implementations.
//!
//! Suitable for testing, development, and single-process deployments.
//! Nothing survives a restart.
//!
//! All five repositories share the same storage discipline: the backing
//! collection is snapshotted, modified, and swapped back in whole.
//! Concurrent updates to the same record resolve last writer wins.

mod comparison;
mod framework;
mod history;
mod scenario;
mod template;

pub use comparison::InMemoryComparisonRepository;
pub use framework::InMemoryFrameworkRepository;
pub use history::InMemoryHistoryRepository;
pub use scenario::InMemoryScenarioRepository;
pub use template::InMemoryTemplateRepository;
