//! Ports - repository contracts the application layer depends on.
//!
//! Implementations live in `adapters`. Every port is object-safe and
//! returns `DomainError` so callers stay storage-agnostic.

mod comparison_repository;
mod framework_repository;
mod history_repository;
mod scenario_repository;
mod template_repository;

pub use comparison_repository::ComparisonRepository;
pub use framework_repository::FrameworkRepository;
pub use history_repository::HistoryRepository;
pub use scenario_repository::ScenarioRepository;
pub use template_repository::TemplateRepository;
