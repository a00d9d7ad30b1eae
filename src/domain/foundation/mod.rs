//! Shared domain primitives: identifiers, errors, and value objects.

mod category;
mod errors;
mod ids;
mod score;
mod timestamp;

pub use category::Category;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ComparisonId, CriterionId, FrameworkId, HistoryId, ScenarioId, TemplateId};
pub use score::Score;
pub use timestamp::Timestamp;
