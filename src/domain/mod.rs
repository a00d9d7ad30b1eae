//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `framework` - Decision frameworks: weighted criteria, thresholds, validation
//! - `scenario` - Scenarios under evaluation and their analysis results
//! - `history` - Recorded decisions and their eventual outcomes
//! - `analysis` - Pure engines: normalization, scoring, insights, comparison

pub mod analysis;
pub mod foundation;
pub mod framework;
pub mod history;
pub mod scenario;
