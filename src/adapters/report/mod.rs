//! Report rendering - turns structured analysis records into English
//! text for user-facing surfaces.
//!
//! The domain layer emits enums and numeric bases only; every sentence
//! a user reads is produced here. Keeping the wording in one place
//! means translations or tone changes never touch the engines.

mod analysis;
mod comparison;
mod recommendation;
mod validation;

pub use analysis::{assumption_text, render_insight, render_key_factor};
pub use comparison::{render_comparison_insight, render_comparison_recommendation};
pub use recommendation::{
    action_label, condition_text, metric_text, mitigation_text, outcome_text, priority_label,
    render_recommendation, resource_text, timeline_text,
};
pub use validation::{render_issue, render_report, render_suggestion, render_warning};
