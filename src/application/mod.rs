//! Application layer - the decision support service orchestrating the
//! pure engines over repository ports.

mod decision_service;

pub use decision_service::DecisionSupportService;
