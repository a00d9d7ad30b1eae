//! Bidwise - Bid/No-Bid Decision Support Engine
//!
//! Scores candidate opportunities ("scenarios") against configurable
//! multi-criteria frameworks and produces bid / no-bid / conditional-bid
//! recommendations, risk classifications, and ranked multi-scenario
//! comparisons.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
