//! cogniplan-rules
//!
//! The treatment rule table and the planner that applies it. Rules are an
//! ordered list of score intervals checked first-match-wins; a matched rule
//! books exactly one appointment through the scheduler.

pub mod error;
pub mod planner;
pub mod rules;
pub mod scoring;

pub use planner::create_treatment_plan;
pub use rules::{TreatmentRule, classify, rules};
