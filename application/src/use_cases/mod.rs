//! Evaluation harnesses built on top of the composite agent.

pub mod collect_responses;
pub mod sweep_referee;
