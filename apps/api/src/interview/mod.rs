// Mock interview engine: question generation, answer evaluation, final report.
// All oracle calls go through llm_client; all session state goes through session_store.

pub mod evaluator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod questions;
pub mod report;
pub mod session_store;

#[cfg(test)]
pub mod fixtures;
