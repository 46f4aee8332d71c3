// Relay: one parameterized request/response cycle per prompt template.
// All completion calls go through llm_client.

pub mod handlers;
pub mod payload;
pub mod prompts;
pub mod service;
pub mod templates;
