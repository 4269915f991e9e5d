// Resume extraction: batch validation, PDF extraction, and field inference.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod handlers;
pub mod inference;
pub mod models;
pub mod prompts;
pub mod upload;
