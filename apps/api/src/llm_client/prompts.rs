// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You return structured JSON extracted from documents. \
    Under no circumstances should you return anything other than valid JSON. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
