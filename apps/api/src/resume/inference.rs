//! Resume field inference: turns resume text into a JSON field mapping.

use serde_json::Value;
use tracing::{debug, warn};

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{strip_json_fences, ChatCompletion, ChatMessage, ChatRequest};
use crate::resume::models::{error_record, ResumeRecord};
use crate::resume::prompts::{RESUME_FIELDS, RESUME_PARSE_PROMPT};

/// Deterministic sampling for extraction.
pub const TEMPERATURE: f32 = 0.0;

/// Returns the longest prefix of `text` holding at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Builds the chat request for `text`, truncated to `max_chars` characters.
pub fn build_request(text: &str, max_chars: usize) -> ChatRequest {
    let prompt = RESUME_PARSE_PROMPT.replace("{resume_text}", truncate_chars(text, max_chars));
    ChatRequest {
        messages: vec![ChatMessage::system(JSON_ONLY_SYSTEM), ChatMessage::user(prompt)],
        temperature: TEMPERATURE,
    }
}

/// Asks the completion service for the resume fields in `text`.
///
/// Never fails: a decode failure or any service error becomes a record
/// holding a single `error` key. The model's JSON is not validated.
pub async fn parse_resume(text: &str, max_chars: usize, llm: &dyn ChatCompletion) -> ResumeRecord {
    let request = build_request(text, max_chars);

    let content = match llm.complete(&request).await {
        Ok(content) => content,
        Err(e) => {
            warn!("Resume inference failed: {e}");
            return error_record(e.to_string());
        }
    };

    match serde_json::from_str::<Value>(strip_json_fences(&content)) {
        Ok(Value::Object(fields)) => {
            let missing = RESUME_FIELDS
                .iter()
                .filter(|field| !fields.contains_key(**field))
                .count();
            if missing > 0 {
                debug!("Completion omitted {missing} of {} requested fields", RESUME_FIELDS.len());
            }
            fields
        }
        Ok(other) => {
            warn!("Completion was JSON but not an object");
            error_record(format!(
                "Expected a JSON object from the completion service, got {}",
                json_kind(&other)
            ))
        }
        Err(e) => {
            warn!("Completion was not valid JSON: {e}");
            error_record(format!("Unable to decode completion response as JSON: {e}"))
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
