use bytes::Bytes;
use serde::Serialize;
use serde_json::{Map, Value};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Field name to value, as returned by the completion service, plus
/// `filename` and `image` once assembled. Callers detect per-file failure
/// by the presence of an `error` key.
pub type ResumeRecord = Map<String, Value>;

/// A record holding nothing but an `error` message.
pub fn error_record(message: impl Into<String>) -> ResumeRecord {
    let mut record = Map::new();
    record.insert("error".to_string(), Value::String(message.into()));
    record
}

/// One file part from the upload form. Lives for a single request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn is_pdf(&self) -> bool {
        self.content_type.as_deref() == Some(PDF_CONTENT_TYPE)
    }
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub results: Vec<ResumeRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_record_has_single_key() {
        let record = error_record("boom");
        assert_eq!(Value::Object(record), json!({ "error": "boom" }));
    }

    #[test]
    fn test_only_exact_pdf_content_type_is_pdf() {
        let file = |content_type: Option<&str>| UploadedFile {
            filename: "cv.pdf".to_string(),
            content_type: content_type.map(str::to_string),
            bytes: Bytes::from_static(b"%PDF"),
        };
        assert!(file(Some("application/pdf")).is_pdf());
        assert!(!file(Some("text/plain")).is_pdf());
        assert!(!file(None).is_pdf());
    }

    #[test]
    fn test_upload_response_serializes_results_list() {
        let response = UploadResponse {
            results: vec![error_record("bad")],
        };
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({ "results": [{ "error": "bad" }] })
        );
    }
}
