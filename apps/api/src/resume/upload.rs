//! Batch validation and the per-file extraction pipeline behind `POST /upload`.

use serde_json::Value;
use tracing::{info, warn};

use crate::config::UploadLimits;
use crate::errors::AppError;
use crate::extract::{extract_first_image_blocking, extract_text_blocking, ImageOutcome, PdfError};
use crate::llm_client::ChatCompletion;
use crate::resume::inference::parse_resume;
use crate::resume::models::{error_record, ResumeRecord, UploadedFile};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Checks the whole batch before any file is processed.
///
/// Empty files are dropped. Any count, size, or content-type violation
/// rejects the entire batch.
pub fn validate_batch(
    files: Vec<UploadedFile>,
    limits: &UploadLimits,
) -> Result<Vec<UploadedFile>, AppError> {
    if files.len() > limits.max_files {
        return Err(too_many_files(limits));
    }

    let mut accepted = Vec::with_capacity(files.len());
    for file in files {
        if file.bytes.is_empty() {
            info!("Skipping empty upload '{}'", file.filename);
            continue;
        }

        if file.bytes.len() > limits.max_file_size {
            return Err(AppError::Validation(format!(
                "Max allowed file size is {}.",
                size_limit_label(limits.max_file_size)
            )));
        }

        if !file.is_pdf() {
            return Err(AppError::Validation("Only PDF files are allowed.".to_string()));
        }

        accepted.push(file);
    }

    Ok(accepted)
}

/// The batch-count rejection. Also raised while the form is still streaming.
pub fn too_many_files(limits: &UploadLimits) -> AppError {
    AppError::Validation(format!("Max {} files allowed per upload.", limits.max_files))
}

/// `5.0MB`, `2.25MB`, or plain bytes for limits under a tenth of a MiB.
fn size_limit_label(max_file_size: usize) -> String {
    let mib = max_file_size as f64 / BYTES_PER_MIB;
    if mib < 0.1 {
        format!("{max_file_size} bytes")
    } else if (mib * 10.0).fract() == 0.0 {
        format!("{mib:.1}MB")
    } else {
        format!("{mib}MB")
    }
}

/// Runs every accepted file through the pipeline, one at a time, in order.
pub async fn process_batch(
    files: Vec<UploadedFile>,
    limits: &UploadLimits,
    llm: &dyn ChatCompletion,
) -> Result<Vec<ResumeRecord>, AppError> {
    let mut results = Vec::with_capacity(files.len());
    for file in files {
        results.push(process_file(file, limits.max_characters, llm).await?);
    }
    Ok(results)
}

/// Text -> inference -> photo, then stamps `filename` and `image` onto the record.
///
/// A file that cannot be opened as a PDF yields an `error` record without
/// calling the completion service. Only a panicked extraction task fails the call.
pub async fn process_file(
    file: UploadedFile,
    max_characters: usize,
    llm: &dyn ChatCompletion,
) -> Result<ResumeRecord, AppError> {
    let UploadedFile {
        filename, bytes, ..
    } = file;

    let (mut record, image) = match extract_text_blocking(bytes.clone()).await {
        Ok(text) => {
            info!(
                "Extracted {} characters from '{filename}' ({} bytes)",
                text.chars().count(),
                bytes.len()
            );
            let record = parse_resume(&text, max_characters, llm).await;
            let image = extract_first_image_blocking(bytes).await;
            (record, image)
        }
        Err(PdfError::Load(e)) => {
            warn!("Unable to read '{filename}' as PDF: {e}");
            (
                error_record(format!("Unable to read PDF: {e}")),
                ImageOutcome::Failed("unreadable PDF".to_string()),
            )
        }
        Err(e @ PdfError::Task(_)) => {
            return Err(AppError::Internal(anyhow::Error::new(e).context(format!(
                "text extraction for '{filename}' did not complete"
            ))));
        }
    };

    match &image {
        ImageOutcome::Failed(reason) => warn!("No image for '{filename}': {reason}"),
        outcome => info!("Image for '{filename}': {}", outcome.label()),
    }

    record.insert("filename".to_string(), Value::String(filename));
    record.insert(
        "image".to_string(),
        image.into_base64().map_or(Value::Null, Value::String),
    );
    Ok(record)
}
