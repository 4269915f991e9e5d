//! Axum route handlers for the Resume API.

use axum::{
    extract::{
        multipart::{Field, MultipartError, MultipartRejection},
        Multipart, State,
    },
    Json,
};
use bytes::{Bytes, BytesMut};
use tracing::{info, warn};

use crate::config::UploadLimits;
use crate::errors::AppError;
use crate::resume::models::{UploadResponse, UploadedFile};
use crate::resume::upload::{process_batch, too_many_files, validate_batch};
use crate::state::AppState;

/// Multipart field carrying the uploaded PDFs.
pub const RESUMES_FIELD: &str = "resumes";

/// POST /upload
///
/// Validates the whole batch, then extracts fields, photo, and filename
/// from each PDF in upload order.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let multipart = multipart.map_err(|e| AppError::UnprocessableEntity(e.body_text()))?;
    let limits = state.config.limits;
    let files = read_resumes(multipart, &limits).await?;
    if files.is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "Field '{RESUMES_FIELD}' is required"
        )));
    }

    let accepted = validate_batch(files, &limits)?;
    info!("Processing {} resume(s)", accepted.len());

    let results = process_batch(accepted, &limits, state.llm.as_ref()).await?;

    Ok(Json(UploadResponse { results }))
}

/// Reads every `resumes` part in form order. Other parts are ignored.
///
/// Fails as soon as a part beyond `max_files` starts. Each part keeps at most
/// one byte past `max_file_size`, which is enough for [`validate_batch`] to
/// reject it; the rest of an oversized part is read and discarded.
async fn read_resumes(
    mut multipart: Multipart,
    limits: &UploadLimits,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();

    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(RESUMES_FIELD) {
            continue;
        }

        if files.len() >= limits.max_files {
            warn!("Upload exceeds {} files, rejecting", limits.max_files);
            return Err(too_many_files(limits));
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = read_capped(&mut field, limits.max_file_size.saturating_add(1)).await?;

        files.push(UploadedFile {
            filename,
            content_type,
            bytes,
        });
    }

    Ok(files)
}

async fn read_capped(field: &mut Field<'_>, cap: usize) -> Result<Bytes, MultipartError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = field.chunk().await? {
        let room = cap.saturating_sub(buf.len());
        buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
    }
    Ok(buf.freeze())
}
