//! Page-by-page text extraction.
//!
//! Each page's text is trimmed before joining, so the blank lines lopdf
//! emits around text objects never stack up between pages. Pages that are
//! empty after trimming are dropped.

use std::panic::{catch_unwind, AssertUnwindSafe};

use bytes::Bytes;
use lopdf::Document;
use tracing::{debug, warn};

use super::PdfError;

/// Extracts the text of every page in page order, joining non-empty pages with `\n`.
///
/// Returns an empty string when no page yields text. Fails only when the
/// bytes cannot be opened as a PDF document.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let doc = Document::load_mem(bytes)?;

    let pages: Vec<String> = doc
        .get_pages()
        .keys()
        .filter_map(|&page_num| match doc.extract_text(&[page_num]) {
            Ok(text) => Some(text.trim().to_string()),
            Err(e) => {
                debug!("Failed to extract text from page {page_num}: {e}");
                None
            }
        })
        .filter(|text| !text.is_empty())
        .collect();

    if !pages.is_empty() {
        return Ok(pages.join("\n"));
    }

    // lopdf cannot decode every font encoding; pdf-extract handles CID fonts and ToUnicode maps.
    // pdf-extract panics on some documents lopdf accepts, e.g. a page without a MediaBox.
    match catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(Ok(text)) => Ok(text.trim().to_string()),
        Ok(Err(e)) => {
            warn!("Fallback text extraction failed: {e}");
            Ok(String::new())
        }
        Err(_) => {
            warn!("Fallback text extraction panicked");
            Ok(String::new())
        }
    }
}

/// Runs [`extract_text`] on the blocking pool.
pub async fn extract_text_blocking(bytes: Bytes) -> Result<String, PdfError> {
    tokio::task::spawn_blocking(move || extract_text(&bytes)).await?
}
