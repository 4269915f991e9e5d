// PDF extraction: page text and the first embedded photo.
// Both operate on in-memory bytes and are CPU-bound; async callers should
// go through the `*_blocking` wrappers, which run on the blocking pool.

pub mod image;
pub mod text;

#[cfg(test)]
pub(crate) mod fixtures;

use thiserror::Error;

pub use self::image::{extract_first_image_blocking, ImageOutcome};
pub use self::text::extract_text_blocking;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("invalid PDF: {0}")]
    Load(#[from] lopdf::Error),

    #[error("extraction task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
