//! First-photo extraction.
//!
//! Walks pages in order and returns the first raster image XObject found,
//! base64-encoded. Resume photos are almost always JPEG (`DCTDecode`), which
//! is returned as stored; raw `FlateDecode` pixels are re-encoded as PNG.

use std::io::Read;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use flate2::read::ZlibDecoder;
use lopdf::xobject::PdfImage;
use lopdf::Document;
use tracing::debug;

/// Result of looking for a photo in a PDF.
///
/// `Absent` and `Failed` both serialize to `null` in responses but are kept
/// apart so logs can tell a photo-less resume from an unreadable one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Base64-encoded image bytes.
    Found(String),
    Absent,
    Failed(String),
}

impl ImageOutcome {
    pub fn into_base64(self) -> Option<String> {
        match self {
            ImageOutcome::Found(encoded) => Some(encoded),
            ImageOutcome::Absent | ImageOutcome::Failed(_) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImageOutcome::Found(_) => "found",
            ImageOutcome::Absent => "absent",
            ImageOutcome::Failed(_) => "failed",
        }
    }
}

/// Returns the first embedded image on the first page that has any.
pub fn extract_first_image(bytes: &[u8]) -> ImageOutcome {
    let doc = match Document::load_mem(bytes) {
        Ok(doc) => doc,
        Err(e) => return ImageOutcome::Failed(format!("failed to load PDF: {e}")),
    };

    for (page_num, page_id) in doc.get_pages() {
        let images = match doc.get_page_images(page_id) {
            Ok(images) => images,
            Err(e) => {
                debug!("Failed to get images from page {page_num}: {e}");
                continue;
            }
        };

        if let Some(first) = images.first() {
            debug!(
                "Using {}x{} image from page {page_num}",
                first.width, first.height
            );
            return ImageOutcome::Found(STANDARD.encode(image_bytes(first)));
        }
    }

    ImageOutcome::Absent
}

/// Runs [`extract_first_image`] on the blocking pool.
pub async fn extract_first_image_blocking(bytes: Bytes) -> ImageOutcome {
    tokio::task::spawn_blocking(move || extract_first_image(&bytes))
        .await
        .unwrap_or_else(|e| ImageOutcome::Failed(format!("image extraction task failed: {e}")))
}

/// Encoded bytes for an image stream. Falls back to the stored stream bytes
/// whenever the pixels cannot be re-encoded.
fn image_bytes(image: &PdfImage) -> Vec<u8> {
    let is_flate = image
        .filters
        .as_ref()
        .is_some_and(|filters| filters.len() == 1 && filters[0] == "FlateDecode");

    if is_flate {
        match flate_to_png(image) {
            Ok(png) => return png,
            Err(e) => debug!("Keeping stored FlateDecode image bytes: {e}"),
        }
    }

    image.content.to_vec()
}

/// Inflates a raw-pixel `FlateDecode` image and encodes it as PNG.
fn flate_to_png(image: &PdfImage) -> Result<Vec<u8>, String> {
    let mut decoder = ZlibDecoder::new(image.content);
    let mut pixels = Vec::new();
    decoder
        .read_to_end(&mut pixels)
        .map_err(|e| format!("decompression failed: {e}"))?;

    if image.bits_per_component.unwrap_or(8) != 8 {
        return Err("unsupported bits per component".to_string());
    }

    let width = u32::try_from(image.width).map_err(|_| "invalid width".to_string())?;
    let height = u32::try_from(image.height).map_err(|_| "invalid height".to_string())?;

    let decoded = match image.color_space.as_deref().unwrap_or("DeviceRGB") {
        "DeviceRGB" | "RGB" => ::image::RgbImage::from_raw(width, height, pixels)
            .map(::image::DynamicImage::ImageRgb8),
        "DeviceGray" | "Gray" | "G" => ::image::GrayImage::from_raw(width, height, pixels)
            .map(::image::DynamicImage::ImageLuma8),
        other => return Err(format!("unsupported colour space '{other}'")),
    };
    let decoded = decoded.ok_or_else(|| "pixel buffer does not match dimensions".to_string())?;

    let mut png = Vec::new();
    decoded
        .write_to(&mut std::io::Cursor::new(&mut png), ::image::ImageFormat::Png)
        .map_err(|e| format!("PNG encoding failed: {e}"))?;
    Ok(png)
}
