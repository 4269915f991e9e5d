//! In-memory PDF builders for tests.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// Bytes stored as a `DCTDecode` stream; only the JPEG SOI/EOI markers are real.
pub const FAKE_JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F', 0xFF, 0xD9];

#[derive(Debug, Clone, Default)]
pub struct PageSpec {
    pub text: Option<String>,
    pub image: Option<ImageSpec>,
}

#[derive(Debug, Clone)]
pub struct ImageSpec {
    pub filter: Option<&'static str>,
    pub color_space: &'static str,
    pub width: i64,
    pub height: i64,
    pub content: Vec<u8>,
}

impl ImageSpec {
    pub fn jpeg() -> Self {
        Self {
            filter: Some("DCTDecode"),
            color_space: "DeviceRGB",
            width: 64,
            height: 64,
            content: FAKE_JPEG.to_vec(),
        }
    }
}

impl PageSpec {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            image: None,
        }
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn image(image: ImageSpec) -> Self {
        Self {
            text: None,
            image: Some(image),
        }
    }

    pub fn with_image(mut self, image: ImageSpec) -> Self {
        self.image = Some(image);
        self
    }
}

/// Builds a PDF with one page per `PageSpec` and returns its serialized bytes.
pub fn pdf_with_pages(pages: &[PageSpec]) -> Vec<u8> {
    build_pdf(pages, true)
}

/// A single blank page whose dictionary has no `MediaBox`, inherited or otherwise.
pub fn pdf_without_media_box() -> Vec<u8> {
    build_pdf(&[PageSpec::blank()], false)
}

fn build_pdf(pages: &[PageSpec], media_box: bool) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let mut operations = Vec::new();
        let mut resources = dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        };

        if let Some(text) = &page.text {
            operations.extend([
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(text.as_str())]),
                Operation::new("ET", vec![]),
            ]);
        }

        if let Some(image) = &page.image {
            let mut image_dict = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => image.width,
                "Height" => image.height,
                "ColorSpace" => image.color_space,
                "BitsPerComponent" => 8,
            };
            if let Some(filter) = image.filter {
                image_dict.set("Filter", Object::Name(filter.as_bytes().to_vec()));
            }
            let image_id = doc.add_object(Stream::new(image_dict, image.content.clone()));
            resources.set("XObject", dictionary! { "Im1" => image_id });
            operations.extend([
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        64.into(),
                        0.into(),
                        0.into(),
                        64.into(),
                        72.into(),
                        600.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im1".into()]),
                Operation::new("Q", vec![]),
            ]);
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode page content"),
        ));
        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources,
        };
        if media_box {
            page_dict.set("MediaBox", vec![0.into(), 0.into(), 612.into(), 792.into()]);
        }
        let page_id = doc.add_object(page_dict);
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize test PDF");
    buf
}
