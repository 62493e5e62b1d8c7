//! PDF Assembly — builds the multi-page A4 document from band rasters.
//!
//! Each band becomes a DeviceRGB image XObject (Flate-compressed raw
//! pixels) drawn from the top of its own A4 page at full page width.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::ExportError;

const POINTS_PER_MM: f32 = 72.0 / 25.4;
pub const PAGE_WIDTH_PT: f32 = 210.0 * POINTS_PER_MM;
pub const PAGE_HEIGHT_PT: f32 = 297.0 * POINTS_PER_MM;

/// One output page: the band's pixels and its height once scaled onto
/// the page.
#[derive(Debug, Clone)]
pub struct PageImage {
    pub pixels: RgbImage,
    pub height_mm: f64,
}

/// Assembles the pages into a single PDF, in page order.
pub fn assemble_pdf(pages: &[PageImage]) -> Result<Vec<u8>, ExportError> {
    if pages.is_empty() {
        return Err(ExportError::Pdf("document has no pages".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let mut page_ids = Vec::with_capacity(pages.len());
    for page in pages {
        let image_id = doc.add_object(image_xobject(&page.pixels)?);
        let resources_id = doc.add_object(dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        });

        let content = page_content(page)?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH_PT.into(), PAGE_HEIGHT_PT.into()],
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        page_ids.push(page_id.into());
    }

    let count = page_ids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => page_ids,
        "Count" => count,
    };
    doc.objects.insert(pages_id, pages_dict.into());

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(bytes)
}

/// Flate-compressed DeviceRGB image XObject for one band.
fn image_xobject(pixels: &RgbImage) -> Result<Stream, ExportError> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(pixels.as_raw())?;
    let data = encoder.finish()?;

    Ok(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => pixels.width() as i64,
            "Height" => pixels.height() as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        data,
    ))
}

/// Content stream placing the band image at the page origin (top-left),
/// scaled to the full page width.
fn page_content(page: &PageImage) -> Result<Vec<u8>, ExportError> {
    let height_pt = page.height_mm as f32 * POINTS_PER_MM;
    // PDF user space is bottom-up; anchor the band to the top edge.
    let bottom = PAGE_HEIGHT_PT - height_pt;

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    PAGE_WIDTH_PT.into(),
                    0.into(),
                    0.into(),
                    height_pt.into(),
                    0.into(),
                    bottom.into(),
                ],
            ),
            Operation::new("Do", vec!["Im0".into()]),
            Operation::new("Q", vec![]),
        ],
    };
    content
        .encode()
        .map_err(|e| ExportError::Pdf(e.to_string()))
}
