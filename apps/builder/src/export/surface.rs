//! Capture seam between the pipeline and the rendered document surface.

use async_trait::async_trait;
use image::{Rgb, RgbImage, RgbaImage};

use super::ExportError;

/// Options for one capture. The defaults are fixed by the export design:
/// 2x oversampling keeps text legible at print resolution, and the
/// opaque white background stops page transparency from leaking into the
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    pub pixel_ratio: u32,
    pub background: [u8; 3],
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            pixel_ratio: 2,
            background: [255, 255, 255],
        }
    }
}

/// A rendered document surface the pipeline can capture — in production
/// the preview region painted by the UI layer, in tests an in-memory
/// raster.
///
/// `width_px`/`height_px` are the surface's logical device pixels; a
/// capture is expected to return a raster scaled by
/// `options.pixel_ratio`. Capturing is a suspension point: the surface
/// may need a frame to produce its pixels.
#[async_trait]
pub trait RenderSurface: Send + Sync {
    fn width_px(&self) -> u32;
    fn height_px(&self) -> u32;

    async fn capture(&self, options: CaptureOptions) -> Result<RgbaImage, ExportError>;
}

/// Flattens a captured RGBA raster onto an opaque background.
pub fn flatten_onto_background(image: &RgbaImage, background: [u8; 3]) -> RgbImage {
    let mut flat = RgbImage::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let a = a as u16;
        let blend = |fg: u8, bg: u8| ((fg as u16 * a + bg as u16 * (255 - a)) / 255) as u8;
        flat.put_pixel(
            x,
            y,
            Rgb([
                blend(r, background[0]),
                blend(g, background[1]),
                blend(b, background[2]),
            ]),
        );
    }
    flat
}
