// Export pipeline: captures the rendered document surface as a raster,
// partitions it into page-height bands, and assembles an A4 PDF.

pub mod paginate;
pub mod pdf;
pub mod pipeline;
pub mod surface;

use thiserror::Error;

pub use paginate::{plan_pages, Band, PagePlan, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
pub use pipeline::{ExportPipeline, RESUME_PDF_FILENAME};
pub use surface::{CaptureOptions, RenderSurface};

#[derive(Debug, Error)]
pub enum ExportError {
    /// The preview element the pipeline was pointed at does not exist.
    #[error("Render surface not found")]
    SurfaceMissing,

    /// The surface exists but has no painted area to capture.
    #[error("Render surface has not painted yet ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("Surface capture failed: {0}")]
    Capture(String),

    #[error("PDF assembly failed: {0}")]
    Pdf(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
