//! Export Pipeline — orchestrates one export job.
//!
//! A job captures the rendered surface once, partitions the raster into
//! page bands, assembles the PDF, and saves it under a fixed name. The
//! job holds no state between invocations: a failed export leaves no
//! partial file, and re-invoking performs a full fresh capture.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bytes::Bytes;
use image::imageops;
use tracing::{debug, info};

use crate::config::Config;

use super::paginate::plan_pages;
use super::pdf::{assemble_pdf, PageImage};
use super::surface::{flatten_onto_background, CaptureOptions, RenderSurface};
use super::ExportError;

/// Fixed name of the saved artifact.
pub const RESUME_PDF_FILENAME: &str = "resume.pdf";

/// Short pause before capture so a "generating" indicator can paint
/// before the capture work starts.
const PAINT_DELAY: Duration = Duration::from_millis(100);

pub struct ExportPipeline {
    output_dir: PathBuf,
}

impl ExportPipeline {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.export_output_dir.clone())
    }

    /// Runs one export job and saves the artifact under the fixed
    /// filename in the output directory. Returns the saved path.
    pub async fn export(&self, surface: &dyn RenderSurface) -> Result<PathBuf, ExportError> {
        let bytes = self.render_pdf(surface).await?;
        let path = self.output_dir.join(RESUME_PDF_FILENAME);
        std::fs::write(&path, &bytes)?;
        info!("Saved resume PDF to {}", path.display());
        Ok(path)
    }

    /// Runs one export job and returns the PDF bytes without saving.
    pub async fn render_pdf(&self, surface: &dyn RenderSurface) -> Result<Bytes, ExportError> {
        tokio::time::sleep(PAINT_DELAY).await;

        if surface.width_px() == 0 || surface.height_px() == 0 {
            return Err(ExportError::EmptySurface {
                width: surface.width_px(),
                height: surface.height_px(),
            });
        }

        let options = CaptureOptions::default();
        let captured = surface.capture(options).await?;
        let raster = flatten_onto_background(&captured, options.background);

        // Bands are planned on the captured raster itself — at 2x
        // oversampling both dimensions scale together, so the page
        // breaks land on the same content rows as on the surface.
        let plan = plan_pages(raster.width(), raster.height())?;
        debug!(
            "Export: {}x{} raster over {} page(s)",
            raster.width(),
            raster.height(),
            plan.page_count()
        );

        let mut pages = Vec::with_capacity(plan.bands.len());
        for band in &plan.bands {
            let pixels =
                imageops::crop_imm(&raster, 0, band.top_px, raster.width(), band.height_px)
                    .to_image();
            pages.push(PageImage {
                pixels,
                height_mm: plan.band_height_mm(*band),
            });
        }

        let bytes = assemble_pdf(&pages)?;
        Ok(Bytes::from(bytes))
    }
}

/// Resolves the render surface for an export request; `None` means the
/// preview element is missing and the job must abort before capture.
pub fn require_surface<S: RenderSurface>(surface: Option<S>) -> Result<S, ExportError> {
    surface.ok_or(ExportError::SurfaceMissing)
}
