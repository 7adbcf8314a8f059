//! Cropped export of the painted region.
//!
//! The crop covers the tracked bounds plus a margin, rounded up to a fixed
//! grid with a minimum size, composited over the theme background, and
//! encoded as PNG.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use std::io::Cursor;

use image::{ImageFormat, RgbaImage, imageops};

use crate::bounds::Bounds;
use crate::consts::{EXPORT_GRID_SNAP, EXPORT_MARGIN_PX, EXPORT_MIN_SIZE};
use crate::error::CanvasError;
use crate::surface::Surface;
use crate::theme::Theme;

/// Export sizing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Padding added on every side of the painted bounds.
    pub margin_px: u32,
    /// Output dimensions are rounded up to a multiple of this.
    pub grid_snap: u32,
    /// Output dimensions never drop below this.
    pub min_size: u32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { margin_px: EXPORT_MARGIN_PX, grid_snap: EXPORT_GRID_SNAP, min_size: EXPORT_MIN_SIZE }
    }
}

impl ExportOptions {
    /// Output length for a painted span along one axis.
    #[must_use]
    pub fn snapped_len(&self, span: f64) -> u32 {
        let snap = f64::from(self.grid_snap.max(1));
        let padded = span.max(0.0) + 2.0 * f64::from(self.margin_px);
        let snapped = ((padded / snap).ceil() * snap) as u32;
        snapped.max(self.min_size)
    }
}

/// A cropped, background-composited copy of the painted region.
///
/// Owns its pixels, so it is a point-in-time copy: the surface can keep
/// changing while the export is encoded or uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportCrop {
    /// Surface x of the crop's left edge.
    pub origin_x: u32,
    /// Surface y of the crop's top edge.
    pub origin_y: u32,
    pub image: RgbaImage,
}

impl ExportCrop {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Encode as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Encode`] if the encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        encode_png(&self.image)
    }

    /// File name for a saved export, e.g. `segmentation_mask_256x320_2026-01-02T03-04-05.png`.
    #[must_use]
    pub fn file_name(&self, timestamp: &str) -> String {
        format!("segmentation_mask_{}x{}_{timestamp}.png", self.width(), self.height())
    }
}

/// Encode any RGBA image (an export crop or a rendered view) as PNG bytes.
///
/// # Errors
///
/// Returns [`CanvasError::Encode`] if the encoder fails.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CanvasError> {
    let mut buf = Vec::new();
    image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Crop the painted region of `surface` onto a solid `theme` background.
///
/// # Errors
///
/// Returns [`CanvasError::EmptyCanvas`] if nothing has been painted.
pub fn export_crop(
    surface: &Surface,
    bounds: &Bounds,
    theme: &Theme,
    options: ExportOptions,
) -> Result<ExportCrop, CanvasError> {
    if bounds.is_empty() {
        return Err(CanvasError::EmptyCanvas);
    }

    let width = options.snapped_len(bounds.max_x - bounds.min_x);
    let height = options.snapped_len(bounds.max_y - bounds.min_y);
    let margin = f64::from(options.margin_px);
    let size = surface.size();
    let origin_x = ((bounds.min_x - margin).floor().max(0.0) as u32).min(size);
    let origin_y = ((bounds.min_y - margin).floor().max(0.0) as u32).min(size);

    let mut image = RgbaImage::from_pixel(width, height, theme.background_rgba());
    let source = imageops::crop_imm(surface.image(), origin_x, origin_y, width, height).to_image();
    imageops::overlay(&mut image, &source, 0, 0);

    tracing::info!(width, height, origin_x, origin_y, "exported mask crop");
    Ok(ExportCrop { origin_x, origin_y, image })
}
