//! Rendering: composes what the viewport shows.
//!
//! This is the only place the background grid exists. It reads the surface
//! and camera and produces a fresh image; it never mutates application state,
//! so the grid stays out of exports and history.
//!
//! Sampling is nearest-neighbor at every zoom level.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use image::{Pixel, Rgba, RgbaImage};

use crate::camera::{Camera, Point};
use crate::consts::GRID_SPACING_PX;
use crate::surface::{Surface, TRANSPARENT};
use crate::theme::Theme;

/// Color of one surface pixel as displayed: background, grid, then strokes.
#[must_use]
pub fn display_pixel(surface: &Surface, theme: &Theme, x: i64, y: i64) -> Option<Rgba<u8>> {
    let stroke = surface.get_pixel(x, y)?;
    let mut out = theme.background_rgba();
    let spacing = i64::from(GRID_SPACING_PX);
    if x % spacing == 0 || y % spacing == 0 {
        out.blend(&theme.grid);
    }
    out.blend(&stroke);
    Some(out)
}

/// Render a `width × height` viewport. Screen pixels that map off the
/// surface are left transparent for the host to fill with its own chrome.
#[must_use]
pub fn render_view(surface: &Surface, camera: &Camera, theme: &Theme, width: u32, height: u32) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(width, height, TRANSPARENT);
    for (sx, sy, px) in out.enumerate_pixels_mut() {
        let p = camera.screen_to_surface(Point::new(f64::from(sx) + 0.5, f64::from(sy) + 0.5));
        if let Some(color) = display_pixel(surface, theme, p.x.floor() as i64, p.y.floor() as i64) {
            *px = color;
        }
    }
    out
}
