//! Brush rasterization: single dabs and gap-free interpolated strokes.
//!
//! Dabs are solid and aliased. Mask classes must stay pure colors, so there is
//! no anti-aliasing, opacity, or blending: a dab either overwrites a pixel with
//! the brush color or leaves it alone.
//!
//! Geometry is integer-centered. A dab at `(x, y)` is centered on the pixel
//! `(floor(x), floor(y))`, which keeps a 1 px brush from vanishing between
//! pixel centers.

#[cfg(test)]
#[path = "brush_test.rs"]
mod brush_test;

use image::Rgba;

use crate::bounds::Bounds;
use crate::camera::Point;
use crate::consts::BRUSH_SPACING_DIVISOR;
use crate::palette::BrushShape;
use crate::surface::{PixelRect, Surface};

/// Brush parameters captured at the start of a stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    /// Diameter (disc) or side length (square), in surface pixels. Always >= 1.
    pub size: u32,
    pub shape: BrushShape,
    /// Value written into covered pixels; transparent for the eraser.
    pub color: Rgba<u8>,
}

impl Brush {
    /// Distance between interpolated dabs.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        f64::from(self.size.max(1)) / BRUSH_SPACING_DIVISOR
    }
}

/// Bounding box of a dab at `center`, before clipping.
#[must_use]
pub fn dab_rect(center: Point, size: u32, shape: BrushShape) -> PixelRect {
    let cx = center.x.floor() as i64;
    let cy = center.y.floor() as i64;
    let size = size.max(1);
    match shape {
        BrushShape::Square => {
            let half = i64::from(size / 2);
            PixelRect::new(cx - half, cy - half, size, size)
        }
        BrushShape::Disc => {
            let reach = (f64::from(size) / 2.0).ceil() as i64;
            let side = (2 * reach + 1) as u32;
            PixelRect::new(cx - reach, cy - reach, side, side)
        }
    }
}

/// Rasterize one dab. Returns the clipped rectangle it touched, or `None`
/// if the dab fell entirely off the surface.
pub fn stamp(surface: &mut Surface, brush: &Brush, center: Point) -> Option<PixelRect> {
    let rect = dab_rect(center, brush.size, brush.shape);
    let (x0, y0, x1, y1) = surface.clip(rect)?;
    let clipped = PixelRect::new(i64::from(x0), i64::from(y0), x1 - x0, y1 - y0);

    match brush.shape {
        BrushShape::Square => surface.fill_rect(clipped, brush.color),
        BrushShape::Disc => {
            let cx = center.x.floor() as i64;
            let cy = center.y.floor() as i64;
            let radius = f64::from(brush.size.max(1)) / 2.0;
            let r_sq = radius * radius;
            for y in clipped.y..clipped.bottom() {
                for x in clipped.x..clipped.right() {
                    let dx = (x - cx) as f64;
                    let dy = (y - cy) as f64;
                    if dx * dx + dy * dy <= r_sq {
                        surface.set_pixel(x, y, brush.color);
                    }
                }
            }
        }
    }
    Some(clipped)
}

/// Stamp a dab and grow `bounds` if it touched the surface.
fn stamp_tracked(surface: &mut Surface, bounds: &mut Bounds, brush: &Brush, center: Point) {
    if stamp(surface, brush, center).is_some() {
        bounds.extend(center.x, center.y, f64::from(brush.size));
    }
}

/// Per-gesture stroke state, created on pointer-down and dropped on pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeState {
    /// Brush settings read when the stroke began.
    pub brush: Brush,
    /// Last position a dab was interpolated to.
    pub last: Point,
    /// Every pointer position of the gesture, in surface space, for closed-loop detection.
    pub points: Vec<Point>,
    /// Cleared when the gesture ends.
    pub active: bool,
}

impl StrokeState {
    /// Start a stroke: one dab at `point`.
    pub fn begin(surface: &mut Surface, bounds: &mut Bounds, brush: Brush, point: Point) -> Self {
        stamp_tracked(surface, bounds, &brush, point);
        Self { brush, last: point, points: vec![point], active: true }
    }

    /// Extend the stroke to `point`, filling the gap from the previous point
    /// with evenly spaced dabs. Returns the number of dabs drawn.
    pub fn continue_to(&mut self, surface: &mut Surface, bounds: &mut Bounds, point: Point) -> usize {
        if !self.active {
            return 0;
        }
        self.points.push(point);

        let distance = self.last.distance(point);
        let steps = ((distance / self.brush.spacing()).ceil() as usize).max(1);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            stamp_tracked(surface, bounds, &self.brush, self.last.lerp(point, t));
        }
        self.last = point;
        steps + 1
    }

    /// Mark the gesture finished; further `continue_to` calls are ignored.
    pub fn finish(&mut self) {
        self.active = false;
    }
}
