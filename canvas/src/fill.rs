//! Region fill: stack-based flood fill and the closed-stroke trigger.
//!
//! The fill grows 4-connected through pixels the theme classifies as
//! background, writing into a working copy that is committed to the surface
//! in one step. It uses an explicit stack, so region size is bounded only by
//! the surface, never by call-stack depth.

#[cfg(test)]
#[path = "fill_test.rs"]
mod fill_test;

use image::Rgba;

use crate::camera::Point;
use crate::consts::{CLOSED_STROKE_GAP_FACTOR, CLOSED_STROKE_MIN_POINTS};
use crate::surface::{PixelRect, Surface};
use crate::theme::Theme;

/// Fill the background region containing `seed` with `color`.
///
/// Returns `false` without touching the surface when the seed is off the
/// surface or does not classify as background. Otherwise returns `true` and
/// the number of filled pixels is logged at debug level.
pub fn flood_fill(surface: &mut Surface, seed: Point, color: Rgba<u8>, theme: &Theme) -> bool {
    flood_fill_region(surface, seed, color, theme).is_some()
}

/// Same as [`flood_fill`], but reports the bounding rect of the filled pixels.
pub fn flood_fill_region(surface: &mut Surface, seed: Point, color: Rgba<u8>, theme: &Theme) -> Option<PixelRect> {
    let sx = seed.x.floor() as i64;
    let sy = seed.y.floor() as i64;
    let start = surface.get_pixel(sx, sy)?;
    if !theme.is_background(start) {
        return None;
    }

    let size = surface.size();
    let width = size as usize;
    let mut work = surface.image().clone();
    let mut visited = vec![false; width * width];
    let mut stack = vec![(sx as u32, sy as u32)];
    visited[sy as usize * width + sx as usize] = true;
    let mut filled = 0usize;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (sx as u32, sy as u32, sx as u32, sy as u32);

    while let Some((x, y)) = stack.pop() {
        if !theme.is_background(*work.get_pixel(x, y)) {
            continue;
        }
        work.put_pixel(x, y, color);
        filled += 1;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);

        let neighbors = [
            (x.checked_sub(1), Some(y)),
            (x.checked_add(1).filter(|&nx| nx < size), Some(y)),
            (Some(x), y.checked_sub(1)),
            (Some(x), y.checked_add(1).filter(|&ny| ny < size)),
        ];
        for (nx, ny) in neighbors {
            let (Some(nx), Some(ny)) = (nx, ny) else {
                continue;
            };
            let vi = ny as usize * width + nx as usize;
            if !visited[vi] {
                visited[vi] = true;
                stack.push((nx, ny));
            }
        }
    }

    surface.commit(work);
    tracing::debug!(seed_x = sx, seed_y = sy, filled, "flood fill applied");
    Some(PixelRect::new(i64::from(min_x), i64::from(min_y), max_x - min_x + 1, max_y - min_y + 1))
}

/// Decide whether a finished stroke closes a loop, and where to seed its fill.
///
/// This is a heuristic, not a geometric closure test: the stroke needs more
/// than [`CLOSED_STROKE_MIN_POINTS`] points, and its first and last points must
/// lie within `brush_size * 2` of each other. The seed is the centroid of all
/// recorded points, which can land outside a concave loop (and then either
/// fill the wrong region or hit paint and do nothing).
#[must_use]
pub fn closed_loop_seed(points: &[Point], brush_size: u32) -> Option<Point> {
    if points.len() <= CLOSED_STROKE_MIN_POINTS {
        return None;
    }
    let first = *points.first()?;
    let last = *points.last()?;
    if first.distance(last) >= f64::from(brush_size) * CLOSED_STROKE_GAP_FACTOR {
        return None;
    }
    let n = points.len() as f64;
    let (sum_x, sum_y) = points.iter().fold((0.0, 0.0), |(ax, ay), p| (ax + p.x, ay + p.y));
    Some(Point::new(sum_x / n, sum_y / n))
}
