//! Viewport transform: pan offset and zoom between screen and surface space.
//!
//! The camera only affects coordinate mapping and where the surface is drawn
//! on screen; it never touches pixel data.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN};

/// A point in either screen or surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation toward `other` at parameter `t`.
    #[must_use]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point { x: self.x + (other.x - self.x) * t, y: self.y + (other.y - self.y) * t }
    }
}

/// Camera state for pan/zoom over the surface.
///
/// `pan_x` / `pan_y` are the screen position of the surface origin, in screen pixels.
/// `zoom` is a scale factor (1.0 = one surface pixel per screen pixel).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point to surface coordinates.
    #[must_use]
    pub fn screen_to_surface(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a surface-space point to screen coordinates.
    #[must_use]
    pub fn surface_to_screen(&self, surface: Point) -> Point {
        Point {
            x: surface.x * self.zoom + self.pan_x,
            y: surface.y * self.zoom + self.pan_y,
        }
    }

    /// Shift the pan offset by a screen-space delta. Zoom is unchanged.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Change zoom while keeping the surface point under `anchor` fixed on screen.
    ///
    /// `new_zoom` is clamped to [`ZOOM_MIN`]..=[`ZOOM_MAX`]. Returns `false`
    /// and leaves the camera untouched when the clamped zoom equals the
    /// current one, so redundant updates from the host cannot drift the pan.
    pub fn zoom_about(&mut self, new_zoom: f64, anchor: Point) -> bool {
        let new_zoom = clamp_zoom(new_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }
        let pinned = self.screen_to_surface(anchor);
        self.zoom = new_zoom;
        self.pan_x = anchor.x - pinned.x * new_zoom;
        self.pan_y = anchor.y - pinned.y * new_zoom;
        true
    }

    /// Pan so that `surface` renders at the screen point `anchor`.
    pub fn center_on(&mut self, surface: Point, anchor: Point) {
        self.pan_x = anchor.x - surface.x * self.zoom;
        self.pan_y = anchor.y - surface.y * self.zoom;
    }
}

/// Clamp a zoom factor to the supported range. Non-finite input maps to 1.0.
#[must_use]
pub fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() { zoom.clamp(ZOOM_MIN, ZOOM_MAX) } else { 1.0 }
}
