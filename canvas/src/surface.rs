//! The stroke surface: a fixed-size square RGBA layer holding only user paint.
//!
//! Unpainted pixels are fully transparent. The theme background and grid are
//! composited later (see [`crate::render`] and [`crate::export`]) and never
//! live in this buffer, so they are excluded from history and export data.
//!
//! Coordinates are signed on the way in: a pointer can legitimately land off
//! the surface when the viewport is panned or zoomed out, and every accessor
//! clips instead of failing.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use image::{Rgba, RgbaImage};

use crate::error::CanvasError;

/// Fully transparent pixel; the value of every unpainted surface pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Axis-aligned pixel rectangle in surface coordinates.
///
/// `x`/`y` may be negative; the covered pixels are `x..x+width`, `y..y+height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    #[must_use]
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Exclusive right edge.
    #[must_use]
    pub fn right(&self) -> i64 {
        self.x + i64::from(self.width)
    }

    /// Exclusive bottom edge.
    #[must_use]
    pub fn bottom(&self) -> i64 {
        self.y + i64::from(self.height)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Immutable full copy of the surface pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pixels: RgbaImage,
}

impl Snapshot {
    /// Side length of the surface this snapshot was taken from.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// Approximate heap footprint in bytes.
    #[must_use]
    pub fn memory_bytes(&self) -> usize {
        self.pixels.as_raw().len()
    }
}

/// The stroke layer. Dimensions are fixed at construction.
#[derive(Debug, Clone)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Create a transparent `size × size` surface.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self { pixels: RgbaImage::from_pixel(size, size, TRANSPARENT) }
    }

    /// Side length in pixels.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.pixels.width()
    }

    /// Byte length of a full RGBA buffer for this surface.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.pixels.as_raw().len()
    }

    /// Read-only access to the underlying image.
    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Whether `(x, y)` lies on the surface.
    #[must_use]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let size = i64::from(self.size());
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Pixel at `(x, y)`, or `None` if off the surface.
    #[must_use]
    pub fn get_pixel(&self, x: i64, y: i64) -> Option<Rgba<u8>> {
        if self.contains(x, y) {
            Some(*self.pixels.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Write one pixel. Off-surface writes are dropped; returns whether it landed.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>) -> bool {
        if !self.contains(x, y) {
            return false;
        }
        self.pixels.put_pixel(x as u32, y as u32, color);
        true
    }

    /// Fill a rectangle with a solid color, clipped to the surface.
    pub fn fill_rect(&mut self, rect: PixelRect, color: Rgba<u8>) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels.put_pixel(x, y, color);
            }
        }
    }

    /// Full copy of the raw RGBA bytes.
    #[must_use]
    pub fn read_all(&self) -> Vec<u8> {
        self.pixels.as_raw().clone()
    }

    /// Replace every pixel from a raw RGBA buffer of exactly [`Self::byte_len`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::BufferSizeMismatch`] if the buffer length differs.
    pub fn write_all(&mut self, buffer: Vec<u8>) -> Result<(), CanvasError> {
        let expected = self.byte_len();
        let actual = buffer.len();
        if actual != expected {
            return Err(CanvasError::BufferSizeMismatch { expected, actual });
        }
        let size = self.size();
        match RgbaImage::from_raw(size, size, buffer) {
            Some(pixels) => {
                self.pixels = pixels;
                Ok(())
            }
            None => Err(CanvasError::BufferSizeMismatch { expected, actual }),
        }
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = TRANSPARENT;
        }
    }

    /// Capture an immutable copy of the current pixels.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { pixels: self.pixels.clone() }
    }

    /// Restore pixels from a snapshot. Returns `false` (and leaves the surface
    /// untouched) if the snapshot came from a surface of a different size.
    pub fn restore(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.pixels.dimensions() != self.pixels.dimensions() {
            tracing::warn!(
                snapshot = snapshot.size(),
                surface = self.size(),
                "ignoring snapshot from a differently sized surface"
            );
            return false;
        }
        self.pixels.clone_from(&snapshot.pixels);
        true
    }

    /// Swap in a working copy produced by a whole-surface operation.
    pub(crate) fn commit(&mut self, working: RgbaImage) {
        if working.dimensions() == self.pixels.dimensions() {
            self.pixels = working;
        } else {
            tracing::warn!("discarding working copy with mismatched dimensions");
        }
    }

    /// Clip `rect` to the surface, returning `(x0, y0, x1, y1)` with exclusive max.
    pub(crate) fn clip(&self, rect: PixelRect) -> Option<(u32, u32, u32, u32)> {
        let size = i64::from(self.size());
        let x0 = rect.x.clamp(0, size);
        let y0 = rect.y.clamp(0, size);
        let x1 = rect.right().clamp(0, size);
        let y1 = rect.bottom().clamp(0, size);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}
