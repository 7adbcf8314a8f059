//! Painted-region tracking.
//!
//! [`Bounds`] grows with every brush dab and is used to crop exports to the
//! area the user actually drew in. It never shrinks except on [`Bounds::reset`],
//! so erasing does not tighten the export crop.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

/// Axis-aligned rectangle covering all painted pixels, in surface coordinates.
///
/// Starts inverted (`min > max`), meaning nothing has been painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds {
    /// The inverted "nothing painted" sentinel.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Grow to include the square of half-side `margin` around `(x, y)`.
    pub fn extend(&mut self, x: f64, y: f64, margin: f64) {
        self.min_x = self.min_x.min(x - margin);
        self.min_y = self.min_y.min(y - margin);
        self.max_x = self.max_x.max(x + margin);
        self.max_y = self.max_y.max(y + margin);
    }

    /// True when nothing has been painted since creation or the last reset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow to cover `other` as well. An empty `other` changes nothing.
    pub fn union(&mut self, other: &Bounds) {
        if other.is_empty() {
            return;
        }
        self.min_x = self.min_x.min(other.min_x);
        self.min_y = self.min_y.min(other.min_y);
        self.max_x = self.max_x.max(other.max_x);
        self.max_y = self.max_y.max(other.max_y);
    }

    /// Restore the empty sentinel.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    /// Horizontal extent, or 0 when empty.
    #[must_use]
    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max_x - self.min_x }
    }

    /// Vertical extent, or 0 when empty.
    #[must_use]
    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.max_y - self.min_y }
    }
}
