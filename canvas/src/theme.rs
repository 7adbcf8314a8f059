//! Theme colors and background classification.
//!
//! The background color is never baked into the stroke surface; it is passed
//! into every call that needs to tell "empty" pixels from painted ones
//! (flood fill, export compositing, rendering). Classification uses integer
//! per-channel thresholds so fill results are deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use image::{Rgb, Rgba};
use serde::{Deserialize, Serialize};

use crate::consts::BACKGROUND_THRESHOLD;

/// Which built-in theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    /// Black background, faint white grid.
    #[default]
    Dark,
    /// White background, faint black grid.
    Light,
}

/// Colors and classification threshold for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Solid color behind the strokes; also the export background.
    pub background: Rgb<u8>,
    /// Grid line color, blended over the background in the viewport only.
    pub grid: Rgba<u8>,
    /// Per-channel distance from `background` below which a pixel is empty.
    pub threshold: u8,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_kind(ThemeKind::Dark)
    }
}

impl Theme {
    #[must_use]
    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Dark => Self {
                background: Rgb([0, 0, 0]),
                // rgba(255, 255, 255, 0.05)
                grid: Rgba([255, 255, 255, 13]),
                threshold: BACKGROUND_THRESHOLD,
            },
            ThemeKind::Light => Self {
                background: Rgb([255, 255, 255]),
                grid: Rgba([0, 0, 0, 13]),
                threshold: BACKGROUND_THRESHOLD,
            },
        }
    }

    /// Opaque RGBA form of the background color.
    #[must_use]
    pub fn background_rgba(&self) -> Rgba<u8> {
        let [r, g, b] = self.background.0;
        Rgba([r, g, b, 255])
    }

    /// Whether a stroke-layer pixel counts as unpainted.
    ///
    /// Fully transparent pixels are always background. Otherwise every RGB
    /// channel must lie strictly within `threshold` of the background.
    #[must_use]
    pub fn is_background(&self, pixel: Rgba<u8>) -> bool {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            return true;
        }
        let [br, bg, bb] = self.background.0;
        r.abs_diff(br) < self.threshold && g.abs_diff(bg) < self.threshold && b.abs_diff(bb) < self.threshold
    }
}
