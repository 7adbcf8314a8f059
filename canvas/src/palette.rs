//! Mask classes: named paint categories with a fixed color and brush policy.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::CanvasError;

/// Dab shape used when painting a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrushShape {
    /// Filled disc of diameter `brush_size`, for line-like classes.
    Disc,
    /// Filled square of side `brush_size`, for area classes; adjacent dabs tile without corner gaps.
    Square,
}

/// One paint category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskClass {
    /// Stable name used by the control panel (e.g. `"roads"`).
    pub name: String,
    /// Pure RGB class color written into the mask.
    pub color: [u8; 3],
    /// Dab shape for the brush tool.
    pub shape: BrushShape,
    /// Whether a closed stroke of this class triggers a flood fill.
    pub fills_closed: bool,
}

impl MaskClass {
    /// Opaque RGBA form of the class color.
    #[must_use]
    pub fn rgba(&self) -> Rgba<u8> {
        let [r, g, b] = self.color;
        Rgba([r, g, b, 255])
    }
}

/// Index of a class inside a [`Palette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassId(pub usize);

/// The configured set of classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    classes: Vec<MaskClass>,
}

impl Default for Palette {
    /// Roads (red disc) and buildings (green square, fill-capable).
    fn default() -> Self {
        Self {
            classes: vec![
                MaskClass {
                    name: "roads".into(),
                    color: [255, 0, 0],
                    shape: BrushShape::Disc,
                    fills_closed: false,
                },
                MaskClass {
                    name: "buildings".into(),
                    color: [0, 255, 0],
                    shape: BrushShape::Square,
                    fills_closed: true,
                },
            ],
        }
    }
}

impl Palette {
    /// Build a palette from an explicit class list.
    ///
    /// An empty list falls back to the default palette so there is always an active class.
    #[must_use]
    pub fn new(classes: Vec<MaskClass>) -> Self {
        if classes.is_empty() { Self::default() } else { Self { classes } }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Look up a class by id, falling back to the first class for stale ids.
    #[must_use]
    pub fn get(&self, id: ClassId) -> &MaskClass {
        self.classes.get(id.0).unwrap_or(&self.classes[0])
    }

    /// Resolve a class name to its id.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::UnknownClass`] if no class has that name.
    pub fn find(&self, name: &str) -> Result<ClassId, CanvasError> {
        self.classes
            .iter()
            .position(|c| c.name == name)
            .map(ClassId)
            .ok_or_else(|| CanvasError::UnknownClass(name.to_string()))
    }
}
