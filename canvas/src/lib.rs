//! Raster editing engine for the segmentation mask editor.
//!
//! This crate owns everything that touches mask pixels: the stroke surface,
//! brush rasterization, closed-loop flood fill, painted-bounds tracking,
//! bounded undo/redo history, and the cropped export. It has no UI or
//! network dependencies. A host (the `maskpaint` binary, or a GUI shell)
//! feeds pointer, wheel, and key events into [`engine::EngineCore`] and reads
//! back [`engine::Action`]s and exports.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EngineCore`] and the [`engine::MaskEditor`] host trait |
//! | [`surface`] | Fixed-size RGBA stroke layer with clipped pixel access |
//! | [`camera`] | Pan/zoom camera and screen/surface coordinate conversions |
//! | [`brush`] | Dab rasterization and interpolated stroke tracking |
//! | [`fill`] | Stack-based flood fill and the closed-stroke fill trigger |
//! | [`bounds`] | Painted-region bounding box used for export cropping |
//! | [`history`] | Bounded full-surface snapshot history for undo/redo |
//! | [`export`] | Cropped, background-composited PNG export |
//! | [`palette`] | Mask classes, their colors and brush-shape policy |
//! | [`theme`] | Background color and the background-pixel classifier |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`render`] | Cosmetic viewport composition (background, grid, strokes) |
//! | [`consts`] | Shared numeric constants (surface size, zoom limits, export grid) |
//! | [`error`] | Crate error type |

pub mod bounds;
pub mod brush;
pub mod camera;
pub mod consts;
pub mod engine;
pub mod error;
pub mod export;
pub mod fill;
pub mod history;
pub mod input;
pub mod palette;
pub mod render;
pub mod surface;
pub mod theme;
