//! Shared numeric constants for the canvas crate.

// ── Surface ─────────────────────────────────────────────────────

/// Default side length of the square stroke surface, in pixels.
pub const SURFACE_SIZE: u32 = 8192;

/// Default number of snapshots kept by the undo history.
pub const HISTORY_CAPACITY: usize = 50;

// ── Camera ──────────────────────────────────────────────────────

/// Minimum zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Maximum zoom factor.
pub const ZOOM_MAX: f64 = 3.0;

// ── Brush ───────────────────────────────────────────────────────

/// Brush size used for every class until the host changes it.
pub const DEFAULT_BRUSH_SIZE: u32 = 7;

/// Smallest brush size accepted from the control panel.
pub const BRUSH_SIZE_MIN: u32 = 1;

/// Largest brush size accepted from the control panel.
pub const BRUSH_SIZE_MAX: u32 = 100;

/// Interpolated dabs are spaced `brush_size / BRUSH_SPACING_DIVISOR` apart.
pub const BRUSH_SPACING_DIVISOR: f64 = 4.0;

// ── Fill ────────────────────────────────────────────────────────

/// Per-channel distance from the theme background below which a pixel counts as empty.
pub const BACKGROUND_THRESHOLD: u8 = 50;

/// A stroke must record more than this many points to be considered a closed loop.
pub const CLOSED_STROKE_MIN_POINTS: usize = 10;

/// Endpoints closer than `brush_size * CLOSED_STROKE_GAP_FACTOR` close the loop.
pub const CLOSED_STROKE_GAP_FACTOR: f64 = 2.0;

// ── Export ──────────────────────────────────────────────────────

/// Padding around the painted bounds included in an export, in pixels.
pub const EXPORT_MARGIN_PX: u32 = 50;

/// Export dimensions are rounded up to a multiple of this.
pub const EXPORT_GRID_SNAP: u32 = 64;

/// Export dimensions never drop below this.
pub const EXPORT_MIN_SIZE: u32 = 256;

// ── Overlay ─────────────────────────────────────────────────────

/// Spacing of the cosmetic background grid, in surface pixels.
pub const GRID_SPACING_PX: u32 = 64;
