//! Error type for fallible canvas operations.
//!
//! Pointer coordinates that fall off the surface are not errors: every pixel
//! access clips. Undo/redo at a history boundary is not an error either; those
//! calls report `false`.

/// Error returned by exports and whole-buffer writes.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// Export was requested before anything was painted.
    #[error("nothing to export: draw something first")]
    EmptyCanvas,
    /// A whole-surface write received a buffer of the wrong length.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },
    /// The host named a class that is not in the palette.
    #[error("unknown class: {0}")]
    UnknownClass(String),
    /// PNG encoding failed.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
