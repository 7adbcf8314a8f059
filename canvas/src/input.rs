//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool`, `UiState`, and `Modifiers` capture the control-panel settings and
//! the user's intent at the time of a pointer event. `InputState` is the
//! active gesture tracked between pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::brush::StrokeState;
use crate::camera::Point;
use crate::consts::{BRUSH_SIZE_MAX, BRUSH_SIZE_MIN, DEFAULT_BRUSH_SIZE};
use crate::palette::ClassId;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Paint the active class color (default).
    #[default]
    Brush,
    /// Paint transparency, restoring the background.
    Eraser,
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Any modifier that turns a primary-button drag into a pan.
    #[must_use]
    pub fn wants_pan(self) -> bool {
        self.shift || self.ctrl || self.meta
    }

    /// The platform command modifier (ctrl or meta).
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the host (e.g. `"z"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

impl Key {
    /// Case-insensitive match against a single-character key name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Control-panel settings as last supplied by the host.
///
/// Re-read at the start of every stroke; a change mid-stroke applies to the
/// next one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UiState {
    /// Active paint class.
    pub class: ClassId,
    /// Active tool.
    pub tool: Tool,
    /// Whether closed strokes of fill-capable classes are flood filled.
    pub fill_on_close: bool,
    /// Brush size remembered separately for each class.
    brush_sizes: HashMap<ClassId, u32>,
}

impl UiState {
    /// Brush size for the active class.
    #[must_use]
    pub fn brush_size(&self) -> u32 {
        self.brush_size_for(self.class)
    }

    /// Brush size remembered for `class`.
    #[must_use]
    pub fn brush_size_for(&self, class: ClassId) -> u32 {
        self.brush_sizes.get(&class).copied().unwrap_or(DEFAULT_BRUSH_SIZE)
    }

    /// Set the active class's brush size, clamped to the supported range.
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_sizes.insert(self.class, size.clamp(BRUSH_SIZE_MIN, BRUSH_SIZE_MAX));
    }
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging the view.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// The user is painting a stroke.
    Painting(StrokeState),
}
