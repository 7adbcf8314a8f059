//! Gesture scripts: recorded editor input replayed into an [`EngineCore`].
//!
//! A script is a JSON array of events tagged by `"type"`. Coordinates are in
//! screen space, exactly as a windowed host would deliver them, so replaying
//! a script exercises the same camera mapping, stroke interpolation, fill
//! trigger, and history recording as live input.
//!
//! ```json
//! [
//!   { "type": "viewport", "width": 1280, "height": 800 },
//!   { "type": "class", "name": "buildings" },
//!   { "type": "pointer_down", "x": 600, "y": 400 },
//!   { "type": "pointer_move", "x": 640, "y": 420 },
//!   { "type": "pointer_up", "x": 640, "y": 420 }
//! ]
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::path::Path;

use canvas::camera::Point;
use canvas::engine::{Action, EngineCore, MaskEditor};
use canvas::error::CanvasError;
use canvas::input::{Button, Key, Modifiers, Tool, WheelDelta};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("event {index} failed: {source}")]
    Event { index: usize, source: CanvasError },
}

/// One recorded input or control-panel event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Viewport {
        width: f64,
        height: f64,
    },
    Zoom {
        zoom: f64,
    },
    Class {
        name: String,
    },
    Tool {
        tool: Tool,
    },
    BrushSize {
        size: u32,
    },
    FillOnClose {
        enabled: bool,
    },
    PointerDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        x: f64,
        y: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerUp {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerLeave,
    Wheel {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        dx: f64,
        dy: f64,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    /// Shorthand for a primary-button drag through `points` and release.
    Stroke {
        points: Vec<[f64; 2]>,
    },
    Undo,
    Redo,
    Clear,
    ResetView,
}

/// Counters collected while replaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub fills: usize,
    pub undos: usize,
    pub redos: usize,
}

/// Parse a script from JSON text.
///
/// # Errors
///
/// Returns [`ScriptError::Parse`] for malformed JSON or unknown event types.
pub fn parse(json: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a script file.
///
/// # Errors
///
/// Returns [`ScriptError::Io`] if the file cannot be read, or
/// [`ScriptError::Parse`] if it is not a valid script.
pub async fn load(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    parse(&tokio::fs::read_to_string(path).await?)
}

/// Feed `events` into `engine` in order.
///
/// # Errors
///
/// Stops at the first event the engine rejects (an unknown class name) and
/// returns [`ScriptError::Event`] with its index. Earlier events stay applied.
pub fn replay(engine: &mut EngineCore, events: &[ScriptEvent]) -> Result<ReplaySummary, ScriptError> {
    let mut summary = ReplaySummary::default();
    for (index, event) in events.iter().enumerate() {
        let actions = apply(engine, event, &mut summary).map_err(|source| ScriptError::Event { index, source })?;
        summary.events += 1;
        summary.fills += actions.iter().filter(|a| matches!(a, Action::RegionFilled { .. })).count();
    }
    tracing::debug!(
        events = summary.events,
        fills = summary.fills,
        history = engine.history.len(),
        "script replayed"
    );
    Ok(summary)
}

fn apply(engine: &mut EngineCore, event: &ScriptEvent, summary: &mut ReplaySummary) -> Result<Vec<Action>, CanvasError> {
    let actions = match event {
        ScriptEvent::Viewport { width, height } => engine.set_viewport(*width, *height),
        ScriptEvent::Zoom { zoom } => engine.set_zoom(*zoom),
        ScriptEvent::Class { name } => {
            engine.set_class(name)?;
            Vec::new()
        }
        ScriptEvent::Tool { tool } => {
            engine.set_tool(*tool);
            Vec::new()
        }
        ScriptEvent::BrushSize { size } => {
            engine.set_brush_size(*size);
            Vec::new()
        }
        ScriptEvent::FillOnClose { enabled } => {
            engine.set_fill_on_close(*enabled);
            Vec::new()
        }
        ScriptEvent::PointerDown { x, y, button, modifiers } => {
            engine.on_pointer_down(Point::new(*x, *y), *button, *modifiers)
        }
        ScriptEvent::PointerMove { x, y, modifiers } => engine.on_pointer_move(Point::new(*x, *y), *modifiers),
        ScriptEvent::PointerUp { x, y, button, modifiers } => {
            engine.on_pointer_up(Point::new(*x, *y), *button, *modifiers)
        }
        ScriptEvent::PointerLeave => engine.on_pointer_leave(),
        ScriptEvent::Wheel { x, y, dx, dy, modifiers } => {
            engine.on_wheel(Point::new(*x, *y), WheelDelta { dx: *dx, dy: *dy }, *modifiers)
        }
        ScriptEvent::Key { key, modifiers } => engine.on_key_down(Key(key.clone()), *modifiers),
        ScriptEvent::Stroke { points } => stroke(engine, points),
        ScriptEvent::Undo => {
            if engine.undo() {
                summary.undos += 1;
            }
            Vec::new()
        }
        ScriptEvent::Redo => {
            if engine.redo() {
                summary.redos += 1;
            }
            Vec::new()
        }
        ScriptEvent::Clear => {
            engine.clear();
            Vec::new()
        }
        ScriptEvent::ResetView => {
            engine.reset_view();
            Vec::new()
        }
    };
    Ok(actions)
}

fn stroke(engine: &mut EngineCore, points: &[[f64; 2]]) -> Vec<Action> {
    let Some((&[x0, y0], rest)) = points.split_first() else {
        return Vec::new();
    };
    let mut actions = engine.on_pointer_down(Point::new(x0, y0), Button::Primary, Modifiers::default());
    let mut last = Point::new(x0, y0);
    for &[x, y] in rest {
        last = Point::new(x, y);
        actions.extend(engine.on_pointer_move(last, Modifiers::default()));
    }
    actions.extend(engine.on_pointer_up(last, Button::Primary, Modifiers::default()));
    actions
}
