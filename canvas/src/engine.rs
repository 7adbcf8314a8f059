//! Engine: the mask editor's state and its event entry points.
//!
//! `EngineCore` owns the surface, history, bounds, and camera. The host feeds
//! it pointer, wheel, and key events in screen space and applies the returned
//! [`Action`]s. All pixel mutation happens synchronously inside these calls.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use image::RgbaImage;

use crate::bounds::Bounds;
use crate::brush::{Brush, StrokeState};
use crate::camera::{Camera, Point};
use crate::consts::{HISTORY_CAPACITY, SURFACE_SIZE};
use crate::error::CanvasError;
use crate::export::{ExportCrop, ExportOptions, export_crop};
use crate::fill::{closed_loop_seed, flood_fill_region};
use crate::history::History;
use crate::input::{Button, InputState, Key, Modifiers, Tool, UiState, WheelDelta};
use crate::palette::{BrushShape, MaskClass, Palette};
use crate::render::render_view;
use crate::surface::{Surface, TRANSPARENT};
use crate::theme::Theme;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The view or the surface changed; redraw.
    RenderNeeded,
    /// A snapshot was recorded or restored.
    HistoryChanged { can_undo: bool, can_redo: bool },
    /// A closed stroke was flood filled from `seed` (surface space).
    RegionFilled { seed: Point },
    SetCursor(String),
}

/// Construction-time engine settings.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Side length of the square surface, in pixels.
    pub surface_size: u32,
    /// Maximum number of history snapshots kept.
    pub history_capacity: usize,
    pub theme: Theme,
    pub palette: Palette,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            surface_size: SURFACE_SIZE,
            history_capacity: HISTORY_CAPACITY,
            theme: Theme::default(),
            palette: Palette::default(),
        }
    }
}

/// Imperative control surface a host holds for the lifetime of the editor.
pub trait MaskEditor {
    /// Step back one gesture. Returns `false` at the oldest snapshot.
    fn undo(&mut self) -> bool;
    /// Step forward one gesture. Returns `false` at the newest snapshot.
    fn redo(&mut self) -> bool;
    fn can_undo(&self) -> bool;
    fn can_redo(&self) -> bool;
    /// Wipe all paint and record the empty state.
    fn clear(&mut self);
    /// Recenter the view on the middle of the surface.
    fn reset_view(&mut self);
    /// Crop the painted region for saving or upload.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::EmptyCanvas`] if nothing has been painted.
    fn export(&self, options: ExportOptions) -> Result<ExportCrop, CanvasError>;
}

/// Core engine state.
///
/// Free of any windowing or browser dependency so the full editing pipeline
/// can be driven from tests and headless hosts.
pub struct EngineCore {
    pub surface: Surface,
    pub bounds: Bounds,
    pub history: History,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub palette: Palette,
    pub theme: Theme,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine and record the blank surface as the first snapshot.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let surface = Surface::new(config.surface_size);
        let bounds = Bounds::empty();
        let mut history = History::new(config.history_capacity);
        history.snapshot(&surface, &bounds);
        Self {
            surface,
            bounds,
            history,
            camera: Camera::default(),
            ui: UiState::default(),
            input: InputState::default(),
            palette: config.palette,
            theme: config.theme,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Settings ---

    /// Select the active class by name.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::UnknownClass`] if the palette has no such class.
    pub fn set_class(&mut self, name: &str) -> Result<(), CanvasError> {
        self.ui.class = self.palette.find(name)?;
        Ok(())
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.ui.tool = tool;
    }

    /// Set the active class's brush size. Takes effect on the next stroke.
    pub fn set_brush_size(&mut self, size: u32) {
        self.ui.set_brush_size(size);
    }

    pub fn set_fill_on_close(&mut self, enabled: bool) {
        self.ui.fill_on_close = enabled;
    }

    /// Swap the theme. Surface pixels are untouched; only rendering, fill
    /// classification, and export backgrounds change.
    pub fn set_theme(&mut self, theme: Theme) -> Vec<Action> {
        self.theme = theme;
        vec![Action::RenderNeeded]
    }

    // --- Viewport ---

    /// Update the viewport size in screen pixels. The first non-empty size
    /// also centers the view on the surface.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        let first = self.viewport_width <= 0.0 || self.viewport_height <= 0.0;
        self.viewport_width = width.max(0.0);
        self.viewport_height = height.max(0.0);
        if first && self.viewport_width > 0.0 && self.viewport_height > 0.0 {
            self.center_view();
        }
        vec![Action::RenderNeeded]
    }

    /// Screen-space center of the viewport.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// Apply a zoom level supplied by the host, keeping the surface point at
    /// the viewport center fixed. Redundant values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) -> Vec<Action> {
        if self.camera.zoom_about(zoom, self.viewport_center()) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    fn center_view(&mut self) {
        let half = f64::from(self.surface.size()) / 2.0;
        self.camera.center_on(Point::new(half, half), self.viewport_center());
    }

    // --- Input events ---

    /// Start a pan or a stroke.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        let mut actions = self.end_gesture();
        match button {
            Button::Secondary => {}
            Button::Middle => self.begin_pan(screen_pt, &mut actions),
            Button::Primary if modifiers.wants_pan() => self.begin_pan(screen_pt, &mut actions),
            Button::Primary => {
                let brush = self.active_brush();
                let point = self.camera.screen_to_surface(screen_pt);
                let stroke = StrokeState::begin(&mut self.surface, &mut self.bounds, brush, point);
                self.input = InputState::Painting(stroke);
                actions.push(Action::RenderNeeded);
            }
        }
        actions
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, _modifiers: Modifiers) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                let (dx, dy) = (screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                *last_screen = screen_pt;
                self.camera.pan_by(dx, dy);
                vec![Action::RenderNeeded]
            }
            InputState::Painting(stroke) => {
                let point = self.camera.screen_to_surface(screen_pt);
                stroke.continue_to(&mut self.surface, &mut self.bounds, point);
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        self.end_gesture()
    }

    /// The pointer left the viewport; treated as a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_gesture()
    }

    /// Wheel and trackpad scroll pan the view.
    pub fn on_wheel(&mut self, _screen_pt: Point, delta: WheelDelta, _modifiers: Modifiers) -> Vec<Action> {
        self.camera.pan_by(-delta.dx, -delta.dy);
        vec![Action::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        if !modifiers.command() {
            return Vec::new();
        }
        let changed = if key.is("z") && !modifiers.shift {
            self.undo()
        } else if key.is("z") || key.is("y") {
            self.redo()
        } else {
            return Vec::new();
        };
        if changed { self.history_actions() } else { Vec::new() }
    }

    fn begin_pan(&mut self, screen_pt: Point, actions: &mut Vec<Action>) {
        self.input = InputState::Panning { last_screen: screen_pt };
        actions.push(Action::SetCursor("grabbing".into()));
    }

    /// Finish whatever gesture is active. Strokes run the closed-loop fill
    /// and then record exactly one history snapshot.
    fn end_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![Action::SetCursor("default".into())],
            InputState::Painting(mut stroke) => {
                stroke.finish();
                let mut actions = Vec::new();
                if let Some(seed) = self.close_stroke(&stroke) {
                    actions.push(Action::RegionFilled { seed });
                }
                self.history.snapshot(&self.surface, &self.bounds);
                tracing::debug!(
                    points = stroke.points.len(),
                    history = self.history.len(),
                    position = self.history.index(),
                    "stroke finished"
                );
                actions.push(Action::RenderNeeded);
                actions.extend(self.history_actions());
                actions
            }
        }
    }

    /// Flood fill a closed stroke of a fill-capable class. Returns the seed if
    /// anything was filled.
    fn close_stroke(&mut self, stroke: &StrokeState) -> Option<Point> {
        let class = self.palette.get(self.ui.class);
        if self.ui.tool != Tool::Brush || !self.ui.fill_on_close || !class.fills_closed {
            return None;
        }
        let color = class.rgba();
        let seed = closed_loop_seed(&stroke.points, stroke.brush.size)?;
        let rect = flood_fill_region(&mut self.surface, seed, color, &self.theme)?;
        self.bounds.extend(rect.x as f64, rect.y as f64, 0.0);
        self.bounds.extend(rect.right() as f64, rect.bottom() as f64, 0.0);
        Some(seed)
    }

    /// Brush for a stroke starting now, from the current control-panel settings.
    fn active_brush(&self) -> Brush {
        let size = self.ui.brush_size();
        match self.ui.tool {
            Tool::Eraser => Brush { size, shape: BrushShape::Disc, color: TRANSPARENT },
            Tool::Brush => {
                let class = self.palette.get(self.ui.class);
                Brush { size, shape: class.shape, color: class.rgba() }
            }
        }
    }

    fn history_actions(&self) -> Vec<Action> {
        vec![Action::HistoryChanged { can_undo: self.history.can_undo(), can_redo: self.history.can_redo() }]
    }

    // --- Render ---

    /// Compose the current viewport.
    #[must_use]
    pub fn render(&self) -> RgbaImage {
        render_view(
            &self.surface,
            &self.camera,
            &self.theme,
            self.viewport_width.max(0.0) as u32,
            self.viewport_height.max(0.0) as u32,
        )
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// The active class.
    #[must_use]
    pub fn class(&self) -> &MaskClass {
        self.palette.get(self.ui.class)
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_painting(&self) -> bool {
        matches!(self.input, InputState::Painting(_))
    }
}

impl MaskEditor for EngineCore {
    fn undo(&mut self) -> bool {
        self.history.undo(&mut self.surface, &mut self.bounds)
    }

    fn redo(&mut self) -> bool {
        self.history.redo(&mut self.surface, &mut self.bounds)
    }

    fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn clear(&mut self) {
        self.input = InputState::Idle;
        self.surface.clear();
        self.bounds.reset();
        self.history.snapshot(&self.surface, &self.bounds);
        tracing::debug!("surface cleared");
    }

    fn reset_view(&mut self) {
        self.center_view();
    }

    fn export(&self, options: ExportOptions) -> Result<ExportCrop, CanvasError> {
        export_crop(&self.surface, &self.bounds, &self.theme, options).inspect_err(|e| {
            tracing::warn!(error = %e, "export failed");
        })
    }
}
