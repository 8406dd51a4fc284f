//! Interaction controller: turns pointer gestures into canvas mutations.
//!
//! Three protocols live here:
//!
//! ```text
//! palette placement   idle -> armed(kind) -> idle       (drop or cancel)
//! free-form move      idle -> dragging(id, grab) -> idle (pointer-up)
//! duplicate / delete  synchronous
//! ```
//!
//! A move session is global rather than canvas-scoped: the host forwards
//! every pointer-move and the final pointer-up wherever they occur, and
//! [`InteractionController::end_move`] always closes the session.

use serde::Serialize;

use crate::canvas::CanvasModel;
use crate::config::{EditorConfig, Viewport};
use crate::element::{CanvasElement, ElementId, ElementKind, Position};
use crate::preset::Preset;

/// State of the palette drag-and-drop protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "kind", rename_all = "lowercase")]
pub enum PaletteGesture {
    /// No palette drag in progress.
    #[default]
    Idle,
    /// A palette entry is being dragged.
    Armed(ElementKind),
}

/// An in-progress free-form move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveSession {
    /// Element being dragged.
    pub element_id: ElementId,
    /// Pointer position minus element position at pointer-down.
    pub grab_offset: (f32, f32),
}

/// Gesture state machine over a [`CanvasModel`].
///
/// The controller owns only transient gesture state; the model is passed
/// in by reference for every operation.
#[derive(Debug, Clone)]
pub struct InteractionController {
    palette: PaletteGesture,
    drag: Option<MoveSession>,
    viewport: Viewport,
    desktop_width: f32,
    drop_offset: (f32, f32),
    duplicate_offset: (f32, f32),
    min_element_size: (f32, f32),
}

impl InteractionController {
    /// Create an idle controller from the editor configuration.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            palette: PaletteGesture::Idle,
            drag: None,
            viewport: config.viewport,
            desktop_width: config.canvas_width,
            drop_offset: config.drop_offset,
            duplicate_offset: config.duplicate_offset,
            min_element_size: config.min_element_size,
        }
    }

    /// Current palette protocol state.
    #[must_use]
    pub fn palette_gesture(&self) -> PaletteGesture {
        self.palette
    }

    /// Current move session, if any.
    #[must_use]
    pub fn move_session(&self) -> Option<MoveSession> {
        self.drag
    }

    /// Whether a free-form move is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Active viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Switch viewport. Existing elements are not moved.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Canvas width at the active viewport.
    #[must_use]
    pub fn canvas_width(&self) -> f32 {
        self.viewport.width(self.desktop_width)
    }

    // -----------------------------------------------------------------------
    // Palette placement
    // -----------------------------------------------------------------------

    /// Drag-start on a palette entry.
    pub fn arm_palette(&mut self, kind: ElementKind) {
        self.palette = PaletteGesture::Armed(kind);
    }

    /// Drag ended without a drop on the canvas.
    pub fn cancel_palette(&mut self) {
        self.palette = PaletteGesture::Idle;
    }

    /// Drop at canvas-local `(x, y)`.
    ///
    /// Places the armed kind at `(x, y)` minus the drop offset, clamped to
    /// `>= 0`. The gesture always returns to idle. A drop with nothing
    /// armed, or outside the canvas, changes nothing.
    pub fn drop_on_canvas(&mut self, model: &mut CanvasModel, x: f32, y: f32) -> Option<ElementId> {
        let PaletteGesture::Armed(kind) = std::mem::take(&mut self.palette) else {
            tracing::debug!("Drop at ({x}, {y}) with no palette entry armed");
            return None;
        };
        if !self.within_canvas(model, x, y) {
            tracing::debug!("Discarding {kind} dropped outside the canvas at ({x}, {y})");
            return None;
        }

        let position = Position::clamped(x - self.drop_offset.0, y - self.drop_offset.1);
        let element = CanvasElement::new(kind, position);
        let id = element.id();
        if model.insert(element) {
            tracing::debug!("Placed {kind} {id} at ({}, {})", position.x, position.y);
            Some(id)
        } else {
            None
        }
    }

    /// Arm and drop in one step.
    pub fn place_from_palette(
        &mut self,
        model: &mut CanvasModel,
        kind: ElementKind,
        x: f32,
        y: f32,
    ) -> Option<ElementId> {
        self.arm_palette(kind);
        self.drop_on_canvas(model, x, y)
    }

    /// Replace the whole canvas with a preset's elements.
    ///
    /// Any in-progress gesture is abandoned. Returns the number of
    /// elements placed.
    pub fn apply_preset(&mut self, model: &mut CanvasModel, preset: &Preset) -> usize {
        self.palette = PaletteGesture::Idle;
        self.drag = None;
        model.replace_all(preset.instantiate());
        tracing::info!("Applied preset {:?} ({} elements)", preset.name, model.len());
        model.len()
    }

    // -----------------------------------------------------------------------
    // Free-form move
    // -----------------------------------------------------------------------

    /// Pointer-down over an element: select it and start dragging.
    ///
    /// A new pointer-down always ends any session still open from a lost
    /// pointer-up. An unknown id leaves the controller idle.
    pub fn begin_move(
        &mut self,
        model: &mut CanvasModel,
        id: ElementId,
        pointer_x: f32,
        pointer_y: f32,
    ) -> bool {
        self.drag = None;
        let Some(element) = model.get(id) else {
            tracing::debug!("Ignoring move of unknown element {id}");
            return false;
        };
        let position = element.position();
        model.select(Some(id));
        self.drag = Some(MoveSession {
            element_id: id,
            grab_offset: (pointer_x - position.x, pointer_y - position.y),
        });
        true
    }

    /// Pointer-move during a drag.
    ///
    /// The new position keeps the grab offset and is clamped so the
    /// element's minimum footprint stays on the canvas. Returns the
    /// stored position, or `None` when no drag is active or the dragged
    /// element no longer exists.
    pub fn continue_move(
        &mut self,
        model: &mut CanvasModel,
        pointer_x: f32,
        pointer_y: f32,
    ) -> Option<Position> {
        let session = self.drag?;
        let max_x = (self.canvas_width() - self.min_element_size.0).max(0.0);
        let max_y = (model.height() - self.min_element_size.1).max(0.0);
        // max before min so NaN lands on the lower bound
        let x = (pointer_x - session.grab_offset.0).max(0.0).min(max_x);
        let y = (pointer_y - session.grab_offset.1).max(0.0).min(max_y);

        if model.update_position(session.element_id, x, y) {
            model.get(session.element_id).map(CanvasElement::position)
        } else {
            None
        }
    }

    /// Pointer-up anywhere: close the move session.
    ///
    /// The last applied position stays. Returns whether a session was open.
    pub fn end_move(&mut self) -> bool {
        self.drag.take().is_some()
    }

    // -----------------------------------------------------------------------
    // Duplicate / delete
    // -----------------------------------------------------------------------

    /// Copy an element with a new id, offset by the duplicate offset.
    ///
    /// The copy goes on top of the paint order; the selection is left
    /// unchanged.
    pub fn duplicate(&mut self, model: &mut CanvasModel, id: ElementId) -> Option<ElementId> {
        let Some(original) = model.get(id) else {
            tracing::debug!("Ignoring duplicate of unknown element {id}");
            return None;
        };
        let copy = original.duplicate(self.duplicate_offset.0, self.duplicate_offset.1);
        let copy_id = copy.id();
        model.insert(copy).then_some(copy_id)
    }

    /// Delete an element. A move session on it is closed.
    pub fn delete(&mut self, model: &mut CanvasModel, id: ElementId) -> bool {
        if self.drag.is_some_and(|session| session.element_id == id) {
            self.drag = None;
        }
        model.remove(id).is_some()
    }

    /// Remove every element and abandon any gesture.
    pub fn clear(&mut self, model: &mut CanvasModel) {
        self.palette = PaletteGesture::Idle;
        self.drag = None;
        model.replace_all(Vec::new());
        tracing::info!("Canvas cleared");
    }

    fn within_canvas(&self, model: &CanvasModel, x: f32, y: f32) -> bool {
        (0.0..=self.canvas_width()).contains(&x) && (0.0..=model.height()).contains(&y)
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
