//! Editor facade: one session's worth of engine state behind the host
//! boundary.
//!
//! The editor owns the canvas model, the interaction controller and the
//! static registries, and exposes every inbound operation and read-only
//! projection. Operations on unknown elements are silent no-ops that
//! report `false`/`None`; nothing here returns an error.

use std::collections::HashMap;

use crate::canvas::CanvasModel;
use crate::codegen::{self, CodeGenerator, GeneratedCode};
use crate::command::{Command, ElementRef, Outcome};
use crate::config::{EditorConfig, Viewport};
use crate::element::{CanvasElement, ElementId, ElementKind, Position, PropertyValue};
use crate::interaction::InteractionController;
use crate::preset::PresetLibrary;
use crate::properties::{PropertyEditor, PropertyForm};
use crate::schema::SchemaRegistry;

/// A single editing session.
#[derive(Debug)]
pub struct Editor {
    config: EditorConfig,
    registry: SchemaRegistry,
    presets: PresetLibrary,
    model: CanvasModel,
    interaction: InteractionController,
    generator: CodeGenerator,
    /// Transient text typed into placed input elements.
    input_echo: HashMap<ElementId, String>,
    /// Most recently created element, the target of `$last`.
    last_created: Option<ElementId>,
}

impl Editor {
    /// Create an editor with an empty canvas.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let height = config.normalize_canvas_height(config.canvas_height);
        tracing::debug!(
            "Creating editor: width {}, height {height}, viewport {}",
            config.canvas_width,
            config.viewport
        );
        Self {
            registry: SchemaRegistry::new(),
            presets: PresetLibrary::new(),
            model: CanvasModel::new(config.canvas_background.clone(), height),
            interaction: InteractionController::new(&config),
            generator: CodeGenerator::new(config.document_title.clone()),
            input_echo: HashMap::new(),
            last_created: None,
            config,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Preset library.
    #[must_use]
    pub fn presets(&self) -> &PresetLibrary {
        &self.presets
    }

    /// Canvas model.
    #[must_use]
    pub fn model(&self) -> &CanvasModel {
        &self.model
    }

    /// Interaction controller.
    #[must_use]
    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    /// Most recently created element, if it still exists.
    #[must_use]
    pub fn last_created(&self) -> Option<ElementId> {
        self.last_created.filter(|id| self.model.contains(*id))
    }

    // -----------------------------------------------------------------------
    // Element creation
    // -----------------------------------------------------------------------

    /// Place a new element of `kind` as if dropped at `(drop_x, drop_y)`.
    pub fn instantiate_from_palette(
        &mut self,
        kind: ElementKind,
        drop_x: f32,
        drop_y: f32,
    ) -> Option<ElementId> {
        let id = self
            .interaction
            .place_from_palette(&mut self.model, kind, drop_x, drop_y);
        self.record_created(id)
    }

    /// Drag-start on a palette entry.
    pub fn arm_palette(&mut self, kind: ElementKind) {
        self.interaction.arm_palette(kind);
    }

    /// Drop the armed palette entry at `(x, y)`.
    pub fn drop_on_canvas(&mut self, x: f32, y: f32) -> Option<ElementId> {
        let id = self.interaction.drop_on_canvas(&mut self.model, x, y);
        self.record_created(id)
    }

    /// Abandon a palette drag.
    pub fn cancel_palette(&mut self) {
        self.interaction.cancel_palette();
    }

    /// Replace the canvas with a preset's elements.
    ///
    /// Returns `false` for an unknown preset name, leaving the canvas as
    /// it was.
    pub fn instantiate_from_preset(&mut self, name: &str) -> bool {
        let preset = match self.presets.find(name) {
            Ok(preset) => preset,
            Err(err) => {
                tracing::debug!("Ignoring preset request: {err}");
                return false;
            }
        };
        self.input_echo.clear();
        self.interaction.apply_preset(&mut self.model, preset);
        self.last_created = self.model.elements().last().map(CanvasElement::id);
        true
    }

    /// Copy an element. The original stays selected.
    pub fn duplicate(&mut self, id: ElementId) -> Option<ElementId> {
        let copy = self.interaction.duplicate(&mut self.model, id);
        self.record_created(copy)
    }

    // -----------------------------------------------------------------------
    // Move gesture
    // -----------------------------------------------------------------------

    /// Pointer-down over an element.
    pub fn begin_move(&mut self, id: ElementId, pointer_x: f32, pointer_y: f32) -> bool {
        self.interaction
            .begin_move(&mut self.model, id, pointer_x, pointer_y)
    }

    /// Pointer-move while dragging.
    pub fn continue_move(&mut self, pointer_x: f32, pointer_y: f32) -> Option<Position> {
        self.interaction
            .continue_move(&mut self.model, pointer_x, pointer_y)
    }

    /// Pointer-up anywhere.
    pub fn end_move(&mut self) -> bool {
        self.interaction.end_move()
    }

    // -----------------------------------------------------------------------
    // Direct mutation
    // -----------------------------------------------------------------------

    /// Replace a property value as-is.
    pub fn set_property(
        &mut self,
        id: ElementId,
        key: &str,
        value: impl Into<PropertyValue>,
    ) -> bool {
        self.model.update_property(id, key, value.into())
    }

    /// Write raw field text through the property editor.
    pub fn edit_field(&mut self, id: ElementId, key: &str, raw: &str) -> bool {
        PropertyEditor::new(&self.registry).apply(&mut self.model, id, key, raw)
    }

    /// Move an element outside of a gesture. Coordinates clamp to `>= 0`.
    pub fn set_position(&mut self, id: ElementId, x: f32, y: f32) -> bool {
        self.model.update_position(id, x, y)
    }

    /// Delete an element along with its input echo.
    pub fn delete(&mut self, id: ElementId) -> bool {
        if self.interaction.delete(&mut self.model, id) {
            self.input_echo.remove(&id);
            true
        } else {
            false
        }
    }

    /// Change the selection. An unknown id is ignored.
    pub fn select(&mut self, id: Option<ElementId>) -> bool {
        self.model.select(id)
    }

    /// Remove every element.
    pub fn clear_canvas(&mut self) {
        self.interaction.clear(&mut self.model);
        self.input_echo.clear();
        self.last_created = None;
    }

    /// Set the canvas background color.
    pub fn set_canvas_background(&mut self, color: impl Into<String>) {
        self.model.set_background(color);
    }

    /// Set the canvas height, snapped to the configured step and bounds.
    ///
    /// Returns the stored height.
    pub fn set_canvas_height(&mut self, px: f32) -> f32 {
        if px.is_finite() {
            self.model
                .set_height(self.config.normalize_canvas_height(px));
        } else {
            tracing::warn!("Ignoring non-finite canvas height {px}");
        }
        self.model.height()
    }

    /// Switch the preview viewport. Elements are not moved.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.interaction.set_viewport(viewport);
    }

    /// Active viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.interaction.viewport()
    }

    /// Record text typed into a placed input element.
    ///
    /// Only elements of kind `input` carry an echo.
    pub fn set_input_echo(&mut self, id: ElementId, text: impl Into<String>) -> bool {
        match self.model.get(id).map(CanvasElement::kind) {
            Some(ElementKind::Input) => {
                self.input_echo.insert(id, text.into());
                true
            }
            Some(kind) => {
                tracing::debug!("Ignoring input echo for {kind} {id}");
                false
            }
            None => {
                tracing::debug!("Ignoring input echo for unknown element {id}");
                false
            }
        }
    }

    /// Text typed into an input element.
    #[must_use]
    pub fn input_echo(&self, id: ElementId) -> Option<&str> {
        self.input_echo.get(&id).map(String::as_str)
    }

    // -----------------------------------------------------------------------
    // Projections
    // -----------------------------------------------------------------------

    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[CanvasElement] {
        self.model.elements()
    }

    /// Selected element.
    #[must_use]
    pub fn selected(&self) -> Option<&CanvasElement> {
        self.model.selected()
    }

    /// Property form for the selected element.
    #[must_use]
    pub fn property_form(&self) -> Option<PropertyForm> {
        PropertyEditor::new(&self.registry).form(&self.model)
    }

    /// Generated HTML document.
    #[must_use]
    pub fn generate_markup(&self) -> String {
        self.generator.markup(&self.model)
    }

    /// Generated stylesheet.
    #[must_use]
    pub fn generate_stylesheet(&self) -> String {
        codegen::stylesheet(self.model.background())
    }

    /// Both generated artifacts.
    #[must_use]
    pub fn generate(&self) -> GeneratedCode {
        self.generator.generate(&self.model)
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// Apply a command.
    pub fn execute(&mut self, command: Command) -> Outcome {
        tracing::trace!(?command, "Executing");
        match command {
            Command::InstantiateFromPalette { kind, x, y } => {
                self.instantiate_from_palette(kind, x, y).into()
            }
            Command::InstantiateFromPreset { preset } => {
                self.instantiate_from_preset(&preset).into()
            }
            Command::ArmPalette { kind } => {
                self.arm_palette(kind);
                Outcome::Applied
            }
            Command::DropOnCanvas { x, y } => self.drop_on_canvas(x, y).into(),
            Command::CancelPalette => {
                self.cancel_palette();
                Outcome::Applied
            }
            Command::BeginMove { id, x, y } => self
                .resolve(id)
                .is_some_and(|id| self.begin_move(id, x, y))
                .into(),
            Command::ContinueMove { x, y } => self.continue_move(x, y).is_some().into(),
            Command::EndMove => self.end_move().into(),
            Command::SetProperty { id, key, value } => self
                .resolve(id)
                .is_some_and(|id| self.set_property(id, &key, value))
                .into(),
            Command::EditField { id, key, raw } => self
                .resolve(id)
                .is_some_and(|id| self.edit_field(id, &key, &raw))
                .into(),
            Command::SetPosition { id, x, y } => self
                .resolve(id)
                .is_some_and(|id| self.set_position(id, x, y))
                .into(),
            Command::Duplicate { id } => self
                .resolve(id)
                .and_then(|id| self.duplicate(id))
                .into(),
            Command::Delete { id } => self.resolve(id).is_some_and(|id| self.delete(id)).into(),
            Command::Select { id: None } => self.select(None).into(),
            Command::Select { id: Some(id) } => self
                .resolve(id)
                .is_some_and(|id| self.select(Some(id)))
                .into(),
            Command::ClearCanvas => {
                self.clear_canvas();
                Outcome::Applied
            }
            Command::SetCanvasBackground { color } => {
                self.set_canvas_background(color);
                Outcome::Applied
            }
            Command::SetCanvasHeight { px } => {
                self.set_canvas_height(px);
                px.is_finite().into()
            }
            Command::SetViewport { viewport } => {
                self.set_viewport(viewport);
                Outcome::Applied
            }
            Command::SetInputEcho { id, text } => self
                .resolve(id)
                .is_some_and(|id| self.set_input_echo(id, text))
                .into(),
        }
    }

    /// Resolve an element reference against the live canvas.
    #[must_use]
    pub fn resolve(&self, reference: ElementRef) -> Option<ElementId> {
        match reference {
            ElementRef::Id(id) => Some(id),
            ElementRef::Last => {
                let last = self.last_created();
                if last.is_none() {
                    tracing::debug!("$last does not name a live element");
                }
                last
            }
        }
    }

    fn record_created(&mut self, id: Option<ElementId>) -> Option<ElementId> {
        if id.is_some() {
            self.last_created = id;
        }
        id
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
