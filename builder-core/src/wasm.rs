//! WebAssembly bindings for builder-core.
//!
//! This module exposes the editor to JavaScript when compiled to WASM.
//! Element ids cross the boundary as strings; projections are JSON.

use wasm_bindgen::prelude::*;

use crate::{Command, Editor, EditorConfig, ElementId, ElementKind, Viewport};

/// Initialize the builder WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
}

/// Editor instance for WASM.
#[wasm_bindgen]
pub struct WasmEditor {
    editor: Editor,
}

#[wasm_bindgen]
impl WasmEditor {
    /// Create an editor with the default configuration.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: Editor::default(),
        }
    }

    /// Create an editor from a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error string if the configuration is malformed or invalid.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<WasmEditor, String> {
        let config = EditorConfig::from_json(json).map_err(|e| e.to_string())?;
        Ok(Self {
            editor: Editor::new(config),
        })
    }

    /// Place an element as if dropped from the palette.
    ///
    /// Returns the new element id, or `undefined` if the drop missed the
    /// canvas.
    ///
    /// # Errors
    ///
    /// Returns an error string for an unknown kind name.
    #[wasm_bindgen(js_name = instantiateFromPalette)]
    pub fn instantiate_from_palette(
        &mut self,
        kind: &str,
        drop_x: f32,
        drop_y: f32,
    ) -> Result<Option<String>, String> {
        let kind: ElementKind = kind.parse().map_err(|e: crate::BuilderError| e.to_string())?;
        Ok(self
            .editor
            .instantiate_from_palette(kind, drop_x, drop_y)
            .map(|id| id.to_string()))
    }

    /// Replace the canvas with a named preset.
    #[wasm_bindgen(js_name = instantiateFromPreset)]
    pub fn instantiate_from_preset(&mut self, name: &str) -> bool {
        self.editor.instantiate_from_preset(name)
    }

    /// Pointer-down over an element.
    #[wasm_bindgen(js_name = beginMove)]
    pub fn begin_move(&mut self, id: &str, pointer_x: f32, pointer_y: f32) -> bool {
        parse_id(id).is_some_and(|id| self.editor.begin_move(id, pointer_x, pointer_y))
    }

    /// Pointer-move while dragging.
    #[wasm_bindgen(js_name = continueMove)]
    pub fn continue_move(&mut self, pointer_x: f32, pointer_y: f32) -> bool {
        self.editor.continue_move(pointer_x, pointer_y).is_some()
    }

    /// Pointer-up anywhere in the document.
    #[wasm_bindgen(js_name = endMove)]
    pub fn end_move(&mut self) -> bool {
        self.editor.end_move()
    }

    /// Replace a property with a text value.
    #[wasm_bindgen(js_name = setProperty)]
    pub fn set_property(&mut self, id: &str, key: &str, value: &str) -> bool {
        parse_id(id).is_some_and(|id| self.editor.set_property(id, key, value))
    }

    /// Write raw field text through the property editor.
    #[wasm_bindgen(js_name = editField)]
    pub fn edit_field(&mut self, id: &str, key: &str, raw: &str) -> bool {
        parse_id(id).is_some_and(|id| self.editor.edit_field(id, key, raw))
    }

    /// Move an element directly.
    #[wasm_bindgen(js_name = setPosition)]
    pub fn set_position(&mut self, id: &str, x: f32, y: f32) -> bool {
        parse_id(id).is_some_and(|id| self.editor.set_position(id, x, y))
    }

    /// Copy an element; returns the copy's id.
    #[wasm_bindgen]
    pub fn duplicate(&mut self, id: &str) -> Option<String> {
        parse_id(id)
            .and_then(|id| self.editor.duplicate(id))
            .map(|id| id.to_string())
    }

    /// Delete an element.
    #[wasm_bindgen]
    pub fn delete(&mut self, id: &str) -> bool {
        parse_id(id).is_some_and(|id| self.editor.delete(id))
    }

    /// Select an element, or clear the selection with `undefined`.
    #[wasm_bindgen]
    pub fn select(&mut self, id: Option<String>) -> bool {
        match id {
            None => self.editor.select(None),
            Some(id) => parse_id(&id).is_some_and(|id| self.editor.select(Some(id))),
        }
    }

    /// Remove every element.
    #[wasm_bindgen(js_name = clearCanvas)]
    pub fn clear_canvas(&mut self) {
        self.editor.clear_canvas();
    }

    /// Set the canvas background color.
    #[wasm_bindgen(js_name = setCanvasBackground)]
    pub fn set_canvas_background(&mut self, color: &str) {
        self.editor.set_canvas_background(color);
    }

    /// Set the canvas height; returns the stored value.
    #[wasm_bindgen(js_name = setCanvasHeight)]
    pub fn set_canvas_height(&mut self, px: f32) -> f32 {
        self.editor.set_canvas_height(px)
    }

    /// Switch the preview viewport (`mobile`, `tablet` or `desktop`).
    ///
    /// # Errors
    ///
    /// Returns an error string for an unknown viewport name.
    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, viewport: &str) -> Result<(), String> {
        let viewport: Viewport = viewport
            .parse()
            .map_err(|e: crate::BuilderError| e.to_string())?;
        self.editor.set_viewport(viewport);
        Ok(())
    }

    /// Record text typed into a placed input element.
    #[wasm_bindgen(js_name = setInputEcho)]
    pub fn set_input_echo(&mut self, id: &str, text: &str) -> bool {
        parse_id(id).is_some_and(|id| self.editor.set_input_echo(id, text))
    }

    /// Text typed into an input element.
    #[wasm_bindgen(js_name = inputEcho)]
    #[must_use]
    pub fn input_echo(&self, id: &str) -> Option<String> {
        parse_id(id)
            .and_then(|id| self.editor.input_echo(id))
            .map(ToString::to_string)
    }

    /// Apply a JSON-encoded command; returns the JSON-encoded outcome.
    ///
    /// # Errors
    ///
    /// Returns an error string if the command cannot be parsed.
    #[wasm_bindgen]
    pub fn execute(&mut self, json: &str) -> Result<String, String> {
        let command: Command = serde_json::from_str(json).map_err(|e| e.to_string())?;
        let outcome = self.editor.execute(command);
        serde_json::to_string(&outcome).map_err(|e| e.to_string())
    }

    /// Elements in paint order as JSON.
    #[wasm_bindgen(js_name = getElements)]
    #[must_use]
    pub fn get_elements(&self) -> String {
        serde_json::to_string(self.editor.elements()).unwrap_or_default()
    }

    /// Selected element as JSON, or `null`.
    #[wasm_bindgen(js_name = getSelected)]
    #[must_use]
    pub fn get_selected(&self) -> String {
        serde_json::to_string(&self.editor.selected()).unwrap_or_default()
    }

    /// Property form for the selected element as JSON, or `null`.
    #[wasm_bindgen(js_name = getPropertyForm)]
    #[must_use]
    pub fn get_property_form(&self) -> String {
        serde_json::to_string(&self.editor.property_form()).unwrap_or_default()
    }

    /// Palette entries as JSON.
    #[wasm_bindgen(js_name = getPalette)]
    #[must_use]
    pub fn get_palette(&self) -> String {
        let entries: Vec<_> = ElementKind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "kind": kind,
                    "label": kind.label(),
                    "icon": kind.icon(),
                })
            })
            .collect();
        serde_json::to_string(&entries).unwrap_or_default()
    }

    /// Preset summaries as JSON.
    #[wasm_bindgen(js_name = getPresets)]
    #[must_use]
    pub fn get_presets(&self) -> String {
        serde_json::to_string(&self.editor.presets().summaries()).unwrap_or_default()
    }

    /// Generated HTML document.
    #[wasm_bindgen(js_name = generateMarkup)]
    #[must_use]
    pub fn generate_markup(&self) -> String {
        self.editor.generate_markup()
    }

    /// Generated stylesheet.
    #[wasm_bindgen(js_name = generateStylesheet)]
    #[must_use]
    pub fn generate_stylesheet(&self) -> String {
        self.editor.generate_stylesheet()
    }
}

impl Default for WasmEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_id(id: &str) -> Option<ElementId> {
    match ElementId::parse(id) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::debug!("Ignoring malformed element id {id:?}: {err}");
            None
        }
    }
}
