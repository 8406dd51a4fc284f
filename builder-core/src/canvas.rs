//! Canvas model: the ordered set of placed elements and the selection.
//!
//! This is the system of record. Every mutation is applied completely
//! or not at all, and an operation that names an unknown element is a
//! no-op rather than an error.

use serde::Serialize;

use crate::element::{CanvasElement, ElementId, PropertyValue};

/// Live canvas state.
///
/// Invariants:
/// - element ids are pairwise distinct;
/// - the selection, when set, names an element that is present;
/// - every stored position has `x >= 0` and `y >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasModel {
    /// Elements in paint order; later entries are drawn on top.
    elements: Vec<CanvasElement>,
    /// Currently selected element.
    selected: Option<ElementId>,
    /// Canvas background color.
    background: String,
    /// Canvas height layout hint in pixels.
    height: f32,
}

impl CanvasModel {
    /// Create an empty canvas.
    #[must_use]
    pub fn new(background: impl Into<String>, height: f32) -> Self {
        Self {
            elements: Vec::new(),
            selected: None,
            background: background.into(),
            height: if height.is_finite() && height > 0.0 {
                height
            } else {
                1.0
            },
        }
    }

    /// Elements in paint order.
    #[must_use]
    pub fn elements(&self) -> &[CanvasElement] {
        &self.elements
    }

    /// Get an element by ID.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&CanvasElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// Whether an element with this id is on the canvas.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Currently selected element ID.
    #[must_use]
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    /// Currently selected element.
    #[must_use]
    pub fn selected(&self) -> Option<&CanvasElement> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Canvas background color.
    #[must_use]
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Canvas height hint in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the canvas has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Set the background color.
    pub fn set_background(&mut self, color: impl Into<String>) {
        self.background = color.into();
    }

    /// Set the height hint. Non-positive or non-finite values are ignored.
    pub fn set_height(&mut self, px: f32) -> bool {
        if px.is_finite() && px > 0.0 {
            self.height = px;
            true
        } else {
            tracing::debug!("Ignoring canvas height {px}");
            false
        }
    }

    /// Append an element on top of the paint order.
    ///
    /// Rejected if an element with the same id is already present.
    pub fn insert(&mut self, mut element: CanvasElement) -> bool {
        if self.contains(element.id()) {
            tracing::debug!("Ignoring insert of duplicate id {}", element.id());
            return false;
        }
        let position = element.position();
        element.set_position(position.x, position.y);
        self.elements.push(element);
        true
    }

    /// Move an element, clamping both axes to `>= 0`.
    pub fn update_position(&mut self, id: ElementId, x: f32, y: f32) -> bool {
        match self.element_mut(id) {
            Some(element) => {
                element.set_position(x, y);
                true
            }
            None => {
                tracing::debug!("Ignoring position update for unknown element {id}");
                false
            }
        }
    }

    /// Replace one property value.
    ///
    /// No-op if the element is unknown or the key is not in its schema.
    pub fn update_property(&mut self, id: ElementId, key: &str, value: PropertyValue) -> bool {
        let Some(element) = self.element_mut(id) else {
            tracing::debug!("Ignoring property update for unknown element {id}");
            return false;
        };
        if element.set_property(key, value) {
            true
        } else {
            tracing::debug!("Ignoring unknown property {key} on {} {id}", element.kind());
            false
        }
    }

    /// Remove an element, clearing the selection if it pointed at it.
    pub fn remove(&mut self, id: ElementId) -> Option<CanvasElement> {
        let Some(index) = self.index_of(id) else {
            tracing::debug!("Ignoring removal of unknown element {id}");
            return None;
        };
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.elements.remove(index))
    }

    /// Select an element, or clear the selection with `None`.
    ///
    /// Selecting an unknown id leaves the selection unchanged.
    pub fn select(&mut self, id: Option<ElementId>) -> bool {
        match id {
            Some(id) if !self.contains(id) => {
                tracing::debug!("Ignoring selection of unknown element {id}");
                false
            }
            _ => {
                self.selected = id;
                true
            }
        }
    }

    /// Replace every element and clear the selection.
    ///
    /// Later elements that repeat an earlier id are dropped.
    pub fn replace_all(&mut self, elements: Vec<CanvasElement>) {
        self.elements.clear();
        self.selected = None;
        for element in elements {
            self.insert(element);
        }
    }

    fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut CanvasElement> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }
}

impl Default for CanvasModel {
    fn default() -> Self {
        Self::new("#ffffff", 700.0)
    }
}
