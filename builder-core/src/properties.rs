//! Property editor: forms for the selected element and write-back of
//! edited field values.
//!
//! A form is always built from a single element in one pass, so a host
//! redrawing after a selection change never sees fields from two
//! elements mixed together.

use serde::Serialize;

use crate::canvas::CanvasModel;
use crate::element::{CanvasElement, ElementId, ElementKind, PropertyValue};
use crate::schema::{FieldKind, SchemaRegistry};

/// One editable field with its current value rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    /// Property name.
    pub key: &'static str,
    /// Human label.
    pub label: String,
    /// Hint icon.
    pub icon: &'static str,
    /// Widget to render.
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Current value; list entries are joined by newlines.
    pub value: String,
}

/// The complete field set for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyForm {
    /// Element being edited.
    pub element_id: ElementId,
    /// Its kind.
    pub kind: ElementKind,
    /// One field per schema key, in schema order.
    pub fields: Vec<FormField>,
}

impl PropertyForm {
    /// Field for `key`.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.key == key)
    }
}

/// Reads and writes element properties through schema-resolved fields.
#[derive(Debug, Clone, Copy)]
pub struct PropertyEditor<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> PropertyEditor<'a> {
    /// Create an editor over a schema registry.
    #[must_use]
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Form for the selected element, or `None` with nothing selected.
    #[must_use]
    pub fn form(&self, model: &CanvasModel) -> Option<PropertyForm> {
        model.selected().map(|element| self.build_form(element))
    }

    /// Form for a specific element.
    #[must_use]
    pub fn form_for(&self, model: &CanvasModel, id: ElementId) -> Option<PropertyForm> {
        model.get(id).map(|element| self.build_form(element))
    }

    /// Convert raw field text into a property value for `key` of `kind`.
    ///
    /// List fields take one entry per line with blank lines dropped. Every
    /// other field keeps the text exactly as typed. Returns `None` if the
    /// key is not in the kind's schema.
    #[must_use]
    pub fn parse_field(&self, kind: ElementKind, key: &str, raw: &str) -> Option<PropertyValue> {
        let field = self.registry.field(kind, key)?;
        Some(match field.kind {
            FieldKind::List => PropertyValue::List(
                raw.lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(ToString::to_string)
                    .collect(),
            ),
            FieldKind::Text { .. } | FieldKind::Color | FieldKind::Choice { .. } => {
                PropertyValue::Text(raw.to_string())
            }
        })
    }

    /// Write an edited field back to the model.
    ///
    /// No-op if the element or key is unknown.
    pub fn apply(&self, model: &mut CanvasModel, id: ElementId, key: &str, raw: &str) -> bool {
        let Some(kind) = model.get(id).map(CanvasElement::kind) else {
            tracing::debug!("Ignoring field edit for unknown element {id}");
            return false;
        };
        match self.parse_field(kind, key, raw) {
            Some(value) => model.update_property(id, key, value),
            None => {
                tracing::debug!("Ignoring edit of unknown field {key} on {kind}");
                false
            }
        }
    }

    fn build_form(&self, element: &CanvasElement) -> PropertyForm {
        let properties = element.properties();
        let fields = self
            .registry
            .fields(element.kind())
            .iter()
            .map(|spec| {
                let value = properties
                    .get(spec.key)
                    .map(|value| match spec.kind {
                        FieldKind::List => value.items().join("\n"),
                        _ => value.to_string(),
                    })
                    .unwrap_or_default();
                FormField {
                    key: spec.key,
                    label: spec.label.clone(),
                    icon: spec.icon,
                    kind: spec.kind,
                    value,
                }
            })
            .collect();
        PropertyForm {
            element_id: element.id(),
            kind: element.kind(),
            fields,
        }
    }
}
