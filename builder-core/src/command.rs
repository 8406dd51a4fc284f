//! Serializable editor commands.
//!
//! Every inbound editor operation has a [`Command`] value, so a host can
//! drive the editor from JSON (scripts, message channels, tests) instead
//! of calling methods directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Viewport;
use crate::element::{ElementId, ElementKind, PropertyValue};
use crate::BuilderError;

/// Alias for the most recently created element.
pub const LAST_ALIAS: &str = "$last";

/// Reference to an element inside a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ElementRef {
    /// A concrete element id.
    Id(ElementId),
    /// The element most recently created by this editor.
    Last,
}

impl From<ElementId> for ElementRef {
    fn from(id: ElementId) -> Self {
        Self::Id(id)
    }
}

impl FromStr for ElementRef {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == LAST_ALIAS {
            return Ok(Self::Last);
        }
        ElementId::parse(s)
            .map(Self::Id)
            .map_err(|_| BuilderError::InvalidElementRef(s.to_string()))
    }
}

impl TryFrom<String> for ElementRef {
    type Error = BuilderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ElementRef> for String {
    fn from(value: ElementRef) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Last => f.write_str(LAST_ALIAS),
        }
    }
}

/// An inbound editor operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Palette drag-and-drop in one step.
    InstantiateFromPalette {
        /// Kind to place.
        kind: ElementKind,
        /// Drop X in canvas coordinates.
        x: f32,
        /// Drop Y in canvas coordinates.
        y: f32,
    },
    /// Replace the canvas with a preset.
    InstantiateFromPreset {
        /// Preset name.
        preset: String,
    },
    /// Drag-start on a palette entry.
    ArmPalette {
        /// Kind being dragged.
        kind: ElementKind,
    },
    /// Drop of the armed palette entry.
    DropOnCanvas {
        /// Drop X in canvas coordinates.
        x: f32,
        /// Drop Y in canvas coordinates.
        y: f32,
    },
    /// Palette drag ended off the canvas.
    CancelPalette,
    /// Pointer-down on an element.
    BeginMove {
        /// Element under the pointer.
        id: ElementRef,
        /// Pointer X.
        x: f32,
        /// Pointer Y.
        y: f32,
    },
    /// Pointer-move during a drag.
    ContinueMove {
        /// Pointer X.
        x: f32,
        /// Pointer Y.
        y: f32,
    },
    /// Pointer-up.
    EndMove,
    /// Replace a property value.
    SetProperty {
        /// Target element.
        id: ElementRef,
        /// Property name.
        key: String,
        /// New value.
        value: PropertyValue,
    },
    /// Write raw field text through the property editor.
    EditField {
        /// Target element.
        id: ElementRef,
        /// Property name.
        key: String,
        /// Text as typed.
        raw: String,
    },
    /// Move an element directly.
    SetPosition {
        /// Target element.
        id: ElementRef,
        /// New X.
        x: f32,
        /// New Y.
        y: f32,
    },
    /// Copy an element.
    Duplicate {
        /// Element to copy.
        id: ElementRef,
    },
    /// Remove an element.
    Delete {
        /// Element to remove.
        id: ElementRef,
    },
    /// Change or clear the selection.
    Select {
        /// Element to select; absent clears the selection.
        #[serde(default)]
        id: Option<ElementRef>,
    },
    /// Remove every element.
    ClearCanvas,
    /// Set the canvas background color.
    SetCanvasBackground {
        /// CSS color.
        color: String,
    },
    /// Set the canvas height hint.
    SetCanvasHeight {
        /// Requested height in pixels.
        px: f32,
    },
    /// Switch the preview viewport.
    SetViewport {
        /// Viewport to use.
        viewport: Viewport,
    },
    /// Record text typed into a placed input element.
    SetInputEcho {
        /// Target input element.
        id: ElementRef,
        /// Typed text.
        text: String,
    },
}

impl Command {
    /// Parse a JSON array of commands.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names an unknown
    /// operation, kind, viewport or element reference.
    pub fn parse_script(json: &str) -> Result<Vec<Self>, BuilderError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Result of executing a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "id", rename_all = "snake_case")]
pub enum Outcome {
    /// A new element was created.
    Created(ElementId),
    /// The command changed editor state.
    Applied,
    /// The command was a no-op.
    Ignored,
}

impl Outcome {
    /// Whether the command had any effect.
    #[must_use]
    pub fn is_effective(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    /// Id of the created element, if any.
    #[must_use]
    pub fn created(self) -> Option<ElementId> {
        match self {
            Self::Created(id) => Some(id),
            Self::Applied | Self::Ignored => None,
        }
    }
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Ignored
        }
    }
}

impl From<Option<ElementId>> for Outcome {
    fn from(created: Option<ElementId>) -> Self {
        created.map_or(Self::Ignored, Self::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette_command() {
        let command: Command = serde_json::from_str(
            r#"{"op": "instantiate_from_palette", "kind": "heading", "x": 120, "y": 80}"#,
        )
        .expect("parse");
        assert_eq!(
            command,
            Command::InstantiateFromPalette {
                kind: ElementKind::Heading,
                x: 120.0,
                y: 80.0
            }
        );
    }

    #[test]
    fn test_element_refs() {
        let id = ElementId::new();
        assert_eq!("$last".parse::<ElementRef>().expect("alias"), ElementRef::Last);
        assert_eq!(
            id.to_string().parse::<ElementRef>().expect("id"),
            ElementRef::Id(id)
        );
        assert!(matches!(
            "element-7".parse::<ElementRef>(),
            Err(BuilderError::InvalidElementRef(_))
        ));
    }

    #[test]
    fn test_ref_serializes_as_string() {
        let command = Command::Delete { id: ElementRef::Last };
        let json = serde_json::to_string(&command).expect("serialize");
        assert_eq!(json, r#"{"op":"delete","id":"$last"}"#);
    }

    #[test]
    fn test_select_without_id_clears() {
        let command: Command = serde_json::from_str(r#"{"op": "select"}"#).expect("parse");
        assert_eq!(command, Command::Select { id: None });
    }

    #[test]
    fn test_set_property_accepts_text_or_list() {
        let script = r##"[
            {"op": "set_property", "id": "$last", "key": "color", "value": "#ff0000"},
            {"op": "set_property", "id": "$last", "key": "items", "value": ["a", "b"]}
        ]"##;
        let commands = Command::parse_script(script).expect("parse");
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            &commands[1],
            Command::SetProperty { value: PropertyValue::List(items), .. } if items.len() == 2
        ));
    }

    #[test]
    fn test_script_rejects_unknown_op_and_kind() {
        assert!(Command::parse_script(r#"[{"op": "explode"}]"#).is_err());
        assert!(Command::parse_script(
            r#"[{"op": "arm_palette", "kind": "carousel"}]"#
        )
        .is_err());
    }

    #[test]
    fn test_outcome_conversions() {
        let id = ElementId::new();
        assert_eq!(Outcome::from(Some(id)).created(), Some(id));
        assert_eq!(Outcome::from(None), Outcome::Ignored);
        assert!(Outcome::from(true).is_effective());
        assert!(!Outcome::Ignored.is_effective());
    }
}
