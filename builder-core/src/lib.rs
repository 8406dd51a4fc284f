//! # Pagesmith Core
//!
//! Engine for a drag-and-drop page builder: typed content blocks are
//! placed on a bounded canvas, moved, edited through schema-driven
//! forms, and serialized to standalone HTML and CSS.
//! Compiles to WASM for use behind a browser UI.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Editor                    │
//! │        commands in, projections out         │
//! ├─────────────────────────────────────────────┤
//! │  Interaction       │  Property Editor       │
//! │  - Palette drop    │  - Field resolution    │
//! │  - Free-form move  │  - List write-back     │
//! │  - Duplicate       │                        │
//! ├─────────────────────────────────────────────┤
//! │  Canvas Model      │  Code Generator        │
//! │  - Elements        │  - HTML fragments      │
//! │  - Selection       │  - Stylesheet          │
//! ├─────────────────────────────────────────────┤
//! │  Schema Registry   │  Preset Library        │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use builder_core::{Editor, ElementKind};
//!
//! let mut editor = Editor::default();
//! let id = editor
//!     .instantiate_from_palette(ElementKind::Paragraph, 120.0, 80.0)
//!     .expect("dropped inside the canvas");
//! editor.set_property(id, "color", "#ff0000");
//! assert!(editor.generate_markup().contains("color: #ff0000"));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod codegen;
pub mod command;
pub mod config;
pub mod editor;
pub mod element;
pub mod error;
pub mod interaction;
pub mod preset;
pub mod properties;
pub mod schema;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use canvas::CanvasModel;
pub use codegen::{CodeGenerator, GeneratedCode};
pub use command::{Command, ElementRef, Outcome};
pub use config::{EditorConfig, Viewport};
pub use editor::Editor;
pub use element::{CanvasElement, ElementId, ElementKind, Position, PropertyMap, PropertyValue};
pub use error::{BuilderError, BuilderResult};
pub use interaction::{InteractionController, MoveSession, PaletteGesture};
pub use preset::{Preset, PresetLibrary, PresetSummary, PresetTemplate};
pub use properties::{FormField, PropertyEditor, PropertyForm};
pub use schema::{FieldKind, FieldSpec, PropertySpec, SchemaRegistry, ValueKind};

/// Pagesmith core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
