//! Preset library: named, pre-composed element groups.
//!
//! A template may override only part of its kind's schema. Instantiation
//! starts from the schema defaults and applies the overrides, so every
//! produced element carries the complete key set.

use serde::Serialize;

use crate::element::{CanvasElement, ElementKind, Position};
use crate::schema::PropertyDefault::{self, List, Text};
use crate::{BuilderError, BuilderResult};

/// One element of a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetTemplate {
    /// Kind to instantiate.
    pub kind: ElementKind,
    /// X position.
    pub x: u16,
    /// Y position.
    pub y: u16,
    /// Property overrides applied on top of the kind's defaults.
    pub overrides: &'static [(&'static str, PropertyDefault)],
}

impl PresetTemplate {
    /// Build a freshly identified element from this template.
    #[must_use]
    pub fn instantiate(&self) -> CanvasElement {
        let mut element =
            CanvasElement::new(self.kind, Position::new(f32::from(self.x), f32::from(self.y)));
        for (key, value) in self.overrides {
            if !element.set_property(key, value.to_value()) {
                tracing::debug!("Preset override {key} is not a {} property", self.kind);
            }
        }
        element
    }
}

/// A named group of element templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Display name, also the lookup key.
    pub name: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Templates in paint order.
    pub templates: &'static [PresetTemplate],
}

impl Preset {
    /// Instantiate every template with new ids and copied properties.
    #[must_use]
    pub fn instantiate(&self) -> Vec<CanvasElement> {
        self.templates
            .iter()
            .map(PresetTemplate::instantiate)
            .collect()
    }
}

/// Summary of a preset for listings.
#[derive(Debug, Clone, Serialize)]
pub struct PresetSummary {
    /// Preset name.
    pub name: &'static str,
    /// Preset icon.
    pub icon: &'static str,
    /// Number of templates.
    pub element_count: usize,
}

const NAV_ITEMS: &[&str] = &["Home", "About", "Services", "Contact"];

const PRESETS: &[Preset] = &[
    Preset {
        name: "Single Page Layout",
        icon: "📄",
        templates: &[
            PresetTemplate {
                kind: ElementKind::Navbar,
                x: 0,
                y: 0,
                overrides: &[
                    ("backgroundColor", Text("#2563eb")),
                    ("height", Text("60px")),
                    ("width", Text("100%")),
                    ("items", List(NAV_ITEMS)),
                    ("textColor", Text("#ffffff")),
                    ("fontSize", Text("16px")),
                    ("padding", Text("0 20px")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Heading,
                x: 50,
                y: 100,
                overrides: &[
                    ("text", Text("Welcome to My Website")),
                    ("level", Text("h1")),
                    ("color", Text("#1f2937")),
                    ("fontSize", Text("48px")),
                    ("fontWeight", Text("bold")),
                    ("textAlign", Text("center")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Paragraph,
                x: 50,
                y: 180,
                overrides: &[
                    (
                        "text",
                        Text("This is a beautiful single page layout perfect for showcasing your content."),
                    ),
                    ("color", Text("#6b7280")),
                    ("fontSize", Text("18px")),
                    ("textAlign", Text("center")),
                    ("lineHeight", Text("1.6")),
                ],
            },
        ],
    },
    Preset {
        name: "Split Screen Layout",
        icon: "⚡",
        templates: &[
            PresetTemplate {
                kind: ElementKind::Container,
                x: 0,
                y: 0,
                overrides: &[
                    ("backgroundColor", Text("#f3f4f6")),
                    ("padding", Text("40px")),
                    ("borderRadius", Text("0px")),
                    ("minHeight", Text("400px")),
                    ("width", Text("50%")),
                    ("border", Text("none")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Container,
                x: 400,
                y: 0,
                overrides: &[
                    ("backgroundColor", Text("#1f2937")),
                    ("padding", Text("40px")),
                    ("borderRadius", Text("0px")),
                    ("minHeight", Text("400px")),
                    ("width", Text("50%")),
                    ("border", Text("none")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Heading,
                x: 50,
                y: 50,
                overrides: &[
                    ("text", Text("Left Side")),
                    ("level", Text("h2")),
                    ("color", Text("#1f2937")),
                    ("fontSize", Text("32px")),
                    ("fontWeight", Text("bold")),
                    ("textAlign", Text("left")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Heading,
                x: 450,
                y: 50,
                overrides: &[
                    ("text", Text("Right Side")),
                    ("level", Text("h2")),
                    ("color", Text("#ffffff")),
                    ("fontSize", Text("32px")),
                    ("fontWeight", Text("bold")),
                    ("textAlign", Text("left")),
                ],
            },
        ],
    },
    Preset {
        name: "Grid Layout",
        icon: "⚏",
        templates: &[
            PresetTemplate {
                kind: ElementKind::Heading,
                x: 200,
                y: 20,
                overrides: &[
                    ("text", Text("Grid Layout")),
                    ("level", Text("h1")),
                    ("color", Text("#1f2937")),
                    ("fontSize", Text("36px")),
                    ("fontWeight", Text("bold")),
                    ("textAlign", Text("center")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Card,
                x: 50,
                y: 100,
                overrides: &[
                    ("title", Text("Card 1")),
                    ("content", Text("First grid item")),
                    ("backgroundColor", Text("#dbeafe")),
                    ("borderColor", Text("#3b82f6")),
                    ("width", Text("200px")),
                    ("height", Text("150px")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Card,
                x: 300,
                y: 100,
                overrides: &[
                    ("title", Text("Card 2")),
                    ("content", Text("Second grid item")),
                    ("backgroundColor", Text("#dcfce7")),
                    ("borderColor", Text("#22c55e")),
                    ("width", Text("200px")),
                    ("height", Text("150px")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Card,
                x: 550,
                y: 100,
                overrides: &[
                    ("title", Text("Card 3")),
                    ("content", Text("Third grid item")),
                    ("backgroundColor", Text("#fef3c7")),
                    ("borderColor", Text("#f59e0b")),
                    ("width", Text("200px")),
                    ("height", Text("150px")),
                ],
            },
        ],
    },
    Preset {
        name: "Hero Image Layout",
        icon: "🖼️",
        templates: &[
            PresetTemplate {
                kind: ElementKind::Hero,
                x: 0,
                y: 0,
                overrides: &[
                    ("backgroundImage", Text("/placeholder.svg?height=400&width=800")),
                    ("height", Text("400px")),
                    ("width", Text("100%")),
                    ("overlayColor", Text("rgba(0,0,0,0.4)")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Heading,
                x: 200,
                y: 150,
                overrides: &[
                    ("text", Text("Hero Title")),
                    ("level", Text("h1")),
                    ("color", Text("#ffffff")),
                    ("fontSize", Text("48px")),
                    ("fontWeight", Text("bold")),
                    ("textAlign", Text("center")),
                ],
            },
            PresetTemplate {
                kind: ElementKind::Button,
                x: 300,
                y: 220,
                overrides: &[
                    ("text", Text("Get Started")),
                    ("backgroundColor", Text("#3b82f6")),
                    ("color", Text("#ffffff")),
                    ("padding", Text("15px 30px")),
                    ("borderRadius", Text("8px")),
                    ("fontSize", Text("18px")),
                    ("fontWeight", Text("bold")),
                ],
            },
        ],
    },
];

/// Read-only catalog of presets.
#[derive(Debug, Clone, Copy)]
pub struct PresetLibrary {
    presets: &'static [Preset],
}

impl PresetLibrary {
    /// The built-in preset catalog.
    #[must_use]
    pub fn new() -> Self {
        Self { presets: PRESETS }
    }

    /// Look up a preset by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Look up a preset, ignoring ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::UnknownPreset`] if no preset matches.
    pub fn find(&self, name: &str) -> BuilderResult<&'static Preset> {
        let needle = name.trim();
        self.presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(needle))
            .ok_or_else(|| BuilderError::UnknownPreset(name.to_string()))
    }

    /// All presets in display order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Preset> {
        self.presets.iter()
    }

    /// Listing summaries in display order.
    #[must_use]
    pub fn summaries(&self) -> Vec<PresetSummary> {
        self.iter()
            .map(|preset| PresetSummary {
                name: preset.name,
                icon: preset.icon,
                element_count: preset.templates.len(),
            })
            .collect()
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::new()
    }
}
