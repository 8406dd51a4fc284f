//! Element schema registry.
//!
//! Every [`ElementKind`] has a fixed, ordered list of properties with a
//! value kind and a default. The tables are static; [`SchemaRegistry`]
//! resolves the editor field for each property once, at construction.

use std::collections::HashMap;

use serde::Serialize;

use crate::element::{ElementKind, PropertyValue};

/// A legal value of a closed-choice property with its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Stored value.
    pub value: &'static str,
    /// Label shown in a selector.
    pub label: &'static str,
}

/// Heading levels.
pub const HEADING_LEVELS: &[Choice] = &[
    Choice { value: "h1", label: "H1 (Largest)" },
    Choice { value: "h2", label: "H2 (Large)" },
    Choice { value: "h3", label: "H3 (Medium)" },
    Choice { value: "h4", label: "H4 (Small)" },
    Choice { value: "h5", label: "H5 (Smaller)" },
    Choice { value: "h6", label: "H6 (Smallest)" },
];

/// List element types.
pub const LIST_TYPES: &[Choice] = &[
    Choice { value: "ul", label: "• Bullet List" },
    Choice { value: "ol", label: "1. Numbered List" },
];

/// Text alignments.
pub const ALIGNMENTS: &[Choice] = &[
    Choice { value: "left", label: "⬅️ Left" },
    Choice { value: "center", label: "⬆️ Center" },
    Choice { value: "right", label: "➡️ Right" },
];

/// The kind of value a property holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "choices", rename_all = "snake_case")]
pub enum ValueKind {
    /// Free text.
    Text,
    /// CSS color.
    Color,
    /// CSS length (or shorthand such as `"12px 24px"`).
    Length,
    /// One of a closed set of values.
    Enum(&'static [Choice]),
    /// Ordered list of text entries.
    TextList,
    /// Text alignment (`left`, `center`, `right`).
    Alignment,
}

/// Default value in a static schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyDefault {
    /// Text default.
    Text(&'static str),
    /// List default.
    List(&'static [&'static str]),
}

impl PropertyDefault {
    /// Materialize into an owned [`PropertyValue`].
    #[must_use]
    pub fn to_value(self) -> PropertyValue {
        match self {
            Self::Text(text) => PropertyValue::Text(text.to_string()),
            Self::List(items) => {
                PropertyValue::List(items.iter().map(ToString::to_string).collect())
            }
        }
    }
}

/// One entry of a kind's property schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    /// Property name.
    pub key: &'static str,
    /// Kind of value stored under `key`.
    pub value_kind: ValueKind,
    /// Value given to newly created elements.
    pub default: PropertyDefault,
}

const fn text(key: &'static str, default: &'static str) -> PropertySpec {
    PropertySpec {
        key,
        value_kind: ValueKind::Text,
        default: PropertyDefault::Text(default),
    }
}

const fn color(key: &'static str, default: &'static str) -> PropertySpec {
    PropertySpec {
        key,
        value_kind: ValueKind::Color,
        default: PropertyDefault::Text(default),
    }
}

const fn length(key: &'static str, default: &'static str) -> PropertySpec {
    PropertySpec {
        key,
        value_kind: ValueKind::Length,
        default: PropertyDefault::Text(default),
    }
}

const fn choice(
    key: &'static str,
    choices: &'static [Choice],
    default: &'static str,
) -> PropertySpec {
    PropertySpec {
        key,
        value_kind: ValueKind::Enum(choices),
        default: PropertyDefault::Text(default),
    }
}

const fn align(key: &'static str, default: &'static str) -> PropertySpec {
    PropertySpec {
        key,
        value_kind: ValueKind::Alignment,
        default: PropertyDefault::Text(default),
    }
}

const fn list(key: &'static str, default: &'static [&'static str]) -> PropertySpec {
    PropertySpec {
        key,
        value_kind: ValueKind::TextList,
        default: PropertyDefault::List(default),
    }
}

const HEADING: &[PropertySpec] = &[
    text("text", "My Heading"),
    choice("level", HEADING_LEVELS, "h1"),
    color("color", "#000000"),
    length("fontSize", "32px"),
    text("fontWeight", "bold"),
    align("textAlign", "left"),
];

const PARAGRAPH: &[PropertySpec] = &[
    text(
        "text",
        "This is my paragraph text. I can write anything here!",
    ),
    color("color", "#333333"),
    length("fontSize", "16px"),
    align("textAlign", "left"),
    text("lineHeight", "1.5"),
];

const BUTTON: &[PropertySpec] = &[
    text("text", "Click Me!"),
    color("backgroundColor", "#007bff"),
    color("color", "#ffffff"),
    length("padding", "12px 24px"),
    length("borderRadius", "6px"),
    length("fontSize", "16px"),
    text("fontWeight", "bold"),
];

const IMAGE: &[PropertySpec] = &[
    text("src", "/placeholder.svg?height=200&width=300"),
    text("alt", "My Image"),
    length("width", "300px"),
    length("height", "200px"),
    length("borderRadius", "8px"),
];

const CONTAINER: &[PropertySpec] = &[
    color("backgroundColor", "#f8f9fa"),
    length("padding", "20px"),
    length("borderRadius", "8px"),
    length("minHeight", "100px"),
    length("width", "300px"),
    text("border", "2px solid #e9ecef"),
];

const INPUT: &[PropertySpec] = &[
    text("placeholder", "Type here..."),
    text("type", "text"),
    length("padding", "10px 15px"),
    text("border", "2px solid #ccc"),
    length("borderRadius", "6px"),
    length("fontSize", "16px"),
    length("width", "250px"),
];

const LIST: &[PropertySpec] = &[
    list("items", &["First item", "Second item", "Third item"]),
    choice("listType", LIST_TYPES, "ul"),
    color("color", "#333333"),
    length("fontSize", "16px"),
    text("lineHeight", "1.6"),
];

const LINK: &[PropertySpec] = &[
    text("text", "Click this link"),
    text("href", "#"),
    color("color", "#007bff"),
    text("textDecoration", "underline"),
    length("fontSize", "16px"),
    text("fontWeight", "normal"),
];

const NAVBAR: &[PropertySpec] = &[
    color("backgroundColor", "#2563eb"),
    length("height", "60px"),
    length("width", "100%"),
    list("items", &["Home", "About", "Services", "Contact"]),
    color("textColor", "#ffffff"),
    length("fontSize", "16px"),
    length("padding", "0 20px"),
];

const CARD: &[PropertySpec] = &[
    text("title", "Card Title"),
    text("content", "Card content goes here"),
    color("backgroundColor", "#ffffff"),
    color("borderColor", "#e5e7eb"),
    length("width", "250px"),
    length("height", "200px"),
    length("borderRadius", "8px"),
    length("padding", "20px"),
];

const HERO: &[PropertySpec] = &[
    text("backgroundImage", "/placeholder.svg?height=300&width=600"),
    length("height", "300px"),
    length("width", "100%"),
    color("overlayColor", "rgba(0,0,0,0.3)"),
];

const FOOTER: &[PropertySpec] = &[
    color("backgroundColor", "#1f2937"),
    color("textColor", "#ffffff"),
    length("height", "80px"),
    length("width", "100%"),
    text("text", "© 2024 My Website. All rights reserved."),
    length("fontSize", "14px"),
    align("textAlign", "center"),
];

/// The static property schema for `kind`.
#[must_use]
pub fn schema_for(kind: ElementKind) -> &'static [PropertySpec] {
    match kind {
        ElementKind::Heading => HEADING,
        ElementKind::Paragraph => PARAGRAPH,
        ElementKind::Button => BUTTON,
        ElementKind::Image => IMAGE,
        ElementKind::Container => CONTAINER,
        ElementKind::Input => INPUT,
        ElementKind::List => LIST,
        ElementKind::Link => LINK,
        ElementKind::Navbar => NAVBAR,
        ElementKind::Card => CARD,
        ElementKind::Hero => HERO,
        ElementKind::Footer => FOOTER,
    }
}

/// Editor widget used for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text input.
    Text {
        /// Render as a multi-line text area.
        multiline: bool,
    },
    /// Color picker.
    Color,
    /// Closed-choice selector.
    Choice {
        /// Legal values in display order.
        options: &'static [Choice],
    },
    /// Multi-line list editor, one entry per line.
    List,
}

#[derive(Debug, Clone, Copy)]
enum KeyPattern {
    Exact(&'static str),
    Contains(&'static str),
}

impl KeyPattern {
    fn matches(self, key: &str) -> bool {
        match self {
            Self::Exact(name) => key == name,
            Self::Contains(fragment) => key.to_ascii_lowercase().contains(fragment),
        }
    }
}

/// Widgets chosen from the property name, for keys whose value kind
/// does not already force a selector or list editor. First match wins.
const NAME_RULES: &[(KeyPattern, FieldKind)] = &[
    (KeyPattern::Contains("color"), FieldKind::Color),
    (KeyPattern::Exact("text"), FieldKind::Text { multiline: true }),
    (KeyPattern::Exact("content"), FieldKind::Text { multiline: true }),
];

/// Labels and icons that do not follow from the key name.
const FIXED_LABELS: &[(&str, &str, &str)] = &[
    ("items", "List Items (one per line)", "📝"),
    ("level", "Heading Level", "📏"),
    ("listType", "List Type", "📋"),
    ("textAlign", "Text Alignment", "📐"),
];

fn resolve_field_kind(spec: &PropertySpec) -> FieldKind {
    match spec.value_kind {
        ValueKind::TextList => FieldKind::List,
        ValueKind::Enum(options) => FieldKind::Choice { options },
        ValueKind::Alignment => FieldKind::Choice { options: ALIGNMENTS },
        ValueKind::Color => FieldKind::Color,
        ValueKind::Text | ValueKind::Length => NAME_RULES
            .iter()
            .find(|(pattern, _)| pattern.matches(spec.key))
            .map_or(FieldKind::Text { multiline: false }, |(_, kind)| *kind),
    }
}

/// `"backgroundColor"` -> `"Background Color"`.
fn humanize(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (index, ch) in key.chars().enumerate() {
        if index == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}

fn icon_for(key: &str) -> &'static str {
    let lower = key.to_ascii_lowercase();
    if lower.contains("color") {
        "🎨"
    } else if lower.contains("size") {
        "📏"
    } else {
        "✏️"
    }
}

/// Editor field descriptor for one schema property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Property name.
    pub key: &'static str,
    /// Human label.
    pub label: String,
    /// Hint icon.
    pub icon: &'static str,
    /// Widget used to edit the value.
    pub kind: FieldKind,
}

impl FieldSpec {
    fn from_spec(spec: &PropertySpec) -> Self {
        let (label, icon) = FIXED_LABELS
            .iter()
            .find(|(key, _, _)| *key == spec.key)
            .map_or_else(
                || (humanize(spec.key), icon_for(spec.key)),
                |(_, label, icon)| ((*label).to_string(), *icon),
            );
        Self {
            key: spec.key,
            label,
            icon,
            kind: resolve_field_kind(spec),
        }
    }
}

/// Read-only catalog of element kinds, their schemas, and the editor
/// fields resolved from them.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    fields: HashMap<ElementKind, Vec<FieldSpec>>,
}

impl SchemaRegistry {
    /// Build the registry, resolving every field once.
    #[must_use]
    pub fn new() -> Self {
        let fields = ElementKind::ALL
            .into_iter()
            .map(|kind| {
                let specs = kind.schema().iter().map(FieldSpec::from_spec).collect();
                (kind, specs)
            })
            .collect();
        Self { fields }
    }

    /// Ordered property schema of `kind`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn schema(&self, kind: ElementKind) -> &'static [PropertySpec] {
        schema_for(kind)
    }

    /// Editor fields for `kind`, in schema order.
    #[must_use]
    pub fn fields(&self, kind: ElementKind) -> &[FieldSpec] {
        self.fields.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Editor field for one key of `kind`.
    #[must_use]
    pub fn field(&self, kind: ElementKind, key: &str) -> Option<&FieldSpec> {
        self.fields(kind).iter().find(|field| field.key == key)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::PropertyMap;

    #[test]
    fn test_schema_keys_are_unique_per_kind() {
        for kind in ElementKind::ALL {
            let keys: Vec<_> = schema_for(kind).iter().map(|s| s.key).collect();
            let mut deduped = keys.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(keys.len(), deduped.len(), "duplicate key in {kind}");
        }
    }

    #[test]
    fn test_heading_defaults() {
        let props = PropertyMap::defaults(ElementKind::Heading);
        assert_eq!(props.get("text"), Some(&PropertyValue::from("My Heading")));
        assert_eq!(props.get("level"), Some(&PropertyValue::from("h1")));
    }

    #[test]
    fn test_field_kind_resolution() {
        let registry = SchemaRegistry::new();
        let kind_of = |kind, key| registry.field(kind, key).map(|f| f.kind);

        assert_eq!(
            kind_of(ElementKind::Heading, "level"),
            Some(FieldKind::Choice { options: HEADING_LEVELS })
        );
        assert_eq!(
            kind_of(ElementKind::List, "listType"),
            Some(FieldKind::Choice { options: LIST_TYPES })
        );
        assert_eq!(
            kind_of(ElementKind::Footer, "textAlign"),
            Some(FieldKind::Choice { options: ALIGNMENTS })
        );
        assert_eq!(kind_of(ElementKind::Navbar, "items"), Some(FieldKind::List));
        assert_eq!(kind_of(ElementKind::Navbar, "textColor"), Some(FieldKind::Color));
        assert_eq!(
            kind_of(ElementKind::Button, "backgroundColor"),
            Some(FieldKind::Color)
        );
        assert_eq!(
            kind_of(ElementKind::Card, "content"),
            Some(FieldKind::Text { multiline: true })
        );
        assert_eq!(
            kind_of(ElementKind::Link, "textDecoration"),
            Some(FieldKind::Text { multiline: false })
        );
        assert_eq!(
            kind_of(ElementKind::Image, "width"),
            Some(FieldKind::Text { multiline: false })
        );
        assert_eq!(kind_of(ElementKind::Image, "level"), None);
    }

    #[test]
    fn test_every_color_key_gets_a_picker() {
        let registry = SchemaRegistry::new();
        for kind in ElementKind::ALL {
            for field in registry.fields(kind) {
                if field.key.to_ascii_lowercase().contains("color") {
                    assert_eq!(field.kind, FieldKind::Color, "{kind}.{}", field.key);
                }
            }
        }
    }

    #[test]
    fn test_labels() {
        let registry = SchemaRegistry::new();
        let label = |kind, key| {
            registry
                .field(kind, key)
                .map(|f| (f.label.clone(), f.icon))
                .expect("field exists")
        };
        assert_eq!(
            label(ElementKind::Button, "backgroundColor"),
            ("Background Color".to_string(), "🎨")
        );
        assert_eq!(
            label(ElementKind::Heading, "fontSize"),
            ("Font Size".to_string(), "📏")
        );
        assert_eq!(
            label(ElementKind::Heading, "level"),
            ("Heading Level".to_string(), "📏")
        );
        assert_eq!(label(ElementKind::Link, "href"), ("Href".to_string(), "✏️"));
    }

    #[test]
    fn test_fields_follow_schema_order() {
        let registry = SchemaRegistry::new();
        for kind in ElementKind::ALL {
            let field_keys: Vec<_> = registry.fields(kind).iter().map(|f| f.key).collect();
            let schema_keys: Vec<_> = registry.schema(kind).iter().map(|s| s.key).collect();
            assert_eq!(field_keys, schema_keys);
        }
    }
}
