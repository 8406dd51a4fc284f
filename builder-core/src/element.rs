//! Canvas elements - the typed content blocks placed on the canvas.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::schema::{self, PropertySpec};
use crate::BuilderError;

/// Unique identifier for an element.
///
/// Identifiers are random v4 UUIDs, so an id is never handed out twice,
/// including after the element carrying it has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an element ID from its hyphenated string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(input: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(input).map(Self)
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of content-block types the builder supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Heading (`h1`..`h6`).
    Heading,
    /// Paragraph of text.
    Paragraph,
    /// Push button.
    Button,
    /// Image.
    Image,
    /// Empty styled box.
    Container,
    /// Text input field.
    Input,
    /// Bulleted or numbered list.
    List,
    /// Hyperlink.
    Link,
    /// Navigation bar with a row of links.
    Navbar,
    /// Card with title and body.
    Card,
    /// Hero banner with background image and overlay.
    Hero,
    /// Page footer.
    Footer,
}

impl ElementKind {
    /// Every kind, in palette order.
    pub const ALL: [Self; 12] = [
        Self::Heading,
        Self::Paragraph,
        Self::Button,
        Self::Image,
        Self::Container,
        Self::Input,
        Self::List,
        Self::Link,
        Self::Navbar,
        Self::Card,
        Self::Hero,
        Self::Footer,
    ];

    /// Stable lowercase name, used for parsing and serialization.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::Button => "button",
            Self::Image => "image",
            Self::Container => "container",
            Self::Input => "input",
            Self::List => "list",
            Self::Link => "link",
            Self::Navbar => "navbar",
            Self::Card => "card",
            Self::Hero => "hero",
            Self::Footer => "footer",
        }
    }

    /// Palette label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Heading => "Heading",
            Self::Paragraph => "Paragraph",
            Self::Button => "Button",
            Self::Image => "Image",
            Self::Container => "Container",
            Self::Input => "Input Field",
            Self::List => "List",
            Self::Link => "Link",
            Self::Navbar => "Navigation Bar",
            Self::Card => "Card",
            Self::Hero => "Hero Section",
            Self::Footer => "Footer",
        }
    }

    /// Palette icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Heading => "📝",
            Self::Paragraph => "📄",
            Self::Button => "🔘",
            Self::Image => "🖼️",
            Self::Container => "📦",
            Self::Input => "✏️",
            Self::List => "📋",
            Self::Link => "🔗",
            Self::Navbar => "🧭",
            Self::Card => "🃏",
            Self::Hero => "🌟",
            Self::Footer => "🦶",
        }
    }

    /// The fixed, ordered property schema of this kind.
    #[must_use]
    pub fn schema(self) -> &'static [PropertySpec] {
        schema::schema_for(self)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BuilderError::UnknownElementKind(s.to_string()))
    }
}

/// Position in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// X position (pixels from left).
    pub x: f32,
    /// Y position (pixels from top).
    pub y: f32,
}

impl Position {
    /// Create a position as given.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a position with both axes clamped to finite values `>= 0`.
    ///
    /// `NaN` and infinities clamp to zero, as does `-0.0`.
    #[must_use]
    pub fn clamped(x: f32, y: f32) -> Self {
        Self {
            x: clamp_axis(x),
            y: clamp_axis(y),
        }
    }

    /// This position shifted by `(dx, dy)`, clamped to `>= 0`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::clamped(self.x + dx, self.y + dy)
    }
}

fn clamp_axis(value: f32) -> f32 {
    if value.is_finite() {
        // adding +0.0 turns -0.0 into +0.0
        value.max(0.0) + 0.0
    } else {
        0.0
    }
}

/// A property value: free text or an ordered list of text.
///
/// No unit or type checking happens on write; a length such as `"32px"`
/// is stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Plain text (also colors, lengths and enum choices).
    Text(String),
    /// Ordered list of text entries.
    List(Vec<String>),
}

impl PropertyValue {
    /// Entries of this value viewed as a list.
    ///
    /// A text value contributes its non-blank lines.
    #[must_use]
    pub fn items(&self) -> Vec<&str> {
        match self {
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Text(text) => text.lines().filter(|line| !line.trim().is_empty()).collect(),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

/// Property values of one element, holding exactly the keys of its
/// kind's schema in schema order.
///
/// Values are stored positionally against the schema, so a partial or
/// extended key set cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMap {
    kind: ElementKind,
    values: Vec<PropertyValue>,
}

impl PropertyMap {
    /// The schema defaults for `kind`.
    #[must_use]
    pub fn defaults(kind: ElementKind) -> Self {
        Self {
            kind,
            values: kind
                .schema()
                .iter()
                .map(|spec| spec.default.to_value())
                .collect(),
        }
    }

    /// The kind whose schema this map follows.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.slot(key).map(|index| &self.values[index])
    }

    /// Whether `key` belongs to this map's schema.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.slot(key).is_some()
    }

    /// Replace the value for an existing key.
    ///
    /// Returns `false` and leaves the map untouched if the key is not part
    /// of the schema.
    pub fn set(&mut self, key: &str, value: PropertyValue) -> bool {
        match self.slot(key) {
            Some(index) => {
                self.values[index] = value;
                true
            }
            None => false,
        }
    }

    /// Keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.kind.schema().iter().map(|spec| spec.key)
    }

    /// `(key, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &PropertyValue)> {
        self.keys().zip(self.values.iter())
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn slot(&self, key: &str) -> Option<usize> {
        self.kind.schema().iter().position(|spec| spec.key == key)
    }
}

impl Serialize for PropertyMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A placed element: identity, kind, position and properties.
///
/// The kind never changes after creation and the position always
/// satisfies `x >= 0 && y >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasElement {
    id: ElementId,
    kind: ElementKind,
    position: Position,
    properties: PropertyMap,
}

impl CanvasElement {
    /// Create an element with a fresh id and the kind's default properties.
    #[must_use]
    pub fn new(kind: ElementKind, position: Position) -> Self {
        Self {
            id: ElementId::new(),
            kind,
            position: Position::clamped(position.x, position.y),
            properties: PropertyMap::defaults(kind),
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Element kind.
    #[must_use]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current properties.
    #[must_use]
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Set a property on a freshly built element before it is placed.
    ///
    /// Keys outside the schema are ignored.
    #[must_use]
    pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(key, value.into());
        self
    }

    /// Copy of this element with a new id, shifted by `(dx, dy)`.
    #[must_use]
    pub fn duplicate(&self, dx: f32, dy: f32) -> Self {
        Self {
            id: ElementId::new(),
            kind: self.kind,
            position: self.position.offset(dx, dy),
            properties: self.properties.clone(),
        }
    }

    pub(crate) fn set_position(&mut self, x: f32, y: f32) {
        self.position = Position::clamped(x, y);
    }

    pub(crate) fn set_property(&mut self, key: &str, value: PropertyValue) -> bool {
        self.properties.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_rejects_non_finite_and_negative_zero() {
        let position = Position::clamped(f32::INFINITY, f32::NEG_INFINITY);
        assert!(position.x.abs() < f32::EPSILON && position.y.abs() < f32::EPSILON);

        let position = Position::clamped(f32::NAN, -0.0);
        assert!(position.x.abs() < f32::EPSILON);
        assert!(position.y.is_sign_positive());

        let position = Position::clamped(-12.0, 33.5);
        assert!(position.x.is_sign_positive() && position.x.abs() < f32::EPSILON);
        assert!((position.y - 33.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_duplicate_of_huge_position_stays_finite() {
        let element = CanvasElement::new(ElementKind::Card, Position::new(f32::MAX, 0.0));
        let copy = element.duplicate(f32::MAX, 20.0);
        assert!(copy.position().x.is_finite());
        assert!((copy.position().y - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_kind_parse_roundtrip() {
        for kind in ElementKind::ALL {
            let parsed: ElementKind = kind.name().parse().expect("should parse");
            assert_eq!(parsed, kind);
        }
        assert_eq!(
            "  NavBar ".parse::<ElementKind>().expect("case-insensitive"),
            ElementKind::Navbar
        );
        assert!(matches!(
            "carousel".parse::<ElementKind>(),
            Err(BuilderError::UnknownElementKind(_))
        ));
    }

    #[test]
    fn test_defaults_match_schema() {
        for kind in ElementKind::ALL {
            let props = PropertyMap::defaults(kind);
            let keys: Vec<_> = props.keys().collect();
            let schema_keys: Vec<_> = kind.schema().iter().map(|s| s.key).collect();
            assert_eq!(keys, schema_keys);
            assert_eq!(props.len(), kind.schema().len());
        }
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut props = PropertyMap::defaults(ElementKind::Button);
        assert!(!props.set("href", "#".into()));
        assert!(!props.contains_key("href"));
        assert!(props.set("text", "Go".into()));
        assert_eq!(props.get("text"), Some(&PropertyValue::from("Go")));
    }

    #[test]
    fn test_position_clamps_negative_and_nan() {
        let p = Position::clamped(-5.0, f32::NAN);
        assert!(p.x.abs() < f32::EPSILON);
        assert!(p.y.abs() < f32::EPSILON);
    }

    #[test]
    fn test_new_element_clamps_position() {
        let el = CanvasElement::new(ElementKind::Image, Position::new(-10.0, 40.0));
        assert!(el.position().x.abs() < f32::EPSILON);
        assert!((el.position().y - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_duplicate_gets_new_id_and_offset() {
        let el = CanvasElement::new(ElementKind::Card, Position::new(50.0, 50.0))
            .with_property("title", "Pricing");
        let copy = el.duplicate(20.0, 20.0);
        assert_ne!(copy.id(), el.id());
        assert_eq!(copy.kind(), el.kind());
        assert_eq!(copy.properties(), el.properties());
        assert!((copy.position().x - 70.0).abs() < f32::EPSILON);
        assert!((copy.position().y - 70.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_text_value_items_skip_blank_lines() {
        let value = PropertyValue::from("one\n\n  \ntwo");
        assert_eq!(value.items(), vec!["one", "two"]);
    }

    #[test]
    fn test_property_map_serializes_in_schema_order() {
        let props = PropertyMap::defaults(ElementKind::Paragraph);
        let json = serde_json::to_string(&props).expect("serialize");
        let text_at = json.find("\"text\"").expect("text key");
        let line_height_at = json.find("\"lineHeight\"").expect("lineHeight key");
        assert!(text_at < line_height_at);
    }
}
