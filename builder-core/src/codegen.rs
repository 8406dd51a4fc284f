//! Code generation: canvas state to markup and stylesheet text.
//!
//! Generation is pure and deterministic. Each element becomes one
//! absolutely-positioned fragment with its styling inlined, so the
//! markup works without the stylesheet and vice versa. The stylesheet is
//! fixed boilerplate parameterized only by the canvas background.
//!
//! Property text is substituted verbatim. Nothing is escaped: text
//! containing `<`, `"` or `&` reaches the output unchanged, which is only
//! acceptable for trusted, single-user input.

use std::fmt::Write;

use serde::Serialize;

use crate::canvas::CanvasModel;
use crate::element::{CanvasElement, ElementKind, PropertyValue};

static EMPTY: PropertyValue = PropertyValue::Text(String::new());

/// Generated markup and stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCode {
    /// Complete HTML document.
    pub markup: String,
    /// Standalone stylesheet.
    pub stylesheet: String,
}

/// Serializes a [`CanvasModel`] into markup and stylesheet text.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    title: String,
}

impl CodeGenerator {
    /// Create a generator emitting documents with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Generate both artifacts.
    #[must_use]
    pub fn generate(&self, model: &CanvasModel) -> GeneratedCode {
        GeneratedCode {
            markup: self.markup(model),
            stylesheet: stylesheet(model.background()),
        }
    }

    /// Generate the HTML document, one fragment per element in paint order.
    #[must_use]
    pub fn markup(&self, model: &CanvasModel) -> String {
        let body = model
            .elements()
            .iter()
            .map(fragment)
            .collect::<Vec<_>>()
            .join("\n");
        let background = model.background();

        let mut html = String::with_capacity(512 + body.len());
        let _ = write!(
            html,
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        body {{
            margin: 0;
            padding: 20px;
            font-family: Arial, sans-serif;
            position: relative;
            min-height: 100vh;
            background-color: {background};
        }}
    </style>
</head>
<body>
{body}
</body>
</html>"#,
            title = self.title,
        );
        html
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new("My Summer Camp Creation")
    }
}

/// Generate the stylesheet for a canvas background.
#[must_use]
pub fn stylesheet(background: &str) -> String {
    format!(
        r"/* Summer Camp Creation Styles */
body {{
    margin: 0;
    padding: 20px;
    font-family: Arial, sans-serif;
    position: relative;
    min-height: 100vh;
    background-color: {background};
}}

.container {{
    max-width: 1200px;
    margin: 0 auto;
}}

/* Button hover effects */
button:hover {{
    opacity: 0.9;
    transform: translateY(-1px);
}}

/* Link hover effects */
a:hover {{
    opacity: 0.8;
}}

/* List styles */
ul, ol {{
    padding-left: 20px;
}}

ul li {{
    list-style-type: disc;
}}

ol li {{
    list-style-type: decimal;
}}

/* Card styles */
.card {{
    box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    transition: transform 0.2s;
}}

.card:hover {{
    transform: translateY(-2px);
}}

/* Responsive styles */
@media (max-width: 768px) {{
    body {{
        padding: 10px;
    }}
}}

@media (max-width: 480px) {{
    body {{
        padding: 5px;
    }}
}}"
    )
}

/// Markup fragment for one element.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn fragment(element: &CanvasElement) -> String {
    let props = element.properties();
    let p = |key: &str| props.get(key).unwrap_or(&EMPTY);
    let position = element.position();
    let style = format!(
        "position: absolute; left: {}px; top: {}px;",
        position.x, position.y
    );

    let mut out = String::with_capacity(256);
    let _ = match element.kind() {
        ElementKind::Heading => write!(
            out,
            r#"<{level} style="{style} color: {}; font-size: {}; font-weight: {}; text-align: {};">{}</{level}>"#,
            p("color"),
            p("fontSize"),
            p("fontWeight"),
            p("textAlign"),
            p("text"),
            level = p("level"),
        ),
        ElementKind::Paragraph => write!(
            out,
            r#"<p style="{style} color: {}; font-size: {}; text-align: {}; line-height: {};">{}</p>"#,
            p("color"),
            p("fontSize"),
            p("textAlign"),
            p("lineHeight"),
            p("text"),
        ),
        ElementKind::Button => write!(
            out,
            r#"<button style="{style} background-color: {}; color: {}; padding: {}; border: none; border-radius: {}; cursor: pointer; font-size: {}; font-weight: {};">{}</button>"#,
            p("backgroundColor"),
            p("color"),
            p("padding"),
            p("borderRadius"),
            p("fontSize"),
            p("fontWeight"),
            p("text"),
        ),
        ElementKind::Image => write!(
            out,
            r#"<img src="{}" alt="{}" style="{style} width: {}; height: {}; border-radius: {};" />"#,
            p("src"),
            p("alt"),
            p("width"),
            p("height"),
            p("borderRadius"),
        ),
        ElementKind::Container => write!(
            out,
            r#"<div style="{style} background-color: {}; padding: {}; border-radius: {}; min-height: {}; width: {}; border: {};"></div>"#,
            p("backgroundColor"),
            p("padding"),
            p("borderRadius"),
            p("minHeight"),
            p("width"),
            p("border"),
        ),
        ElementKind::Input => write!(
            out,
            r#"<input type="{}" placeholder="{}" style="{style} padding: {}; border: {}; border-radius: {}; font-size: {}; width: {};" />"#,
            p("type"),
            p("placeholder"),
            p("padding"),
            p("border"),
            p("borderRadius"),
            p("fontSize"),
            p("width"),
        ),
        ElementKind::List => {
            let items: String = p("items")
                .items()
                .iter()
                .map(|item| format!("<li>{item}</li>"))
                .collect();
            write!(
                out,
                r#"<{tag} style="{style} color: {}; font-size: {}; line-height: {}; padding-left: 20px;">{items}</{tag}>"#,
                p("color"),
                p("fontSize"),
                p("lineHeight"),
                tag = p("listType"),
            )
        }
        ElementKind::Link => write!(
            out,
            r#"<a href="{}" style="{style} color: {}; text-decoration: {}; font-size: {}; font-weight: {};">{}</a>"#,
            p("href"),
            p("color"),
            p("textDecoration"),
            p("fontSize"),
            p("fontWeight"),
            p("text"),
        ),
        ElementKind::Navbar => {
            let text_color = p("textColor");
            let links: String = p("items")
                .items()
                .iter()
                .map(|item| {
                    format!(
                        r##"<a href="#" style="color: {text_color}; text-decoration: none; margin-right: 20px;">{item}</a>"##
                    )
                })
                .collect();
            write!(
                out,
                r#"<nav style="{style} background-color: {}; height: {}; width: {}; display: flex; align-items: center; padding: {}; font-size: {};">{links}</nav>"#,
                p("backgroundColor"),
                p("height"),
                p("width"),
                p("padding"),
                p("fontSize"),
            )
        }
        ElementKind::Card => write!(
            out,
            r#"<div style="{style} background-color: {}; border: 2px solid {}; border-radius: {}; width: {}; height: {}; padding: {};"><h3 style="margin: 0 0 10px 0;">{}</h3><p style="margin: 0;">{}</p></div>"#,
            p("backgroundColor"),
            p("borderColor"),
            p("borderRadius"),
            p("width"),
            p("height"),
            p("padding"),
            p("title"),
            p("content"),
        ),
        ElementKind::Hero => write!(
            out,
            r#"<div style="{style} background-image: url('{}'); background-size: cover; background-position: center; height: {}; width: {}; position: relative;"><div style="position: absolute; top: 0; left: 0; right: 0; bottom: 0; background-color: {};"></div></div>"#,
            p("backgroundImage"),
            p("height"),
            p("width"),
            p("overlayColor"),
        ),
        ElementKind::Footer => write!(
            out,
            r#"<footer style="{style} background-color: {}; color: {}; height: {}; width: {}; display: flex; align-items: center; justify-content: center; font-size: {}; text-align: {};">{}</footer>"#,
            p("backgroundColor"),
            p("textColor"),
            p("height"),
            p("width"),
            p("fontSize"),
            p("textAlign"),
            p("text"),
        ),
    };
    out
}
