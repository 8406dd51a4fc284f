//! Editor configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BuilderError, BuilderResult};

/// Preview width the canvas is laid out at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Phone width (375px).
    Mobile,
    /// Tablet width (768px).
    Tablet,
    /// Full configured canvas width.
    #[default]
    Desktop,
}

impl Viewport {
    /// Every viewport, narrowest first.
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    /// Canvas width in pixels for this viewport.
    #[must_use]
    pub fn width(self, desktop_width: f32) -> f32 {
        match self {
            Self::Mobile => 375.0,
            Self::Tablet => 768.0,
            Self::Desktop => desktop_width,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Viewport {
    type Err = BuilderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|viewport| viewport.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BuilderError::UnknownViewport(s.to_string()))
    }
}

/// Configuration for an editor session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas width at the desktop viewport, in pixels.
    pub canvas_width: f32,
    /// Initial canvas height, in pixels.
    pub canvas_height: f32,
    /// Smallest canvas height accepted.
    pub min_canvas_height: f32,
    /// Largest canvas height accepted.
    pub max_canvas_height: f32,
    /// Canvas heights snap to multiples of this step.
    pub canvas_height_step: f32,
    /// Initial canvas background color.
    pub canvas_background: String,
    /// Initial viewport.
    pub viewport: Viewport,
    /// Offset subtracted from a palette drop point so the block lands
    /// centered under the cursor.
    pub drop_offset: (f32, f32),
    /// Offset applied to duplicated elements.
    pub duplicate_offset: (f32, f32),
    /// Footprint kept inside the canvas while moving an element.
    pub min_element_size: (f32, f32),
    /// Document title in generated markup.
    pub document_title: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1024.0,
            canvas_height: 700.0,
            min_canvas_height: 400.0,
            max_canvas_height: 2000.0,
            canvas_height_step: 50.0,
            canvas_background: "#ffffff".to_string(),
            viewport: Viewport::Desktop,
            drop_offset: (50.0, 25.0),
            duplicate_offset: (20.0, 20.0),
            min_element_size: (100.0, 50.0),
            document_title: "My Summer Camp Creation".to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the result fails
    /// [`EditorConfig::validate`].
    pub fn from_json(json: &str) -> BuilderResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that extents are positive and height bounds are ordered.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> BuilderResult<()> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("min_canvas_height", self.min_canvas_height),
            ("max_canvas_height", self.max_canvas_height),
            ("canvas_height_step", self.canvas_height_step),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(BuilderError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.min_canvas_height > self.max_canvas_height {
            return Err(BuilderError::InvalidConfig(format!(
                "min_canvas_height {} exceeds max_canvas_height {}",
                self.min_canvas_height, self.max_canvas_height
            )));
        }
        let pairs = [
            ("drop_offset", self.drop_offset),
            ("duplicate_offset", self.duplicate_offset),
            ("min_element_size", self.min_element_size),
        ];
        for (name, (a, b)) in pairs {
            if !(a.is_finite() && b.is_finite() && a >= 0.0 && b >= 0.0) {
                return Err(BuilderError::InvalidConfig(format!(
                    "{name} must be non-negative, got ({a}, {b})"
                )));
            }
        }
        Ok(())
    }

    /// Snap `px` to the height step and clamp it into the height bounds.
    #[must_use]
    pub fn normalize_canvas_height(&self, px: f32) -> f32 {
        let snapped = (px / self.canvas_height_step).round() * self.canvas_height_step;
        snapped
            .max(self.min_canvas_height)
            .min(self.max_canvas_height)
    }
}
