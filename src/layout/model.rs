use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        color::Rgba8,
        core::{Canvas, Point, Size, validate_fraction},
        error::{HosuError, HosuResult},
    },
    template::Template,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete card layout.
///
/// A layout is a pure data model that can be:
/// - built programmatically (see [`crate::LayoutBuilder`])
/// - loaded from JSON with [`Layout::from_path`]
///
/// Layers draw in order; later layers paint over earlier ones.
pub struct Layout {
    /// Output canvas dimensions.
    pub canvas: Canvas,
    /// Color the canvas is cleared to before drawing.
    #[serde(default = "default_background")]
    pub background: Rgba8,
    /// Ordered layers.
    #[serde(default)]
    pub layers: Vec<Layer>,
}

fn default_background() -> Rgba8 {
    Rgba8::BLACK
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// An ordered group of widgets.
pub struct Layer {
    /// Layer name for authoring/debugging.
    #[serde(default)]
    pub name: String,
    /// Widgets in draw order.
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Drawable element. The set is closed; JSON selects the variant with `"kind"`.
pub enum Widget {
    /// Templated text.
    Text(TextWidget),
    /// Image whose source is a template (usually a single image variable).
    Image(ImageWidget),
    /// Solid or outlined rectangle.
    Rect(RectWidget),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal text alignment relative to the anchor point.
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Text widget configuration.
pub struct TextWidget {
    /// Text with `{NAME}` placeholders.
    pub text: Template,
    /// Anchor point as canvas fractions.
    #[serde(default)]
    pub position: Point,
    /// Font size multiplier; must be finite and > 0.
    #[serde(default = "default_font_scale")]
    pub font_scale: f64,
    /// Text color as straight-alpha RGBA8.
    #[serde(default)]
    pub color: Rgba8,
    #[serde(default)]
    pub align: Align,
    #[serde(default)]
    pub drop_shadow: bool,
}

fn default_font_scale() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Image widget configuration.
pub struct ImageWidget {
    /// Resolves to an image URL or a path relative to the assets root.
    pub source: Template,
    /// Top-left corner as canvas fractions.
    #[serde(default)]
    pub position: Point,
    /// Box size as canvas fractions.
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Rectangle widget configuration.
pub struct RectWidget {
    /// Top-left corner as canvas fractions.
    #[serde(default)]
    pub position: Point,
    /// Size as canvas fractions.
    pub size: Size,
    #[serde(default)]
    pub color: Rgba8,
    /// Filled when `true`, outlined otherwise.
    #[serde(default = "default_fill")]
    pub fill: bool,
}

fn default_fill() -> bool {
    true
}

impl Layout {
    /// Parse a layout from a JSON reader. The result is not validated.
    pub fn from_reader<R: std::io::Read>(r: R) -> HosuResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| HosuError::serde(format!("parse layout JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> HosuResult<Self> {
        serde_json::from_str(s).map_err(|e| HosuError::serde(format!("parse layout JSON: {e}")))
    }

    /// Parse and validate a layout JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> HosuResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            HosuError::validation(format!("open layout JSON '{}': {e}", path.display()))
        })?;
        let layout = Self::from_reader(BufReader::new(f))?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn to_json_pretty(&self) -> HosuResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HosuError::serde(e.to_string()))
    }

    /// Validate canvas and widget invariants.
    pub fn validate(&self) -> HosuResult<()> {
        self.canvas.validate()?;
        for (li, layer) in self.layers.iter().enumerate() {
            for (wi, widget) in layer.widgets.iter().enumerate() {
                widget.validate().map_err(|e| {
                    HosuError::validation(format!(
                        "layer {li} ('{}') widget {wi} ({}): {e}",
                        layer.name,
                        widget.kind_name()
                    ))
                })?;
            }
        }
        Ok(())
    }

    /// Total widget count across layers.
    pub fn widget_count(&self) -> usize {
        self.layers.iter().map(|l| l.widgets.len()).sum()
    }
}

impl Widget {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Rect(_) => "rect",
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Self::Text(w) => w.position,
            Self::Image(w) => w.position,
            Self::Rect(w) => w.position,
        }
    }

    pub fn validate(&self) -> HosuResult<()> {
        validate_point(self.position(), "position")?;
        match self {
            Self::Text(w) => {
                if !w.font_scale.is_finite() || w.font_scale <= 0.0 {
                    return Err(HosuError::validation(
                        "font_scale must be finite and > 0",
                    ));
                }
            }
            Self::Image(w) => {
                if w.source.source().trim().is_empty() {
                    return Err(HosuError::validation("image source must be non-empty"));
                }
                validate_size(w.size)?;
            }
            Self::Rect(w) => validate_size(w.size)?,
        }
        Ok(())
    }
}

fn validate_point(p: Point, field: &str) -> HosuResult<()> {
    validate_fraction(p.x, &format!("{field}.x"))?;
    validate_fraction(p.y, &format!("{field}.y"))
}

fn validate_size(s: Size) -> HosuResult<()> {
    validate_fraction(s.width, "size.width")?;
    validate_fraction(s.height, "size.height")
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
