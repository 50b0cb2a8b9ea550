use crate::{
    foundation::{
        color::Rgba8,
        core::{Canvas, Point, Size},
        error::HosuResult,
    },
    layout::model::{Align, ImageWidget, Layer, Layout, RectWidget, TextWidget, Widget},
    template::Template,
};

pub struct LayoutBuilder {
    canvas: Canvas,
    background: Rgba8,
    layers: Vec<Layer>,
}

impl LayoutBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            background: Rgba8::BLACK,
            layers: Vec::new(),
        }
    }

    pub fn background(mut self, color: Rgba8) -> Self {
        self.background = color;
        self
    }

    pub fn layer(mut self, layer: impl Into<Layer>) -> Self {
        self.layers.push(layer.into());
        self
    }

    /// Freeze into a validated [`Layout`].
    pub fn build(self) -> HosuResult<Layout> {
        let layout = Layout {
            canvas: self.canvas,
            background: self.background,
            layers: self.layers,
        };
        layout.validate()?;
        Ok(layout)
    }
}

pub struct LayerBuilder {
    name: String,
    widgets: Vec<Widget>,
}

impl LayerBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            widgets: Vec::new(),
        }
    }

    pub fn widget(mut self, widget: impl Into<Widget>) -> Self {
        self.widgets.push(widget.into());
        self
    }

    pub fn build(self) -> Layer {
        Layer {
            name: self.name,
            widgets: self.widgets,
        }
    }
}

impl From<LayerBuilder> for Layer {
    fn from(b: LayerBuilder) -> Self {
        b.build()
    }
}

impl TextWidget {
    /// White, left-aligned, unscaled text at the canvas origin.
    pub fn new(text: impl Into<Template>) -> Self {
        Self {
            text: text.into(),
            position: Point::ZERO,
            font_scale: 1.0,
            color: Rgba8::WHITE,
            align: Align::Left,
            drop_shadow: false,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn font_scale(mut self, scale: f64) -> Self {
        self.font_scale = scale;
        self
    }

    pub fn color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn drop_shadow(mut self, on: bool) -> Self {
        self.drop_shadow = on;
        self
    }
}

impl ImageWidget {
    /// Image covering the whole canvas.
    pub fn new(source: impl Into<Template>) -> Self {
        Self {
            source: source.into(),
            position: Point::ZERO,
            size: Size::new(1.0, 1.0),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }
}

impl RectWidget {
    /// Filled white rectangle covering the whole canvas.
    pub fn new() -> Self {
        Self {
            position: Point::ZERO,
            size: Size::new(1.0, 1.0),
            color: Rgba8::WHITE,
            fill: true,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn color(mut self, color: Rgba8) -> Self {
        self.color = color;
        self
    }

    /// Draw only the border.
    pub fn outline(mut self) -> Self {
        self.fill = false;
        self
    }
}

impl Default for RectWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TextWidget> for Widget {
    fn from(w: TextWidget) -> Self {
        Self::Text(w)
    }
}

impl From<ImageWidget> for Widget {
    fn from(w: ImageWidget) -> Self {
        Self::Image(w)
    }
}

impl From<RectWidget> for Widget {
    fn from(w: RectWidget) -> Self {
        Self::Rect(w)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dsl.rs"]
mod tests;
