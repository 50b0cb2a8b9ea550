use crate::{
    foundation::{
        color::Rgba8,
        core::{Canvas, Point, Size},
        error::{HosuError, HosuResult},
    },
    layout::Align,
};

/// Resolved text draw call. Positions are canvas fractions.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOp {
    pub position: Point,
    pub text: String,
    pub font_scale: f64,
    pub color: Rgba8,
    pub align: Align,
    pub drop_shadow: bool,
}

/// Rectangle draw call. Position and size are canvas fractions.
#[derive(Clone, Debug, PartialEq)]
pub struct RectOp {
    pub position: Point,
    pub size: Size,
    pub color: Rgba8,
    pub fill: bool,
}

/// Image draw call with its source already resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageOp {
    pub position: Point,
    pub size: Size,
    pub source: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Text(TextOp),
    Rect(RectOp),
    Image(ImageOp),
}

/// Something that turns draw calls into an output (pixels, a display list, ...).
///
/// Calls are bracketed by [`DrawSurface::begin`] and [`DrawSurface::end`]. Surfaces convert
/// canvas fractions to pixels themselves.
pub trait DrawSurface {
    type Output;

    fn begin(&mut self, canvas: Canvas, background: Rgba8) -> HosuResult<()>;

    fn draw_text(&mut self, op: &TextOp) -> HosuResult<()>;

    fn draw_rect(&mut self, op: &RectOp) -> HosuResult<()>;

    fn draw_image(&mut self, op: &ImageOp) -> HosuResult<()>;

    fn end(&mut self) -> HosuResult<Self::Output>;
}

/// Display list produced by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct Recording {
    pub canvas: Canvas,
    pub background: Rgba8,
    pub ops: Vec<DrawOp>,
}

/// Surface that records every draw call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    started: Option<(Canvas, Rgba8)>,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, op: DrawOp) -> HosuResult<()> {
        if self.started.is_none() {
            return Err(HosuError::render("draw call before begin"));
        }
        self.ops.push(op);
        Ok(())
    }
}

impl DrawSurface for RecordingSurface {
    type Output = Recording;

    fn begin(&mut self, canvas: Canvas, background: Rgba8) -> HosuResult<()> {
        self.started = Some((canvas, background));
        self.ops.clear();
        Ok(())
    }

    fn draw_text(&mut self, op: &TextOp) -> HosuResult<()> {
        self.push(DrawOp::Text(op.clone()))
    }

    fn draw_rect(&mut self, op: &RectOp) -> HosuResult<()> {
        self.push(DrawOp::Rect(op.clone()))
    }

    fn draw_image(&mut self, op: &ImageOp) -> HosuResult<()> {
        self.push(DrawOp::Image(op.clone()))
    }

    fn end(&mut self) -> HosuResult<Recording> {
        let (canvas, background) = self
            .started
            .take()
            .ok_or_else(|| HosuError::render("end called before begin"))?;
        Ok(Recording {
            canvas,
            background,
            ops: std::mem::take(&mut self.ops),
        })
    }
}
