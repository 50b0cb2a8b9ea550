use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{Rgba, RgbaImage, imageops::FilterType};

use crate::{
    foundation::{
        color::Rgba8,
        core::{Canvas, Point, Size},
        error::{HosuError, HosuResult},
    },
    layout::Align,
    render::surface::{DrawSurface, ImageOp, RectOp, TextOp},
};

/// Nominal font size in pixels at `font_scale == 1.0`.
pub const BASE_FONT_PX: f64 = 16.0;

/// Settings for [`RasterSurface`].
#[derive(Clone, Debug)]
pub struct RasterSettings {
    /// Directory that relative image sources are resolved against.
    pub assets_root: PathBuf,
    /// Drop shadow offset in pixels (both axes).
    pub shadow_offset_px: f64,
    pub shadow_color: Rgba8,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            assets_root: PathBuf::from("."),
            shadow_offset_px: 2.0,
            shadow_color: Rgba8::rgba(0, 0, 0, 160),
        }
    }
}

/// A text draw call placed in pixel space.
///
/// The raster surface does not rasterize glyphs; runs are handed to the caller alongside the
/// pixels so a text backend can draw them.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Anchor in pixels; interpretation depends on `align`.
    pub anchor_px: Point,
    pub align: Align,
    pub font_px: f64,
    pub color: Rgba8,
    /// Shadow anchor and color when the widget asked for a drop shadow.
    pub shadow: Option<(Point, Rgba8)>,
}

/// A rendered card: straight-alpha RGBA8 pixels plus positioned text runs.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub text_runs: Vec<TextRun>,
}

impl Frame {
    pub fn save_png(&self, path: impl AsRef<Path>) -> HosuResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// CPU surface drawing rects and images into an `image::RgbaImage`.
pub struct RasterSurface {
    settings: RasterSettings,
    canvas: Option<Canvas>,
    target: Option<RgbaImage>,
    text_runs: Vec<TextRun>,
}

impl RasterSurface {
    pub fn new(settings: RasterSettings) -> Self {
        Self {
            settings,
            canvas: None,
            target: None,
            text_runs: Vec::new(),
        }
    }

    fn target(&mut self) -> HosuResult<(&mut RgbaImage, Canvas)> {
        match (self.target.as_mut(), self.canvas) {
            (Some(t), Some(c)) => Ok((t, c)),
            _ => Err(HosuError::render("draw call before begin")),
        }
    }

    fn load_image(&self, source: &str) -> HosuResult<RgbaImage> {
        if source.starts_with("http://") || source.starts_with("https://") {
            return Err(HosuError::render(format!(
                "remote image '{source}' must be downloaded before rendering"
            )));
        }
        validate_rel_source(source)?;
        let path = self.settings.assets_root.join(source);
        let img = image::open(&path)
            .with_context(|| format!("decode image '{}'", path.display()))?;
        Ok(img.to_rgba8())
    }
}

impl Default for RasterSurface {
    fn default() -> Self {
        Self::new(RasterSettings::default())
    }
}

impl DrawSurface for RasterSurface {
    type Output = Frame;

    fn begin(&mut self, canvas: Canvas, background: Rgba8) -> HosuResult<()> {
        canvas.validate()?;
        tracing::debug!(width = canvas.width, height = canvas.height, "raster surface begin");
        self.canvas = Some(canvas);
        self.target = Some(RgbaImage::from_pixel(
            canvas.width,
            canvas.height,
            Rgba(background.to_array()),
        ));
        self.text_runs.clear();
        Ok(())
    }

    fn draw_text(&mut self, op: &TextOp) -> HosuResult<()> {
        let canvas = self
            .canvas
            .ok_or_else(|| HosuError::render("draw call before begin"))?;
        let anchor_px = canvas.to_px(op.position);
        let offset = self.settings.shadow_offset_px;
        let shadow = op.drop_shadow.then(|| {
            (
                Point::new(anchor_px.x + offset, anchor_px.y + offset),
                self.settings.shadow_color,
            )
        });
        self.text_runs.push(TextRun {
            text: op.text.clone(),
            anchor_px,
            align: op.align,
            font_px: BASE_FONT_PX * op.font_scale,
            color: op.color,
            shadow,
        });
        Ok(())
    }

    fn draw_rect(&mut self, op: &RectOp) -> HosuResult<()> {
        let (target, canvas) = self.target()?;
        let Some(b) = PixelBox::from_fractions(canvas, op.position, op.size) else {
            return Ok(());
        };
        let color = Rgba(op.color.to_array());
        for y in b.y0..b.y1 {
            for x in b.x0..b.x1 {
                let on_border = x == b.x0 || x + 1 == b.x1 || y == b.y0 || y + 1 == b.y1;
                if op.fill || on_border {
                    blend_over(target.get_pixel_mut(x, y), color);
                }
            }
        }
        Ok(())
    }

    fn draw_image(&mut self, op: &ImageOp) -> HosuResult<()> {
        let img = self.load_image(&op.source)?;
        let (target, canvas) = self.target()?;
        let Some(b) = PixelBox::from_fractions(canvas, op.position, op.size) else {
            return Ok(());
        };
        let scaled = image::imageops::resize(&img, b.width(), b.height(), FilterType::Triangle);
        for (x, y, px) in scaled.enumerate_pixels() {
            blend_over(target.get_pixel_mut(b.x0 + x, b.y0 + y), *px);
        }
        Ok(())
    }

    fn end(&mut self) -> HosuResult<Frame> {
        let target = self
            .target
            .take()
            .ok_or_else(|| HosuError::render("end called before begin"))?;
        self.canvas = None;
        let (width, height) = target.dimensions();
        Ok(Frame {
            width,
            height,
            data: target.into_raw(),
            text_runs: std::mem::take(&mut self.text_runs),
        })
    }
}

/// Half-open pixel box clipped to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelBox {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelBox {
    /// `None` when the box covers no pixels.
    fn from_fractions(canvas: Canvas, pos: Point, size: Size) -> Option<Self> {
        let to_px = |v: f64, max: u32| -> u32 {
            (v * f64::from(max)).round().clamp(0.0, f64::from(max)) as u32
        };
        let b = Self {
            x0: to_px(pos.x, canvas.width),
            y0: to_px(pos.y, canvas.height),
            x1: to_px(pos.x + size.width, canvas.width),
            y1: to_px(pos.y + size.height, canvas.height),
        };
        (b.x1 > b.x0 && b.y1 > b.y0).then_some(b)
    }

    fn width(self) -> u32 {
        self.x1 - self.x0
    }

    fn height(self) -> u32 {
        self.y1 - self.y0
    }
}

/// Straight-alpha source-over.
fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let sa = f32::from(src[3]) / 255.0;
    if sa <= 0.0 {
        return;
    }
    let da = f32::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    for c in 0..3 {
        let sc = f32::from(src[c]) / 255.0;
        let dc = f32::from(dst[c]) / 255.0;
        let v = (sc * sa + dc * da * (1.0 - sa)) / out_a;
        dst[c] = (v * 255.0).round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

fn validate_rel_source(source: &str) -> HosuResult<()> {
    if source.trim().is_empty() {
        return Err(HosuError::render("image source must be non-empty"));
    }
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(HosuError::render(format!(
            "image source '{source}' must be a relative path"
        )));
    }
    if s.split('/').any(|part| part == "..") {
        return Err(HosuError::render(format!(
            "image source '{source}' must not contain '..'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
