use crate::foundation::error::{HosuError, HosuResult};

pub use kurbo::{Point, Size};

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> HosuResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(self) -> HosuResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HosuError::validation("canvas width and height must be > 0"));
        }
        Ok(())
    }

    /// Map a normalized `[0, 1]` position to pixel coordinates.
    pub fn to_px(self, p: Point) -> Point {
        Point::new(p.x * f64::from(self.width), p.y * f64::from(self.height))
    }

    /// Map a normalized size to pixels.
    pub fn size_to_px(self, s: Size) -> Size {
        Size::new(
            s.width * f64::from(self.width),
            s.height * f64::from(self.height),
        )
    }
}

/// Check that a normalized coordinate is finite and inside `[0, 1]`.
pub(crate) fn validate_fraction(v: f64, field: &str) -> HosuResult<()> {
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(HosuError::validation(format!(
            "{field} must be finite and within [0, 1], got {v}"
        )));
    }
    Ok(())
}
