pub mod dispatch;
pub mod raster;
pub mod surface;

pub use dispatch::{RenderStats, draw_widget, render_layout, render_layout_with_stats};
pub use raster::{Frame, RasterSettings, RasterSurface, TextRun};
pub use surface::{DrawOp, DrawSurface, ImageOp, RectOp, Recording, RecordingSurface, TextOp};
