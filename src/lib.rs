//! hosu: osu! replay decoding and templated score-card layouts.
//!
//! The crate has three cooperating parts:
//! - [`decode_replay`] reads an `.osr` buffer into a [`ReplayRecord`].
//! - [`VariableTable`] and [`Template`] expand `{NAME}` placeholders in widget text.
//! - [`Layout`] (built from JSON or with [`LayoutBuilder`]) is drawn onto any [`DrawSurface`]
//!   by [`render_layout`].
//!
//! ```no_run
//! use hosu::{Layout, RasterSurface, ReplayRecord, render_layout, replay_variables};
//!
//! # fn main() -> anyhow::Result<()> {
//! let replay = ReplayRecord::from_path("play.osr")?;
//! let layout = Layout::from_path("card.json")?;
//! let vars = replay_variables(&replay);
//! let frame = render_layout(&mut RasterSurface::default(), &layout, &vars)?;
//! frame.save_png("card.png")?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]

mod foundation;

pub mod layout;
pub mod render;
pub mod replay;
pub mod template;
pub mod variables;

pub use foundation::color::Rgba8;
pub use foundation::core::{Canvas, Point, Size};
pub use foundation::error::{HosuError, HosuResult};

pub use replay::{
    BinaryReader, BinaryWriter, GameMode, HitCounts, ReadError, ReplayError, ReplayRecord,
    WriteError, decode_replay, decode_replay_from_reader, encode_replay,
};

pub use variables::{Variable, VariableTable, replay_variables};

pub use template::{Diagnostic, Resolution, Template, Token, tokenize};

pub use layout::{
    Align, ImageWidget, Layer, LayerBuilder, Layout, LayoutBuilder, RectWidget, TextWidget,
    Widget,
};

pub use render::{
    DrawOp, DrawSurface, Frame, ImageOp, RasterSettings, RasterSurface, RectOp, Recording,
    RecordingSurface, RenderStats, TextOp, TextRun, render_layout, render_layout_with_stats,
};
