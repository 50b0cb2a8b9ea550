pub mod dsl;
pub mod model;

pub use dsl::{LayerBuilder, LayoutBuilder};
pub use model::{Align, ImageWidget, Layer, Layout, RectWidget, TextWidget, Widget};
