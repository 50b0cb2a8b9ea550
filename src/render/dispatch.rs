use crate::{
    foundation::error::{HosuError, HosuResult},
    layout::{Layer, Layout, Widget},
    render::surface::{DrawSurface, ImageOp, RectOp, TextOp},
    template::Token,
    variables::{Variable, VariableTable},
};

/// Counters collected while rendering a layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub widgets_drawn: usize,
    pub widgets_failed: usize,
}

/// Validate `layout`, then draw every layer in order onto `surface`.
///
/// A widget whose draw call fails is logged and skipped; `begin`/`end` failures abort.
#[tracing::instrument(skip_all, fields(
    width = layout.canvas.width,
    height = layout.canvas.height,
    layers = layout.layers.len(),
))]
pub fn render_layout<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    vars: &VariableTable,
) -> HosuResult<S::Output> {
    render_layout_with_stats(surface, layout, vars).map(|(out, _)| out)
}

pub fn render_layout_with_stats<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layout: &Layout,
    vars: &VariableTable,
) -> HosuResult<(S::Output, RenderStats)> {
    layout.validate()?;

    let mut stats = RenderStats::default();
    surface.begin(layout.canvas, layout.background)?;
    for layer in &layout.layers {
        render_layer(surface, layer, vars, &mut stats);
    }
    let out = surface.end()?;

    tracing::debug!(
        drawn = stats.widgets_drawn,
        failed = stats.widgets_failed,
        "rendered layout"
    );
    Ok((out, stats))
}

fn render_layer<S: DrawSurface + ?Sized>(
    surface: &mut S,
    layer: &Layer,
    vars: &VariableTable,
    stats: &mut RenderStats,
) {
    tracing::debug!(layer = %layer.name, widgets = layer.widgets.len(), "rendering layer");
    for (idx, widget) in layer.widgets.iter().enumerate() {
        match draw_widget(surface, widget, vars) {
            Ok(()) => stats.widgets_drawn += 1,
            Err(e) => {
                stats.widgets_failed += 1;
                tracing::error!(
                    layer = %layer.name,
                    widget = idx,
                    kind = widget.kind_name(),
                    error = %e,
                    "failed to draw widget"
                );
            }
        }
    }
}

/// Resolve one widget's templates and issue the matching draw call.
pub fn draw_widget<S: DrawSurface + ?Sized>(
    surface: &mut S,
    widget: &Widget,
    vars: &VariableTable,
) -> HosuResult<()> {
    match widget {
        Widget::Text(w) => surface.draw_text(&TextOp {
            position: w.position,
            text: w.text.resolve(vars),
            font_scale: w.font_scale,
            color: w.color,
            align: w.align,
            drop_shadow: w.drop_shadow,
        }),
        Widget::Image(w) => {
            if let [Token::Placeholder(name)] = w.source.tokens()
                && let Some(var) = vars.get(name)
                && !matches!(var, Variable::ImageReference(_))
            {
                tracing::warn!(
                    variable = %name,
                    kind = var.kind(),
                    "image source is not an image variable"
                );
            }
            let resolved = w.source.resolve_report(vars);
            if !resolved.missing.is_empty() {
                return Err(HosuError::render(format!(
                    "image source '{}' has unresolved variables: {}",
                    w.source,
                    resolved.missing.join(", ")
                )));
            }
            surface.draw_image(&ImageOp {
                position: w.position,
                size: w.size,
                source: resolved.text,
            })
        }
        Widget::Rect(w) => surface.draw_rect(&RectOp {
            position: w.position,
            size: w.size,
            color: w.color,
            fill: w.fill,
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
