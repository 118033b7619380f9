use crate::{
    border::BorderSpec,
    foundation::{
        color::Rgb8,
        core::{BezPath, PathEl, Point},
        error::WavyframeResult,
    },
    render::{
        composite::over_in_place,
        path::{FillRule, border_path, fill_geometry},
        surface::Surface,
    },
};

/// Counters from one [`CpuRenderer::render_borders`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Borders whose fill and stroke were painted.
    pub drawn: usize,
    /// Borders skipped because their inset square was degenerate.
    pub skipped: usize,
}

/// Border rasterizer backed by `vello_cpu`.
///
/// All borders of one call are painted in order into a transparent layer, which is then
/// composited source-over onto the surface. Untouched pixels keep their exact base values.
#[derive(Default)]
pub struct CpuRenderer {
    ctx: Option<vello_cpu::RenderContext>,
    layer: Option<vello_cpu::Pixmap>,
}

impl CpuRenderer {
    /// Renderer with no cached context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `borders` on top of whatever `surface` currently holds.
    ///
    /// Nothing is cleared first; callers that want a fresh composite restore their base
    /// snapshot before calling this.
    ///
    /// All of `borders` are rasterized into one layer that is composited once, so splitting
    /// a sequence over several calls can differ by rounding at anti-aliased overlaps.
    #[tracing::instrument(skip_all, fields(side = surface.side(), borders = borders.len()))]
    pub fn render_borders(
        &mut self,
        surface: &mut Surface,
        borders: &[BorderSpec],
    ) -> WavyframeResult<RenderStats> {
        let mut stats = RenderStats::default();
        if borders.is_empty() {
            return Ok(stats);
        }

        let side = surface.side();
        let canvas_side = f64::from(side);

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == side && ctx.height() == side => ctx,
            _ => vello_cpu::RenderContext::new(side, side),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        for (i, spec) in borders.iter().enumerate() {
            let contour = border_path(spec, canvas_side);
            if contour.is_empty() {
                tracing::warn!(
                    index = i,
                    id = %spec.id,
                    offset = spec.offset(),
                    "border inset square is degenerate; skipping"
                );
                stats.skipped += 1;
                continue;
            }
            tracing::debug!(
                index = i,
                id = %spec.id,
                offset = spec.offset(),
                wavy = spec.is_wavy,
                filled = spec.is_filled,
                elements = contour.elements().len(),
                "drawing border"
            );

            if let Some(fill) = fill_geometry(spec, canvas_side) {
                ctx.set_fill_rule(match fill.rule {
                    FillRule::NonZero => vello_cpu::peniko::Fill::NonZero,
                    FillRule::EvenOdd => vello_cpu::peniko::Fill::EvenOdd,
                });
                ctx.set_paint(color_to_cpu(spec.fill_color));
                ctx.fill_path(&bezpath_to_cpu(&fill.path));
            }

            ctx.set_stroke(
                vello_cpu::kurbo::Stroke::new(spec.stroke_width)
                    .with_join(vello_cpu::kurbo::Join::Miter),
            );
            ctx.set_paint(color_to_cpu(spec.stroke_color));
            ctx.stroke_path(&bezpath_to_cpu(&contour));
            stats.drawn += 1;
        }

        if stats.drawn > 0 {
            let mut layer = match self.layer.take() {
                Some(p) if p.width() == side && p.height() == side => p,
                _ => vello_cpu::Pixmap::new(side, side),
            };
            layer.data_as_u8_slice_mut().fill(0);

            ctx.flush();
            ctx.render_to_pixmap(&mut layer);
            over_in_place(surface.data_mut(), layer.data_as_u8_slice())?;
            self.layer = Some(layer);
        }

        self.ctx = Some(ctx);
        Ok(stats)
    }
}

/// Paint `borders` onto `surface` with a throwaway [`CpuRenderer`].
pub fn render_borders(
    surface: &mut Surface,
    borders: &[BorderSpec],
) -> WavyframeResult<RenderStats> {
    CpuRenderer::new().render_borders(surface, borders)
}

fn color_to_cpu(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
