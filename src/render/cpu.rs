use image::RgbaImage;

use crate::{
    foundation::{
        core::{Point, Rgba8, TextBounds},
        error::{QuotewallError, QuotewallResult},
    },
    render::{TextRasterizer, composite::over_canvas},
};

/// Parley shapes, vello_cpu fills. One instance per canvas.
pub struct CpuTextRasterizer {
    width: u32,
    height: u32,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    face: Option<LoadedFace>,
    size_px: f64,
    fill: Rgba8,
    ctx: Option<vello_cpu::RenderContext>,
}

struct LoadedFace {
    family: String,
    data: vello_cpu::peniko::FontData,
}

impl CpuTextRasterizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            face: None,
            size_px: 12.0,
            fill: Rgba8::WHITE,
            ctx: None,
        }
    }

    fn surface_size(&self) -> QuotewallResult<(u16, u16)> {
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| QuotewallError::raster("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| QuotewallError::raster("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    fn layout(
        &mut self,
        text: &str,
        family: String,
        size_px: f32,
    ) -> parley::Layout<Rgba8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(self.fill));

        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }
}

impl TextRasterizer for CpuTextRasterizer {
    fn load_font(&mut self, bytes: &[u8]) -> QuotewallResult<()> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            QuotewallError::font_parse("no font faces found in font data")
        })?;

        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| QuotewallError::font_parse("registered font family has no name"))?
            .to_string();
        tracing::debug!(%family, bytes = bytes.len(), "font loaded");

        let data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes.to_vec()), 0);
        self.face = Some(LoadedFace { family, data });
        Ok(())
    }

    fn font_family(&self) -> Option<&str> {
        self.face.as_ref().map(|f| f.family.as_str())
    }

    fn set_font_size(&mut self, size_px: f64) {
        self.size_px = size_px;
    }

    fn set_fill(&mut self, color: Rgba8) {
        self.fill = color;
    }

    fn draw_string(&mut self, text: &str, origin: Point) -> QuotewallResult<TextBounds> {
        let Some(face) = self.face.as_ref() else {
            return Err(QuotewallError::raster("draw called with no font loaded"));
        };
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(QuotewallError::raster(format!(
                "font size must be finite and > 0, got {}",
                self.size_px
            )));
        }
        let family = face.family.clone();
        let font = face.data.clone();
        let size_px = self.size_px as f32;
        let (w, h) = self.surface_size()?;

        let layout = self.layout(text, family, size_px);

        let (baseline, ascent, descent) = layout
            .lines()
            .next()
            .map(|line| {
                let m = line.metrics();
                (m.baseline, m.ascent, m.descent)
            })
            .unwrap_or((0.0, 0.0, 0.0));

        let bounds = TextBounds {
            x0: origin.x,
            y0: origin.y - f64::from(ascent),
            x1: origin.x + f64::from(layout.width()),
            y1: origin.y + f64::from(descent),
        };

        // Nothing is visible on a zero-area canvas.
        if w == 0 || h == 0 {
            return Ok(bounds);
        }

        let ctx = self
            .ctx
            .get_or_insert_with(|| vello_cpu::RenderContext::new(w, h));
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((
            origin.x,
            origin.y - f64::from(baseline),
        )));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        Ok(bounds)
    }

    fn finish(&mut self, canvas: &mut RgbaImage) -> QuotewallResult<()> {
        let Some(mut ctx) = self.ctx.take() else {
            return Ok(());
        };
        let (w, h) = self.surface_size()?;

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);
        over_canvas(canvas, pixmap.data_as_u8_slice())
    }
}
