use std::path::Path;

use image::RgbaImage;

use crate::{
    config::Settings,
    foundation::{
        core::Rgba8,
        error::{DrawTarget, QuotewallError, QuotewallResult},
    },
    render::TextRasterizer,
    text::layout::{WallpaperLayout, compute_layout},
};

pub const TEXT_COLOR: Rgba8 = Rgba8::WHITE;

/// Read the font file and hand it to the rasterizer.
///
/// An unreadable file is not an error here: the rasterizer is left without a
/// face and the first draw fails instead. Bytes that do not parse as a font
/// fail immediately. Returns the bytes that were loaded, if any.
pub fn load_font_file<R: TextRasterizer + ?Sized>(
    raster: &mut R,
    path: &Path,
) -> QuotewallResult<Option<Vec<u8>>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "font file unreadable, continuing without a font");
            return Ok(None);
        }
    };
    raster.load_font(&bytes)?;
    Ok(Some(bytes))
}

/// Lay out and draw the quote (and author, if any) onto `canvas`.
pub fn draw_text<R: TextRasterizer + ?Sized>(
    canvas: &mut RgbaImage,
    settings: &Settings,
    raster: &mut R,
) -> QuotewallResult<WallpaperLayout> {
    let layout = compute_layout(settings);
    raster.set_fill(TEXT_COLOR);

    raster.set_font_size(layout.quote_size);
    for line in &layout.lines {
        raster
            .draw_string(&line.text, line.origin())
            .map_err(|e| QuotewallError::draw(DrawTarget::Quote, e))?;
    }

    if let Some(author) = &layout.author {
        raster.set_font_size(author.size);
        raster
            .draw_string(&author.text, author.origin())
            .map_err(|e| QuotewallError::draw(DrawTarget::Author, e))?;
    }

    raster.finish(canvas)?;
    Ok(layout)
}

#[tracing::instrument(skip(canvas, settings, raster), fields(font = %settings.font_path.display()))]
pub fn add_text<R: TextRasterizer + ?Sized>(
    canvas: &mut RgbaImage,
    settings: &Settings,
    raster: &mut R,
) -> QuotewallResult<WallpaperLayout> {
    load_font_file(raster, &settings.font_path)?;
    draw_text(canvas, settings, raster)
}
