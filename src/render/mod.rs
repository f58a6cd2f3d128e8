use image::RgbaImage;

use crate::foundation::{
    core::{Point, Rgba8, TextBounds},
    error::QuotewallResult,
};

pub mod composite;
pub mod cpu;
pub mod text;

/// Text rasterization capability used by the renderer.
///
/// Implementations own the font face and the pending drawing. Nothing reaches
/// the canvas until [`TextRasterizer::finish`] is called.
pub trait TextRasterizer {
    /// Parse and install a font face from raw font file bytes.
    fn load_font(&mut self, bytes: &[u8]) -> QuotewallResult<()>;

    /// Family name of the installed face, if any.
    fn font_family(&self) -> Option<&str>;

    /// Font size in pixels (the engine runs at 72 DPI, so points == pixels).
    fn set_font_size(&mut self, size_px: f64);

    fn set_fill(&mut self, color: Rgba8);

    /// Draw `text` with its baseline starting at `origin`.
    fn draw_string(&mut self, text: &str, origin: Point) -> QuotewallResult<TextBounds>;

    /// Composite everything drawn so far onto `canvas`.
    fn finish(&mut self, canvas: &mut RgbaImage) -> QuotewallResult<()>;
}
