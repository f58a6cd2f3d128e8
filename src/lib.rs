//! Quotewall renders a quote, and optionally its author, centered on a flat
//! black wallpaper and writes it out as a PNG.
//!
//! The run is strictly linear:
//!
//! 1. **Config**: command line -> [`Settings`]
//! 2. **Canvas**: [`create_background`] allocates an opaque black RGBA8 image
//! 3. **Text**: [`add_text`] loads the font, wraps and places the lines, and
//!    draws them through a [`TextRasterizer`] ([`CpuTextRasterizer`] in production)
//! 4. **Encode**: [`write_png`] writes the canvas to disk
//!
//! Line widths used for centering are estimated from character counts, not
//! measured from glyph metrics.
#![forbid(unsafe_code)]

mod canvas;
mod config;
mod encode;
mod foundation;
mod render;
mod text;

pub use canvas::{BACKGROUND, create_background};
pub use config::{Cli, DEFAULT_FONT_PATH, DEFAULT_QUOTE, LogLevel, Settings};
pub use encode::write_png;
pub use foundation::core::{Point, Rgba8, TextBounds};
pub use foundation::error::{DrawTarget, QuotewallError, QuotewallResult};
pub use render::TextRasterizer;
pub use render::cpu::CpuTextRasterizer;
pub use render::text::{TEXT_COLOR, add_text, draw_text, load_font_file};
pub use text::layout::{
    PlacedText, WallpaperLayout, compute_layout, estimate_width, format_author, wrap_budget,
};
pub use text::wrap::wrap_text;
