//! Placement heuristics for the quote block and the author line.
//!
//! Nothing here looks at real glyph metrics: line widths are estimated from
//! character counts (`size * chars * 0.6`) and the block is centered on the
//! canvas from those estimates.

use crate::{config::Settings, foundation::core::Point, text::wrap::wrap_text};

/// Average glyph advance as a fraction of the font size.
pub const AVG_GLYPH_WIDTH: f64 = 0.6;
/// Baseline-to-baseline distance as a multiple of the quote size.
pub const LINE_SPACING: f64 = 1.5;
/// Quote size is the canvas height divided by this (before scaling).
pub const HEIGHT_DIVISOR: f64 = 30.0;
/// Author size relative to the quote size (before scaling again).
pub const AUTHOR_RATIO: f64 = 0.6;

/// One piece of text and where its baseline starts.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub size: f64,
    pub x: i64,
    pub y: i64,
}

impl PlacedText {
    pub fn origin(&self) -> Point {
        Point::new(self.x as f64, self.y as f64)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WallpaperLayout {
    pub quote_size: f64,
    pub author_size: f64,
    /// Character budget handed to the wrapper.
    pub wrap_chars: usize,
    pub lines: Vec<PlacedText>,
    pub author: Option<PlacedText>,
}

pub fn quote_size(height: u32, scale: f64) -> f64 {
    (f64::from(height) / HEIGHT_DIVISOR) * scale
}

pub fn author_size(quote_size: f64, scale: f64) -> f64 {
    quote_size * AUTHOR_RATIO * scale
}

/// `(width / trunc(size)) * 2`, with a zero or negative truncated size
/// yielding a zero budget.
pub fn wrap_budget(width: u32, size: f64) -> usize {
    let size_px = size as i64;
    if size_px <= 0 {
        return 0;
    }
    let chars = (i64::from(width) / size_px) * 2;
    usize::try_from(chars).unwrap_or(0)
}

/// Estimated rendered width in whole pixels.
///
/// Goes through 26.6 fixed point so the result is floored the same way a
/// fixed-point rasterizer would report it.
pub fn estimate_width(size: f64, char_count: usize) -> i64 {
    let fixed = (size * char_count as f64 * AVG_GLYPH_WIDTH * 64.0) as i64;
    fixed >> 6
}

/// X coordinate that centers an estimated width on the canvas. May be negative.
pub fn centered_x(canvas_width: u32, text_width: i64) -> i64 {
    (i64::from(canvas_width) - text_width) / 2
}

pub fn format_author(author: &str) -> String {
    format!("- {author}  ")
}

fn place(text: String, size: f64, canvas_width: u32, y: f64) -> PlacedText {
    let width = estimate_width(size, text.chars().count());
    PlacedText {
        x: centered_x(canvas_width, width),
        y: y as i64,
        size,
        text,
    }
}

pub fn compute_layout(settings: &Settings) -> WallpaperLayout {
    let quote_size = quote_size(settings.height, settings.scale);
    let author_size = author_size(quote_size, settings.scale);
    let wrap_chars = wrap_budget(settings.width, quote_size);
    let wrapped = wrap_text(&settings.quote, wrap_chars);

    tracing::debug!(
        quote_size,
        author_size,
        wrap_chars,
        line_count = wrapped.len(),
        "computed text layout"
    );

    let mut y = f64::from(settings.height) / 2.0 - (wrapped.len() as f64 * quote_size) / 2.0;
    let mut lines = Vec::with_capacity(wrapped.len());
    for line in wrapped {
        lines.push(place(line, quote_size, settings.width, y));
        y += quote_size * LINE_SPACING;
    }

    let author = (!settings.author.is_empty()).then(|| {
        place(
            format_author(&settings.author),
            author_size,
            settings.width,
            y + author_size,
        )
    });

    WallpaperLayout {
        quote_size,
        author_size,
        wrap_chars,
        lines,
        author,
    }
}
