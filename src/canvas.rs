use image::{Rgba, RgbaImage};

use crate::foundation::core::Rgba8;

/// Background fill. Only a flat color is supported.
pub const BACKGROUND: Rgba8 = Rgba8::BLACK;

/// Allocate a `width`×`height` canvas filled with opaque black.
pub fn create_background(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(BACKGROUND.to_array()))
}
