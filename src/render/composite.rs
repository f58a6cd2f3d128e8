use image::RgbaImage;

use crate::foundation::error::{QuotewallError, QuotewallResult};

pub type PremulRgba8 = [u8; 4];

/// Source-over for premultiplied RGBA8.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));
    for i in 0..3 {
        out[i] = add_sat_u8(src[i], mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Blend a premultiplied text layer onto the canvas.
///
/// The canvas is treated as premultiplied. That is exact for the opaque
/// background it starts as, and over an opaque destination the result stays
/// opaque, so the canvas never needs un-premultiplying before encoding.
pub fn over_canvas(canvas: &mut RgbaImage, layer: &[u8]) -> QuotewallResult<()> {
    let dst: &mut [u8] = &mut **canvas;
    if dst.len() != layer.len() || !dst.len().is_multiple_of(4) {
        return Err(QuotewallError::raster(format!(
            "text layer is {} bytes, canvas is {} bytes",
            layer.len(),
            dst.len()
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(layer.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}
