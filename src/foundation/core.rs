pub use kurbo::Point;

/// Straight (non-premultiplied) RGBA8 color.
///
/// Also used as the Parley brush type, so it must stay `Default + PartialEq`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Pixel bounds of a drawn string, in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBounds {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl TextBounds {
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_opaque() {
        assert_eq!(Rgba8::BLACK.to_array(), [0, 0, 0, 255]);
        assert_eq!(Rgba8::WHITE.to_array(), [255, 255, 255, 255]);
    }

    #[test]
    fn bounds_extent() {
        let b = TextBounds {
            x0: 10.0,
            y0: 4.0,
            x1: 30.0,
            y1: 9.0,
        };
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 5.0);
    }
}
