use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::Path,
};

use image::{ImageFormat, RgbaImage};

use crate::foundation::error::{QuotewallError, QuotewallResult};

/// Create (or truncate) `path` and encode `canvas` into it as PNG.
///
/// The file handle is dropped on every return path. A file that was created
/// but failed to encode is left in place.
pub fn write_png(canvas: &RgbaImage, path: &Path) -> QuotewallResult<()> {
    let file = File::create(path).map_err(|e| QuotewallError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    canvas.write_to(&mut writer, ImageFormat::Png)?;
    writer.flush().map_err(image::ImageError::IoError)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::create_background;

    #[test]
    fn writes_readable_png_of_same_size() {
        let dir = std::env::temp_dir().join("quotewall_encode");
        std::fs::create_dir_all(&dir).unwrap();
        let out = dir.join("bg.png");

        write_png(&create_background(5, 4), &out).unwrap();

        let img = image::open(&out).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (5, 4));
        assert_eq!(img.get_pixel(4, 3).0, [0, 0, 0, 255]);
    }

    #[test]
    fn missing_parent_dir_is_an_io_error() {
        let out = std::env::temp_dir()
            .join("quotewall_encode_missing")
            .join("no")
            .join("such")
            .join("dir.png");
        let err = write_png(&create_background(1, 1), &out).unwrap_err();
        assert!(matches!(err, QuotewallError::Io { .. }));
    }
}
