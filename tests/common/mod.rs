use std::path::PathBuf;

const CANDIDATE_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// First well-known TrueType font present on this machine.
///
/// Tests that need real glyphs return early when this is `None`.
pub fn system_font() -> Option<PathBuf> {
    let found = CANDIDATE_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file());
    if found.is_none() {
        eprintln!("no system font found, skipping");
    }
    found
}

pub fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn is_black(px: &image::Rgba<u8>) -> bool {
    px.0 == [0, 0, 0, 255]
}

/// True if any pixel in rows `y0..y1` is not opaque black.
pub fn rows_have_ink(img: &image::RgbaImage, y0: u32, y1: u32) -> bool {
    (y0..y1.min(img.height())).any(|y| (0..img.width()).any(|x| !is_black(img.get_pixel(x, y))))
}
