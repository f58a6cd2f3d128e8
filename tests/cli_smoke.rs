mod common;

use std::path::{Path, PathBuf};
use std::process::Output;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_quotewall")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "quotewall.exe"
            } else {
                "quotewall"
            });
            p
        })
}

fn run(font: &Path, out: &Path, extra: &[&str]) -> Output {
    std::process::Command::new(exe())
        .args(["--quote", "Hello World", "--width", "800", "--height", "600"])
        .args(extra)
        .arg("--font")
        .arg(font)
        .arg("--output")
        .arg(out)
        .output()
        .unwrap()
}

#[test]
fn cli_writes_800x600_png_with_text() {
    let Some(font) = common::system_font() else {
        return;
    };
    let out_path = common::out_dir("cli_smoke").join("with_author.png");
    let _ = std::fs::remove_file(&out_path);

    let output = run(&font, &out_path, &["--author", "Jane"]);
    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Wallpaper generated to:"));

    let img = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (800, 600));
    assert!(common::is_black(img.get_pixel(799, 599)));
    assert!(common::rows_have_ink(&img, 270, 310));
    assert!(common::rows_have_ink(&img, 315, 340));
}

#[test]
fn cli_without_author_leaves_lower_region_black() {
    let Some(font) = common::system_font() else {
        return;
    };
    let out_path = common::out_dir("cli_smoke").join("no_author.png");
    let _ = std::fs::remove_file(&out_path);

    let output = run(&font, &out_path, &[]);
    assert!(output.status.success(), "{output:?}");

    let img = image::open(&out_path).unwrap().to_rgba8();
    assert!(common::rows_have_ink(&img, 270, 300));
    assert!(!common::rows_have_ink(&img, 310, 600));
}

#[test]
fn cli_dump_font_prints_family_and_digest() {
    let Some(font) = common::system_font() else {
        return;
    };
    let out_path = common::out_dir("cli_smoke").join("dump_font.png");

    let output = run(&font, &out_path, &["--dump-font"]);
    assert!(output.status.success(), "{output:?}");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("family:"));
    assert!(stderr.contains("sha256:"));
}

#[test]
fn cli_missing_font_exits_nonzero_with_quote_draw_error() {
    let out_path = common::out_dir("cli_smoke").join("missing_font.png");
    let _ = std::fs::remove_file(&out_path);

    let output = run(Path::new("/nonexistent/quotewall/font.ttf"), &out_path, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to draw quote"), "{stderr}");
    assert!(!out_path.exists());
}

#[test]
fn cli_malformed_font_exits_nonzero() {
    let dir = common::out_dir("cli_smoke");
    let bad = dir.join("malformed.ttf");
    std::fs::write(&bad, b"not a font").unwrap();
    let out_path = dir.join("malformed_font.png");
    let _ = std::fs::remove_file(&out_path);

    let output = run(&bad, &out_path, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse font"), "{stderr}");
    assert!(!out_path.exists());
}

#[test]
fn cli_unwritable_output_exits_nonzero() {
    let Some(font) = common::system_font() else {
        return;
    };
    let out_path = common::out_dir("cli_smoke")
        .join("missing")
        .join("dir")
        .join("out.png");

    let output = run(&font, &out_path, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to create"), "{stderr}");
}
