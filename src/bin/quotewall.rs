use std::path::Path;

use anyhow::Context as _;
use clap::Parser as _;
use quotewall::{
    Cli, CpuTextRasterizer, LogLevel, Settings, TextRasterizer as _, create_background,
    draw_text, load_font_file, write_png,
};
use sha2::Digest as _;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Err(err) = run(cli) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::from(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let dump_font = cli.dump_font;
    let settings = Settings::from(cli);

    let mut canvas = create_background(settings.width, settings.height);
    let mut raster = CpuTextRasterizer::new(settings.width, settings.height);

    let font_bytes =
        load_font_file(&mut raster, &settings.font_path).context("failed to add text")?;
    if dump_font {
        dump_font_diagnostics(&settings.font_path, &raster, font_bytes.as_deref());
    }

    let layout = draw_text(&mut canvas, &settings, &mut raster).context("failed to add text")?;
    tracing::info!(
        lines = layout.lines.len(),
        author = layout.author.is_some(),
        "text drawn"
    );

    write_png(&canvas, &settings.output_path)
        .with_context(|| format!("write png '{}'", settings.output_path.display()))?;

    println!("Wallpaper generated to: {}", settings.output_path.display());
    Ok(())
}

fn dump_font_diagnostics(path: &Path, raster: &CpuTextRasterizer, bytes: Option<&[u8]>) {
    eprintln!("font diagnostics:");
    eprintln!("  path:    {}", path.display());
    match bytes {
        Some(bytes) => {
            eprintln!("  family:  {}", raster.font_family().unwrap_or("<unnamed>"));
            eprintln!("  sha256:  {}", sha256_hex(bytes));
        }
        None => eprintln!("  family:  <unreadable, no font loaded>"),
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
