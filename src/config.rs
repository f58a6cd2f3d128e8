use std::path::PathBuf;

use clap::{Parser, ValueEnum};

pub const DEFAULT_QUOTE: &str = "[ Hello World ]";
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

#[derive(Parser, Debug)]
#[command(name = "quotewall", version, about = "Render a quote onto a wallpaper PNG")]
pub struct Cli {
    /// The quote text.
    #[arg(long, default_value = DEFAULT_QUOTE)]
    pub quote: String,

    /// The author of the quote.
    #[arg(long, default_value = "")]
    pub author: String,

    /// Width of the wallpaper.
    #[arg(long, default_value_t = 3840)]
    pub width: u32,

    /// Height of the wallpaper.
    #[arg(long, default_value_t = 2160)]
    pub height: u32,

    /// Output file path.
    #[arg(long, default_value = "wallpaper.png")]
    pub output: PathBuf,

    /// Path to font file.
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    pub font: PathBuf,

    /// Scale factor for font size.
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub scale: f64,

    /// Print the resolved font family and SHA-256 of the font bytes.
    #[arg(long)]
    pub dump_font: bool,

    /// Maximum level written to the stderr log.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Resolved run settings. Built once from the command line and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub quote: String,
    pub author: String,
    pub width: u32,
    pub height: u32,
    pub output_path: PathBuf,
    pub font_path: PathBuf,
    pub scale: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quote: DEFAULT_QUOTE.to_string(),
            author: String::new(),
            width: 3840,
            height: 2160,
            output_path: PathBuf::from("wallpaper.png"),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            scale: 1.0,
        }
    }
}

impl From<Cli> for Settings {
    fn from(cli: Cli) -> Self {
        // An empty quote is reported but kept as-is.
        if cli.quote.is_empty() {
            tracing::warn!("No quote provided...");
        }

        Self {
            quote: cli.quote,
            author: cli.author,
            width: cli.width,
            height: cli.height,
            output_path: cli.output,
            font_path: cli.font,
            scale: cli.scale,
        }
    }
}
