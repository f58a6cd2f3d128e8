use std::path::PathBuf;

pub type QuotewallResult<T> = Result<T, QuotewallError>;

/// Which piece of text a draw failure happened on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawTarget {
    Quote,
    Author,
}

impl std::fmt::Display for DrawTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Quote => f.write_str("quote"),
            Self::Author => f.write_str("author"),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum QuotewallError {
    #[error("failed to parse font: {0}")]
    FontParse(String),

    #[error("failed to draw {target}")]
    Draw {
        target: DrawTarget,
        #[source]
        source: Box<QuotewallError>,
    },

    #[error("raster error: {0}")]
    Raster(String),

    #[error("failed to create '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QuotewallError {
    pub fn font_parse(msg: impl Into<String>) -> Self {
        Self::FontParse(msg.into())
    }

    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    pub fn draw(target: DrawTarget, source: QuotewallError) -> Self {
        Self::Draw {
            target,
            source: Box::new(source),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
