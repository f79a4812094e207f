use std::fmt;
use std::path::PathBuf;

/// Error type shared by the writer, plotter and generator.
#[derive(Debug)]
pub enum GenError {
    InvalidConfig { reason: String },
    Io { path: PathBuf, source: std::io::Error },
    Csv { path: PathBuf, source: polars::prelude::PolarsError },
    Plot { path: PathBuf, source: image::ImageError },
}

impl GenError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Output path involved, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::InvalidConfig { .. } => None,
            Self::Io { path, .. } | Self::Csv { path, .. } | Self::Plot { path, .. } => Some(path),
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid generator config: {reason}"),
            Self::Io { path, source } => write!(f, "cannot write {}: {source}", path.display()),
            Self::Csv { path, source } => {
                write!(f, "csv output to {} failed: {source}", path.display())
            }
            Self::Plot { path, source } => {
                write!(f, "plot output to {} failed: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Csv { source, .. } => Some(source),
            Self::Plot { source, .. } => Some(source),
        }
    }
}
