// imgflat/src/core/mod.rs
use std::path::PathBuf;
use thiserror::Error;

pub mod pipeline;

pub use pipeline::{Pipeline, Sequence};

/// Per-run configuration, fixed before the walk starts and applied
/// identically to every accepted image.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Target sizes for derivatives, in pixels.
    pub sizes: Vec<u32>,
    /// When false, only the numbered primary copy is produced.
    pub resize: bool,
    /// Constrain every derivative by width regardless of which dimension
    /// exceeds the target.
    pub width_only: bool,
    /// JPEG quality for re-encoded and resized artifacts.
    pub quality: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 300, 500],
            resize: true,
            width_only: false,
            quality: 85,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.quality == 0 || self.quality > 100 {
            return Err(PipelineError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        if self.sizes.iter().any(|&size| size == 0) {
            return Err(PipelineError::InvalidParameter(
                "Target sizes must be non-zero".to_string(),
            ));
        }

        if self.sizes.iter().any(|&size| size > 100_000) {
            return Err(PipelineError::InvalidParameter(
                "Target sizes too large (max 100,000 pixels)".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;

/// Aggregate accounting for one run. Save and copy failures land here
/// instead of aborting the walk.
#[derive(Debug, Default)]
pub struct RunStats {
    /// Files seen by the walk, supported or not.
    pub visited: usize,
    /// Files accepted by the classifier and decoded.
    pub accepted: usize,
    /// Files skipped for an unsupported extension.
    pub skipped: usize,
    pub artifacts_written: usize,
    pub bytes_written: u64,
    /// One entry per artifact that could not be written: path and cause.
    pub failures: Vec<(PathBuf, String)>,
}
