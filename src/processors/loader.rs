// imgflat/src/processors/loader.rs
use crate::core::{PipelineError, Result};
use image::{DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

/// Decodes source files into rasters. The file handle is opened, fully
/// read and closed within a single `load` call.
#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// A classified-as-image file that fails to decode invalidates the
    /// whole run, so the error propagates instead of being skipped.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let image = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|source| PipelineError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        let (width, height) = image.dimensions();
        log::debug!("Decoded {}: {}x{} pixels", path.display(), width, height);

        Ok(image)
    }
}
