// imgflat/src/processors/writer.rs
use crate::core::Result;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Writes primary and derivative artifacts. Both operations return the
/// number of bytes written; the pipeline records failures per artifact
/// and keeps going.
pub struct ArtifactWriter {
    quality: u8,
}

impl ArtifactWriter {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    /// Byte-identical passthrough for sources already in the save format.
    pub fn copy_verbatim(&self, source: &Path, dest: &Path) -> Result<u64> {
        log::debug!(
            "Copying {} verbatim to {}",
            source.display(),
            dest.display()
        );
        Ok(fs::copy(source, dest)?)
    }

    /// Encodes to JPEG at the configured quality. JPEG has no alpha
    /// channel, so images carrying one are flattened to RGB first.
    pub fn save_jpeg(&self, image: &DynamicImage, dest: &Path) -> Result<u64> {
        log::debug!("Saving {} (quality {})", dest.display(), self.quality);

        let file = File::create(dest)?;
        let mut writer = BufWriter::new(file);
        let encoder = JpegEncoder::new_with_quality(&mut writer, self.quality);

        if image.color().has_alpha() {
            DynamicImage::ImageRgb8(image.to_rgb8()).write_with_encoder(encoder)?;
        } else {
            image.write_with_encoder(encoder)?;
        }
        writer.into_inner().map_err(|e| e.into_error())?;

        Ok(fs::metadata(dest)?.len())
    }
}
