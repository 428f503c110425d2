// imgflat/src/core/pipeline.rs
use crate::core::{PipelineConfig, PipelineError, Result, RunStats};
use crate::processors::prelude::*;
use crate::utils::{
    derivative_file_name, has_primary_extension, is_supported_image, primary_file_name,
};
use image::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Gapless index allocator for accepted images.
///
/// One instance lives for the duration of a single run. Indices start at 0
/// and advance by one per accepted image, in walk order. Single-threaded by
/// design; this is the pipeline's only mutable state besides the stats.
#[derive(Debug, Default)]
pub struct Sequence {
    next: u32,
}

impl Sequence {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns the current index and advances the counter.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u32 {
        let index = self.next;
        self.next += 1;
        index
    }
}

pub struct Pipeline {
    config: PipelineConfig,
    loader: Loader,
    resizer: Resizer,
    writer: ArtifactWriter,
}

impl Pipeline {
    pub fn new(mut config: PipelineConfig) -> Result<Self> {
        config.validate()?;

        // Derivatives are emitted smallest-first; duplicate sizes collapse.
        config.sizes.sort_unstable();
        config.sizes.dedup();

        Ok(Self {
            writer: ArtifactWriter::new(config.quality),
            loader: Loader::new(),
            resizer: Resizer::new(),
            config,
        })
    }

    /// Walks `source` depth-first and emits every artifact into `dest`.
    ///
    /// Decode and walk errors abort the run; failures to write individual
    /// artifacts are logged, recorded in the returned stats, and skipped.
    pub fn run(&self, source: &Path, dest: &Path) -> Result<RunStats> {
        self.validate_paths(source, dest)?;

        if !dest.exists() {
            log::debug!("Creating destination directory {}", dest.display());
            fs::create_dir(dest)?;
        }

        let mut sequence = Sequence::new();
        let mut stats = RunStats::default();

        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            log::info!("Reading {}", path.display());

            if !entry.file_type().is_file() {
                continue;
            }
            stats.visited += 1;

            if !is_supported_image(path) {
                log::debug!("Skipping {}: not a supported image", path.display());
                stats.skipped += 1;
                continue;
            }

            let image = self.loader.load(path)?;
            let index = sequence.next();
            stats.accepted += 1;
            self.emit_artifacts(path, &image, index, dest, &mut stats);
        }

        Ok(stats)
    }

    /// Writes the primary artifact and, when enabled, one derivative per
    /// configured target size. Every derivative is planned from the
    /// original decoded raster, never from an earlier derivative.
    fn emit_artifacts(
        &self,
        source: &Path,
        image: &DynamicImage,
        index: u32,
        dest: &Path,
        stats: &mut RunStats,
    ) {
        let primary = dest.join(primary_file_name(index));
        let result = if has_primary_extension(source) {
            self.writer.copy_verbatim(source, &primary)
        } else {
            self.writer.save_jpeg(image, &primary)
        };
        self.record(&primary, result, stats);

        if !self.config.resize {
            return;
        }

        let (width, height) = image.dimensions();
        for &size in &self.config.sizes {
            let derivative = self
                .resizer
                .apply(image, plan(width, height, size, self.config.width_only));
            let path = dest.join(derivative_file_name(index, size));
            let result = self.writer.save_jpeg(&derivative, &path);
            self.record(&path, result, stats);
        }
    }

    fn record(&self, path: &Path, result: Result<u64>, stats: &mut RunStats) {
        match result {
            Ok(bytes) => {
                stats.artifacts_written += 1;
                stats.bytes_written += bytes;
            }
            Err(e) => {
                log::warn!("Failed to write {}: {}", path.display(), e);
                stats.failures.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    fn validate_paths(&self, source: &Path, dest: &Path) -> Result<()> {
        // Writing into the tree being walked would feed artifacts back
        // into the walk.
        if source == dest {
            return Err(PipelineError::InvalidParameter(
                "Source and destination directories cannot be the same".to_string(),
            ));
        }

        if dest.exists() && !dest.is_dir() {
            return Err(PipelineError::InvalidParameter(format!(
                "Destination path exists but is not a directory: {}",
                dest.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Sequence;

    #[test]
    fn sequence_starts_at_zero() {
        let mut sequence = Sequence::new();
        assert_eq!(sequence.next(), 0);
    }

    #[test]
    fn sequence_is_gapless() {
        let mut sequence = Sequence::new();
        let indices: Vec<u32> = (0..5).map(|_| sequence.next()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }
}
