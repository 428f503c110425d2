mod cli;
mod core;
mod processors;
mod utils;

pub use cli::Cli;
pub use self::core::{
    Pipeline, PipelineConfig, PipelineError, Result, RunStats, Sequence,
};
pub use processors::{plan, ArtifactWriter, Loader, ResizePlan, Resizer};
pub use utils::{
    derivative_file_name, format_file_size, has_primary_extension,
    is_supported_image, primary_file_name,
};

pub mod prelude {
    pub use crate::{
        Pipeline, PipelineConfig, ResizePlan, RunStats, Sequence,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
