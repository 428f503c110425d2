// imgflat/src/processors/resizer.rs
use crate::processors::planner::ResizePlan;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Applies a resize plan with a high-quality resampling filter. The auto
/// axis is derived from the aspect ratio, rounded, and clamped to 1 pixel.
pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    pub fn apply(&self, image: &DynamicImage, plan: ResizePlan) -> DynamicImage {
        let (width, height) = Self::target_dimensions(image.dimensions(), plan);

        if width == image.width() && height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            width,
            height
        );

        image.resize_exact(width, height, self.filter)
    }

    fn target_dimensions((orig_w, orig_h): (u32, u32), plan: ResizePlan) -> (u32, u32) {
        match plan {
            ResizePlan::Keep => (orig_w, orig_h),
            ResizePlan::Width(width) => {
                let ratio = width as f32 / orig_w as f32;
                let height = (orig_h as f32 * ratio).round() as u32;
                (width, height.max(1))
            }
            ResizePlan::Height(height) => {
                let ratio = height as f32 / orig_h as f32;
                let width = (orig_w as f32 * ratio).round() as u32;
                (width.max(1), height)
            }
        }
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}
