use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::mesh_pipeline::common::{PipelineError, Result};

/// Stride constraint of the depth network: both normalized dimensions must be
/// multiples of this.
pub const STRIDE: u32 = 32;

/// Resizes photographs so the depth network accepts them: height capped and
/// clamped down to the stride, width scaled proportionally and rounded to the
/// nearest stride multiple.
#[derive(Debug, Clone)]
pub struct ImageNormalizer {
    max_height: u32,
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self { max_height: 480 }
    }
}

impl ImageNormalizer {
    pub fn new(max_height: u32) -> Self {
        Self { max_height }
    }

    /// Computes the normalized size for an input of `width` x `height`
    /// without touching pixel data.
    pub fn target_size(&self, width: u32, height: u32) -> Result<(u32, u32)> {
        if width == 0 || height == 0 {
            return Err(PipelineError::InvalidImageDimensions(width, height));
        }

        let mut new_height = self.max_height.min(height);
        new_height -= new_height % STRIDE;
        if new_height == 0 {
            return Err(PipelineError::InvalidImageDimensions(width, height));
        }

        let mut new_width =
            (new_height as f64 * width as f64 / height as f64).round() as u32;
        let diff = new_width % STRIDE;
        if diff < STRIDE / 2 {
            new_width -= diff;
        } else {
            new_width += STRIDE - diff;
        }
        if new_width == 0 {
            return Err(PipelineError::InvalidImageDimensions(width, height));
        }

        Ok((new_width, new_height))
    }

    pub fn normalize(&self, image: &RgbImage) -> Result<RgbImage> {
        let (width, height) = image.dimensions();
        let (new_width, new_height) = self.target_size(width, height)?;

        debug!(
            "Normalizing image {}x{} -> {}x{}",
            width, height, new_width, new_height
        );

        if (new_width, new_height) == (width, height) {
            return Ok(image.clone());
        }

        Ok(imageops::resize(image, new_width, new_height, FilterType::Triangle))
    }
}
