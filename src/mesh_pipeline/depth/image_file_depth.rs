use std::path::PathBuf;

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::mesh_pipeline::common::{PipelineError, Result};
use crate::mesh_pipeline::depth::estimator::DepthEstimator;
use crate::mesh_pipeline::depth::types::DepthMap;

/// Depth provider backed by a precomputed 16-bit grayscale depth image.
///
/// Running the pretrained depth network is out of scope for this crate, so
/// the stock backend reads depth that was estimated offline. The sidecar is
/// resampled to match the normalized image when sizes differ, and values are
/// scaled into the millimeter convention the rest of the pipeline assumes.
pub struct ImageFileDepth {
    path: PathBuf,
    scale: f32,
}

impl ImageFileDepth {
    pub fn new(path: impl Into<PathBuf>, scale: f32) -> Self {
        Self {
            path: path.into(),
            scale,
        }
    }
}

impl DepthEstimator for ImageFileDepth {
    fn estimate(&self, image: &RgbImage) -> Result<DepthMap> {
        let (width, height) = image.dimensions();

        let loaded = image::open(&self.path).map_err(|e| {
            PipelineError::DepthEstimationError(format!("{}: {}", self.path.display(), e))
        })?;
        let mut gray = loaded.into_luma16();

        if gray.dimensions() != (width, height) {
            debug!(
                "Resampling depth image {}x{} -> {}x{}",
                gray.width(),
                gray.height(),
                width,
                height
            );
            gray = imageops::resize(&gray, width, height, FilterType::Triangle);
        }

        // Map the full u16 range to [0, 1] before applying the scale.
        let data: Vec<f32> = gray
            .pixels()
            .map(|p| p.0[0] as f32 / u16::MAX as f32 * self.scale)
            .collect();

        DepthMap::new(width, height, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma};

    fn write_depth_png(dir: &tempfile::TempDir, width: u32, height: u32) -> PathBuf {
        let mut gray: ImageBuffer<Luma<u16>, Vec<u16>> = ImageBuffer::new(width, height);
        for (x, _y, pixel) in gray.enumerate_pixels_mut() {
            *pixel = Luma([if x % 2 == 0 { 0 } else { u16::MAX }]);
        }
        let path = dir.path().join("depth.png");
        gray.save(&path).unwrap();
        path
    }

    #[test]
    fn test_loads_and_scales_depth() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_depth_png(&dir, 4, 4);

        let estimator = ImageFileDepth::new(&path, 1000.0);
        let image = RgbImage::new(4, 4);
        let depth = estimator.estimate(&image).unwrap();

        assert_eq!(depth.width(), 4);
        assert_eq!(depth.height(), 4);
        assert_eq!(depth.get(0, 0), 0.0);
        assert!((depth.get(1, 0) - 1000.0).abs() < 1e-3);
    }

    #[test]
    fn test_resamples_to_image_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_depth_png(&dir, 8, 8);

        let estimator = ImageFileDepth::new(&path, 1.0);
        let image = RgbImage::new(4, 4);
        let depth = estimator.estimate(&image).unwrap();

        assert_eq!((depth.width(), depth.height()), (4, 4));
    }

    #[test]
    fn test_missing_file_is_an_estimation_error() {
        let estimator = ImageFileDepth::new("/nonexistent/depth.png", 1000.0);
        let image = RgbImage::new(4, 4);
        assert!(matches!(
            estimator.estimate(&image),
            Err(PipelineError::DepthEstimationError(_))
        ));
    }
}
