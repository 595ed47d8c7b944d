use image::RgbImage;
use serde::Deserialize;
use tracing::debug;

use crate::mesh_pipeline::cloud::types::{CameraIntrinsics, ColoredPoint, PointCloud};
use crate::mesh_pipeline::common::{PipelineError, Result};
use crate::mesh_pipeline::depth::DepthMap;

/// How depth values become the z coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Depth is quantized to 8 bits against the map maximum and the quantized
    /// value is reused as z. Lossy: absolute scale is discarded. This is the
    /// compatible default.
    #[default]
    Normalized,
    /// z is the depth value itself, keeping the map's native units.
    TrueScale,
}

/// Converts a depth map aligned 1:1 with a color image into a colored point
/// cloud under the pinhole model. Pure: no pixel is dropped, zero-depth
/// pixels land at z = 0, and identical inputs give identical point order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backprojector {
    mode: ProjectionMode,
}

impl Backprojector {
    pub fn new(mode: ProjectionMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn backproject(
        &self,
        image: &RgbImage,
        depth: &DepthMap,
        intrinsics: &CameraIntrinsics,
    ) -> Result<PointCloud> {
        let (width, height) = image.dimensions();
        if (depth.width(), depth.height()) != (width, height) {
            return Err(PipelineError::DimensionMismatch {
                image_width: width,
                image_height: height,
                depth_width: depth.width(),
                depth_height: depth.height(),
            });
        }

        let max_depth = depth.max();
        if max_depth == 0.0 {
            return Err(PipelineError::DegenerateDepthRange);
        }

        debug!(
            "Back-projecting {}x{} pixels, max depth {:.3}, mode {:?}",
            width, height, max_depth, self.mode
        );

        let mut points = Vec::with_capacity(width as usize * height as usize);
        for v in 0..height {
            for u in 0..width {
                let d = depth.get(u, v);
                let z = match self.mode {
                    ProjectionMode::Normalized => quantize(d, max_depth) as f32,
                    ProjectionMode::TrueScale => d,
                };
                let x = (u as f32 - intrinsics.cx) * z / intrinsics.fx;
                let y = (v as f32 - intrinsics.cy) * z / intrinsics.fy;
                points.push(ColoredPoint {
                    position: [x, y, z],
                    color: image.get_pixel(u, v).0,
                });
            }
        }

        PointCloud::organized(points, width, height)
    }
}

/// Scales a depth value into the 8-bit range against the map maximum.
fn quantize(d: f32, max_depth: f32) -> u8 {
    (d * 255.0 / max_depth).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_depth(width: u32, height: u32, value: f32) -> DepthMap {
        DepthMap::new(width, height, vec![value; (width * height) as usize]).unwrap()
    }

    #[test]
    fn test_point_count_matches_pixel_count() {
        let image = RgbImage::new(8, 6);
        let depth = uniform_depth(8, 6, 2.0);
        let intrinsics = CameraIntrinsics::approximate(8, 6);
        let cloud = Backprojector::default()
            .backproject(&image, &depth, &intrinsics)
            .unwrap();
        assert_eq!(cloud.len(), 48);
        assert_eq!(cloud.grid_dims(), Some((8, 6)));
    }

    #[test]
    fn test_deterministic_output() {
        let mut image = RgbImage::new(4, 4);
        image.put_pixel(1, 2, image::Rgb([200, 100, 50]));
        let data: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let depth = DepthMap::new(4, 4, data).unwrap();
        let intrinsics = CameraIntrinsics::approximate(4, 4);

        let projector = Backprojector::default();
        let a = projector.backproject(&image, &depth, &intrinsics).unwrap();
        let b = projector.backproject(&image, &depth, &intrinsics).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniform_depth_saturates_quantization() {
        let image = RgbImage::new(4, 4);
        let depth = uniform_depth(4, 4, 5.0);
        let intrinsics = CameraIntrinsics::approximate(4, 4);
        let cloud = Backprojector::default()
            .backproject(&image, &depth, &intrinsics)
            .unwrap();
        assert!(cloud.points().iter().all(|p| p.position[2] == 255.0));
    }

    #[test]
    fn test_single_spike_keeps_zero_depth_points() {
        let image = RgbImage::new(4, 4);
        let mut data = vec![0.0f32; 16];
        data[5] = 10.0;
        let depth = DepthMap::new(4, 4, data).unwrap();
        let intrinsics = CameraIntrinsics::approximate(4, 4);

        let cloud = Backprojector::default()
            .backproject(&image, &depth, &intrinsics)
            .unwrap();
        assert_eq!(cloud.len(), 16);
        let spikes: Vec<_> = cloud
            .points()
            .iter()
            .filter(|p| p.position[2] == 255.0)
            .collect();
        assert_eq!(spikes.len(), 1);
        assert!(
            cloud
                .points()
                .iter()
                .filter(|p| p.position[2] == 0.0)
                .count()
                == 15
        );
    }

    #[test]
    fn test_principal_point_projects_to_axis() {
        let image = RgbImage::new(4, 4);
        let depth = uniform_depth(4, 4, 1.0);
        let intrinsics = CameraIntrinsics::approximate(4, 4);
        let cloud = Backprojector::default()
            .backproject(&image, &depth, &intrinsics)
            .unwrap();
        // Pixel (2, 2) sits on the principal point, so x = y = 0.
        let p = cloud.points()[2 * 4 + 2];
        assert_eq!(p.position[0], 0.0);
        assert_eq!(p.position[1], 0.0);
    }

    #[test]
    fn test_true_scale_uses_native_units() {
        let image = RgbImage::new(2, 2);
        let depth = DepthMap::new(2, 2, vec![0.0, 100.0, 250.0, 500.0]).unwrap();
        let intrinsics = CameraIntrinsics::approximate(2, 2);
        let cloud = Backprojector::new(ProjectionMode::TrueScale)
            .backproject(&image, &depth, &intrinsics)
            .unwrap();
        let zs: Vec<f32> = cloud.points().iter().map(|p| p.position[2]).collect();
        assert_eq!(zs, vec![0.0, 100.0, 250.0, 500.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let image = RgbImage::new(4, 4);
        let depth = uniform_depth(4, 3, 1.0);
        let intrinsics = CameraIntrinsics::approximate(4, 4);
        let result = Backprojector::default().backproject(&image, &depth, &intrinsics);
        assert!(matches!(
            result,
            Err(PipelineError::DimensionMismatch { depth_height: 3, .. })
        ));
    }

    #[test]
    fn test_all_zero_depth_is_degenerate() {
        let image = RgbImage::new(4, 4);
        let depth = uniform_depth(4, 4, 0.0);
        let intrinsics = CameraIntrinsics::approximate(4, 4);
        let result = Backprojector::default().backproject(&image, &depth, &intrinsics);
        assert!(matches!(result, Err(PipelineError::DegenerateDepthRange)));
    }

    #[test]
    fn test_colors_follow_pixels() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(1, 0, image::Rgb([255, 0, 0]));
        let depth = uniform_depth(2, 2, 1.0);
        let intrinsics = CameraIntrinsics::approximate(2, 2);
        let cloud = Backprojector::default()
            .backproject(&image, &depth, &intrinsics)
            .unwrap();
        assert_eq!(cloud.points()[1].color, [255, 0, 0]);
        assert_eq!(cloud.points()[0].color, [0, 0, 0]);
    }
}
