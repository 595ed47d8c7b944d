use crate::mesh_pipeline::common::{PipelineError, Result};

/// Pinhole camera intrinsics. No calibration or EXIF is consulted; the
/// approximate constructor fixes the focal length and centers the principal
/// point, which is good enough for relative geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    pub fx: f32,
    pub fy: f32,
    pub cx: f32,
    pub cy: f32,
    pub width: u32,
    pub height: u32,
}

impl CameraIntrinsics {
    pub const DEFAULT_FOCAL: f32 = 500.0;

    pub fn new(fx: f32, fy: f32, cx: f32, cy: f32, width: u32, height: u32) -> Self {
        Self {
            fx,
            fy,
            cx,
            cy,
            width,
            height,
        }
    }

    /// fx = fy = 500, principal point at the image center.
    pub fn approximate(width: u32, height: u32) -> Self {
        Self::new(
            Self::DEFAULT_FOCAL,
            Self::DEFAULT_FOCAL,
            width as f32 / 2.0,
            height as f32 / 2.0,
            width,
            height,
        )
    }
}

/// One point of a colored point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColoredPoint {
    pub position: [f32; 3],
    pub color: [u8; 3],
}

/// Unordered set of colored 3D points.
///
/// Clouds built by back-projection remember their source grid dimensions so
/// grid-aware reconstructors can exploit pixel adjacency; clouds from other
/// sources are plain point sets.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    points: Vec<ColoredPoint>,
    grid: Option<(u32, u32)>,
}

impl PointCloud {
    pub fn unorganized(points: Vec<ColoredPoint>) -> Self {
        Self { points, grid: None }
    }

    /// Row-major cloud of exactly `width * height` points.
    pub fn organized(points: Vec<ColoredPoint>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize;
        if points.len() != expected {
            return Err(PipelineError::InvalidDepthData(format!(
                "organized cloud needs {} points for {}x{}, got {}",
                expected,
                width,
                height,
                points.len()
            )));
        }
        Ok(Self {
            points,
            grid: Some((width, height)),
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ColoredPoint] {
        &self.points
    }

    /// `(width, height)` of the source pixel grid, when known.
    pub fn grid_dims(&self) -> Option<(u32, u32)> {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approximate_intrinsics() {
        let intrinsics = CameraIntrinsics::approximate(128, 64);
        assert_eq!(intrinsics.fx, 500.0);
        assert_eq!(intrinsics.fy, 500.0);
        assert_eq!(intrinsics.cx, 64.0);
        assert_eq!(intrinsics.cy, 32.0);
    }

    #[test]
    fn test_organized_cloud_checks_count() {
        let points = vec![
            ColoredPoint {
                position: [0.0; 3],
                color: [0; 3],
            };
            6
        ];
        assert!(PointCloud::organized(points.clone(), 3, 2).is_ok());
        assert!(PointCloud::organized(points, 4, 2).is_err());
    }
}
