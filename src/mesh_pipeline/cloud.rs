//! Point cloud construction module
//!
//! This module holds the pinhole camera model and the back-projection of a
//! color image plus depth map into a colored 3D point cloud.

mod backprojector;
pub mod types;

pub use backprojector::{Backprojector, ProjectionMode};
pub use types::{CameraIntrinsics, ColoredPoint, PointCloud};
