//! Depth input module
//!
//! This module provides the depth map data type and the estimator seam behind
//! which the model-backed depth provider lives.

mod estimator;
mod image_file_depth;
pub mod types;

pub use estimator::DepthEstimator;
pub use image_file_depth::ImageFileDepth;
pub use types::DepthMap;
