use image::RgbImage;

use crate::mesh_pipeline::common::Result;
use crate::mesh_pipeline::depth::types::DepthMap;

/// Seam for the depth provider. Implementations map a normalized image to a
/// depth map of identical dimensions; anything from a pretrained network to a
/// precomputed sidecar file fits behind this.
pub trait DepthEstimator {
    fn estimate(&self, image: &RgbImage) -> Result<DepthMap>;
}
