use crate::mesh_pipeline::cloud::PointCloud;
use crate::mesh_pipeline::common::Result;
use crate::mesh_pipeline::mesh::types::Mesh;

/// Seam for the surface-fitting collaborator. `mesh_depth` follows the
/// Poisson convention: higher values mean a finer reconstruction.
pub trait SurfaceReconstructor {
    fn reconstruct(&self, cloud: &PointCloud, mesh_depth: u32) -> Result<Mesh>;
}
