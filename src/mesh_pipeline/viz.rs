//! Visualization hooks
//!
//! The original tooling opened interactive windows at each stage. This crate
//! runs headless, so the hooks log summary statistics instead. They never
//! touch the data they are handed.

use tracing::info;

use crate::mesh_pipeline::cloud::PointCloud;
use crate::mesh_pipeline::depth::DepthMap;
use crate::mesh_pipeline::mesh::Mesh;

pub fn preview_depth(depth: &DepthMap) {
    let min = depth
        .values()
        .iter()
        .copied()
        .fold(f32::INFINITY, f32::min);
    info!(
        "Depth preview: {}x{}, range [{:.3}, {:.3}]",
        depth.width(),
        depth.height(),
        min,
        depth.max()
    );
}

pub fn preview_point_cloud(cloud: &PointCloud) {
    info!("Point cloud preview: {} points", cloud.len());
}

pub fn preview_mesh(mesh: &Mesh) {
    info!(
        "Mesh preview: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
}
