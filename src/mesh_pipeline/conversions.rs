//! Pipeline conversions module
//!
//! This module contains the orchestration logic sequencing the photo-to-mesh
//! stages.

mod photo_to_mesh;

pub use photo_to_mesh::PhotoToMeshPipeline;
