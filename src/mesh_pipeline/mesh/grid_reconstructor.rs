use tracing::debug;

use crate::mesh_pipeline::cloud::PointCloud;
use crate::mesh_pipeline::common::{PipelineError, Result};
use crate::mesh_pipeline::mesh::reconstructor::SurfaceReconstructor;
use crate::mesh_pipeline::mesh::types::Mesh;

/// `mesh_depth` at or above this samples every pixel.
const FULL_RES_DEPTH: u32 = 10;

/// Height-field reconstructor for organized clouds.
///
/// Back-projected clouds keep their pixel grid, so a surface falls out of
/// triangulating adjacent samples directly. `mesh_depth` acts as a resolution
/// exponent: the grid is sampled with stride `2^(10 - mesh_depth)`, matching
/// the Poisson convention that a higher depth gives a finer mesh. Cells whose
/// corners all carry zero depth have no surface evidence and are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridReconstructor;

impl GridReconstructor {
    pub fn new() -> Self {
        Self
    }

    fn sample_axis(extent: u32, stride: u32) -> Vec<u32> {
        let mut samples: Vec<u32> = (0..extent).step_by(stride as usize).collect();
        if *samples.last().unwrap() != extent - 1 {
            samples.push(extent - 1);
        }
        samples
    }
}

impl SurfaceReconstructor for GridReconstructor {
    fn reconstruct(&self, cloud: &PointCloud, mesh_depth: u32) -> Result<Mesh> {
        let (width, height) = cloud.grid_dims().ok_or_else(|| {
            PipelineError::ReconstructionError(
                "grid reconstruction needs an organized point cloud".to_string(),
            )
        })?;
        if width < 2 || height < 2 {
            return Err(PipelineError::ReconstructionError(format!(
                "grid {}x{} is too small to triangulate",
                width, height
            )));
        }

        let stride = if mesh_depth >= FULL_RES_DEPTH {
            1
        } else {
            (1u32 << (FULL_RES_DEPTH - mesh_depth))
                .min(width - 1)
                .min(height - 1)
        };
        debug!(
            "Reconstructing {}x{} grid at stride {} (mesh depth {})",
            width, height, stride, mesh_depth
        );

        let us = Self::sample_axis(width, stride);
        let vs = Self::sample_axis(height, stride);
        let nu = us.len();

        let points = cloud.points();
        let mut mesh = Mesh::default();
        for &v in &vs {
            for &u in &us {
                let p = points[v as usize * width as usize + u as usize];
                mesh.positions.push(p.position);
                mesh.colors.push(p.color);
            }
        }

        // Two triangles per cell, skipping cells with no depth at any corner.
        for j in 0..vs.len() - 1 {
            for i in 0..nu - 1 {
                let a = (j * nu + i) as u32;
                let b = (j * nu + i + 1) as u32;
                let c = ((j + 1) * nu + i) as u32;
                let d = ((j + 1) * nu + i + 1) as u32;
                let empty = [a, b, c, d]
                    .iter()
                    .all(|&idx| mesh.positions[idx as usize][2] == 0.0);
                if empty {
                    continue;
                }
                mesh.triangles.push([a, c, d]);
                mesh.triangles.push([a, d, b]);
            }
        }

        mesh.normals = vertex_normals(&mesh.positions, &mesh.triangles);
        Ok(mesh)
    }
}

/// Area-weighted vertex normals, oriented toward the camera (-z).
fn vertex_normals(positions: &[[f32; 3]], triangles: &[[u32; 3]]) -> Vec<[f32; 3]> {
    let mut normals = vec![[0.0f32; 3]; positions.len()];
    for tri in triangles {
        let [i, j, k] = *tri;
        let p0 = positions[i as usize];
        let p1 = positions[j as usize];
        let p2 = positions[k as usize];
        let e1 = [p1[0] - p0[0], p1[1] - p0[1], p1[2] - p0[2]];
        let e2 = [p2[0] - p0[0], p2[1] - p0[1], p2[2] - p0[2]];
        let face = [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ];
        for &idx in tri {
            let n = &mut normals[idx as usize];
            n[0] += face[0];
            n[1] += face[1];
            n[2] += face[2];
        }
    }

    for n in &mut normals {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if len > 0.0 {
            n[0] /= len;
            n[1] /= len;
            n[2] /= len;
            if n[2] > 0.0 {
                n[0] = -n[0];
                n[1] = -n[1];
                n[2] = -n[2];
            }
        } else {
            *n = [0.0, 0.0, -1.0];
        }
    }
    normals
}
