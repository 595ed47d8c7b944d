use std::path::Path;

use crate::mesh_pipeline::common::{PipelineError, Result};

/// Indexed triangle mesh with per-vertex normals and colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[u8; 3]>,
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Rotates the mesh by pi about the X axis through the origin, negating
    /// y and z of positions and normals. Puts the mesh upright for printing.
    pub fn rotate_x_pi(&mut self) {
        for p in &mut self.positions {
            p[1] = -p[1];
            p[2] = -p[2];
        }
        for n in &mut self.normals {
            n[1] = -n[1];
            n[2] = -n[2];
        }
    }
}

/// Output encodings, selected from the output-path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Ply,
    Obj,
}

impl MeshFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "ply" => Ok(Self::Ply),
            "obj" => Ok(Self::Obj),
            _ => Err(PipelineError::UnsupportedFormat(format!(
                "{} (expected .ply or .obj)",
                path.display()
            ))),
        }
    }
}
