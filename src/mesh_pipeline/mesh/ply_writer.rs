use std::io::Write;

use tracing::debug;

use crate::mesh_pipeline::common::Result;
use crate::mesh_pipeline::mesh::types::Mesh;
use crate::mesh_pipeline::mesh::writer::MeshWriter;

/// ASCII PLY with positions, normals, colors, and triangle faces.
pub struct PlyMeshWriter;

impl MeshWriter for PlyMeshWriter {
    fn write_mesh(&self, mesh: &Mesh, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding PLY mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        writeln!(output, "ply")?;
        writeln!(output, "format ascii 1.0")?;
        writeln!(output, "element vertex {}", mesh.vertex_count())?;
        writeln!(output, "property float x")?;
        writeln!(output, "property float y")?;
        writeln!(output, "property float z")?;
        writeln!(output, "property float nx")?;
        writeln!(output, "property float ny")?;
        writeln!(output, "property float nz")?;
        writeln!(output, "property uchar red")?;
        writeln!(output, "property uchar green")?;
        writeln!(output, "property uchar blue")?;
        writeln!(output, "element face {}", mesh.triangle_count())?;
        writeln!(output, "property list uchar int vertex_indices")?;
        writeln!(output, "end_header")?;

        for i in 0..mesh.vertex_count() {
            let p = mesh.positions[i];
            let n = mesh.normals[i];
            let c = mesh.colors[i];
            writeln!(
                output,
                "{} {} {} {} {} {} {} {} {}",
                p[0], p[1], p[2], n[0], n[1], n[2], c[0], c[1], c[2]
            )?;
        }
        for t in &mesh.triangles {
            writeln!(output, "3 {} {} {}", t[0], t[1], t[2])?;
        }

        Ok(())
    }
}
