use std::io::Write;

use tracing::debug;

use crate::mesh_pipeline::common::Result;
use crate::mesh_pipeline::mesh::types::Mesh;
use crate::mesh_pipeline::mesh::writer::MeshWriter;

/// Wavefront OBJ with positions, normals, and triangle faces. OBJ has no
/// standard vertex-color channel, so colors are dropped here.
pub struct ObjMeshWriter;

impl MeshWriter for ObjMeshWriter {
    fn write_mesh(&self, mesh: &Mesh, output: &mut dyn Write) -> Result<()> {
        debug!(
            "Encoding OBJ mesh: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );

        for p in &mesh.positions {
            writeln!(output, "v {} {} {}", p[0], p[1], p[2])?;
        }
        for n in &mesh.normals {
            writeln!(output, "vn {} {} {}", n[0], n[1], n[2])?;
        }
        // OBJ indices are 1-based.
        for t in &mesh.triangles {
            writeln!(
                output,
                "f {}//{} {}//{} {}//{}",
                t[0] + 1,
                t[0] + 1,
                t[1] + 1,
                t[1] + 1,
                t[2] + 1,
                t[2] + 1
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obj_output() {
        let mesh = Mesh {
            positions: vec![[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]],
            normals: vec![[0.0, 0.0, -1.0]; 3],
            colors: vec![[0, 0, 0]; 3],
            triangles: vec![[0, 1, 2]],
        };
        let mut out = Vec::new();
        ObjMeshWriter.write_mesh(&mesh, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 1);
        assert!(text.contains("f 1//1 2//2 3//3"));
    }
}
