use std::io::Write;

use crate::mesh_pipeline::mesh::obj_writer::ObjMeshWriter;
use crate::mesh_pipeline::mesh::ply_writer::PlyMeshWriter;
use crate::mesh_pipeline::mesh::types::{Mesh, MeshFormat};
use crate::mesh_pipeline::common::Result;

pub trait MeshWriter {
    fn write_mesh(&self, mesh: &Mesh, output: &mut dyn Write) -> Result<()>;
}

pub fn writer_for(format: MeshFormat) -> Box<dyn MeshWriter> {
    match format {
        MeshFormat::Ply => Box::new(PlyMeshWriter),
        MeshFormat::Obj => Box::new(ObjMeshWriter),
    }
}
