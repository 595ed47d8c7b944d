//! Surface reconstruction and mesh output module
//!
//! This module provides the mesh data type, the reconstructor seam behind
//! which the surface-fitting collaborator lives, and the mesh file writers.

mod grid_reconstructor;
mod obj_writer;
mod ply_writer;
mod reconstructor;
pub mod types;
mod writer;

pub use grid_reconstructor::GridReconstructor;
pub use obj_writer::ObjMeshWriter;
pub use ply_writer::PlyMeshWriter;
pub use reconstructor::SurfaceReconstructor;
pub use types::{Mesh, MeshFormat};
pub use writer::{MeshWriter, writer_for};
