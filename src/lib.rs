pub mod logger;
pub mod mesh_pipeline;
