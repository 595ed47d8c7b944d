//! Photo to mesh pipeline module
//!
//! This module provides a structured approach to turning a single photograph
//! into a printable triangle mesh, with separate modules for image
//! normalization, depth input, point cloud construction, surface
//! reconstruction, and pipeline orchestration.

pub mod cloud;
pub mod common;
pub mod config;
pub mod conversions;
pub mod depth;
pub mod image;
pub mod mesh;
pub mod timing;
pub mod viz;

pub use common::{
    PipelineError,
    Result,
};

pub use config::{
    PipelineConfig,
    PipelineConfigBuilder,
    RunConfig,
    VisualizeOptions,
};

pub use image::{
    ImageNormalizer,
    crop_border,
};

pub use depth::{
    DepthEstimator,
    DepthMap,
    ImageFileDepth,
};

pub use cloud::{
    Backprojector,
    CameraIntrinsics,
    ColoredPoint,
    PointCloud,
    ProjectionMode,
};

pub use mesh::{
    GridReconstructor,
    Mesh,
    MeshFormat,
    MeshWriter,
    ObjMeshWriter,
    PlyMeshWriter,
    SurfaceReconstructor,
};

pub use conversions::{
    PhotoToMeshPipeline,
};

pub use timing::{PipelineTimings, StepTiming, Timer};
