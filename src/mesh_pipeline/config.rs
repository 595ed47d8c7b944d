//! Run and pipeline configuration
//!
//! `RunConfig` mirrors the YAML configuration file consumed by the binary;
//! `PipelineConfig` carries the stage tunables handed to the pipeline itself.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::mesh_pipeline::cloud::ProjectionMode;
use crate::mesh_pipeline::common::{PipelineError, Result};

/// Pretrained model identifiers. The depth network itself is an external
/// collaborator; the ids are recorded and logged, never loaded here.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub feature_extractor: String,
    pub depth_estimator: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VisualizeOptions {
    #[serde(default)]
    pub depth_estimator: bool,
    #[serde(default)]
    pub point_cloud: bool,
    #[serde(default)]
    pub mesh_generation: bool,
}

/// One run of the pipeline as described by a YAML configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub model: ModelConfig,
    pub image: PathBuf,
    pub output: PathBuf,
    pub mesh_depth: u32,
    /// Precomputed depth image consumed by [`ImageFileDepth`].
    ///
    /// [`ImageFileDepth`]: crate::mesh_pipeline::depth::ImageFileDepth
    #[serde(default)]
    pub depth_map: Option<PathBuf>,
    /// `normalized` reproduces the original lossy 8-bit projection;
    /// `true_scale` keeps the depth map's native units.
    #[serde(default)]
    pub projection: ProjectionMode,
    #[serde(default)]
    pub visualize: VisualizeOptions,
}

impl RunConfig {
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PipelineError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| PipelineError::ConfigError(e.to_string()))
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Octree-style resolution exponent passed to the surface reconstructor.
    pub mesh_depth: u32,
    pub projection: ProjectionMode,
    /// Normalized image height never exceeds this (clamped to the stride).
    pub max_height: u32,
    /// Pixels cropped from each side of the image and depth map after
    /// estimation, discarding receptive-field edge artifacts.
    pub crop_border: u32,
    /// Applied to depth values read by the file backend (millimeter
    /// convention downstream).
    pub depth_scale: f32,
    pub visualize: VisualizeOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            mesh_depth: 10,
            projection: ProjectionMode::Normalized,
            max_height: 480,
            crop_border: 16,
            depth_scale: 1000.0,
            visualize: VisualizeOptions::default(),
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct PipelineConfigBuilder {
    mesh_depth: Option<u32>,
    projection: Option<ProjectionMode>,
    max_height: Option<u32>,
    crop_border: Option<u32>,
    depth_scale: Option<f32>,
    visualize: Option<VisualizeOptions>,
}

impl PipelineConfigBuilder {
    pub fn mesh_depth(mut self, mesh_depth: u32) -> Self {
        self.mesh_depth = Some(mesh_depth);
        self
    }

    pub fn projection(mut self, projection: ProjectionMode) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn crop_border(mut self, crop_border: u32) -> Self {
        self.crop_border = Some(crop_border);
        self
    }

    pub fn depth_scale(mut self, depth_scale: f32) -> Self {
        self.depth_scale = Some(depth_scale);
        self
    }

    pub fn visualize(mut self, visualize: VisualizeOptions) -> Self {
        self.visualize = Some(visualize);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            mesh_depth: self.mesh_depth.unwrap_or(default.mesh_depth),
            projection: self.projection.unwrap_or(default.projection),
            max_height: self.max_height.unwrap_or(default.max_height),
            crop_border: self.crop_border.unwrap_or(default.crop_border),
            depth_scale: self.depth_scale.unwrap_or(default.depth_scale),
            visualize: self.visualize.unwrap_or(default.visualize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = PipelineConfig::builder()
            .mesh_depth(8)
            .projection(ProjectionMode::TrueScale)
            .max_height(320)
            .build();

        assert_eq!(config.mesh_depth, 8);
        assert!(matches!(config.projection, ProjectionMode::TrueScale));
        assert_eq!(config.max_height, 320);
        assert_eq!(config.crop_border, 16);
        assert_eq!(config.depth_scale, 1000.0);
    }

    #[test]
    fn test_run_config_from_yaml() {
        let yaml = r#"
model:
  feature_extractor: vinvino02/glpn-nyu
  depth_estimator: vinvino02/glpn-nyu
image: ./inputs/photo.jpg
output: ./outputs/mesh.ply
mesh_depth: 10
depth_map: ./inputs/photo_depth.png
visualize:
  depth_estimator: true
  point_cloud: false
  mesh_generation: false
"#;
        let config = RunConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.model.depth_estimator, "vinvino02/glpn-nyu");
        assert!(matches!(config.projection, ProjectionMode::Normalized));
        assert_eq!(config.mesh_depth, 10);
        assert_eq!(config.output, PathBuf::from("./outputs/mesh.ply"));
        assert!(config.visualize.depth_estimator);
        assert!(!config.visualize.point_cloud);
    }

    #[test]
    fn test_run_config_visualize_defaults() {
        let yaml = r#"
model:
  feature_extractor: a
  depth_estimator: b
image: in.png
output: out.obj
mesh_depth: 9
projection: true_scale
"#;
        let config = RunConfig::from_yaml_str(yaml).unwrap();
        assert!(!config.visualize.depth_estimator);
        assert!(!config.visualize.mesh_generation);
        assert!(config.depth_map.is_none());
        assert!(matches!(config.projection, ProjectionMode::TrueScale));
    }

    #[test]
    fn test_run_config_rejects_garbage() {
        let result = RunConfig::from_yaml_str("not: [valid");
        assert!(matches!(result, Err(PipelineError::ConfigError(_))));
    }
}
