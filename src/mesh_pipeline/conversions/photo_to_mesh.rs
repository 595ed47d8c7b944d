use std::io::Write;
use std::path::Path;

use image::RgbImage;
use tracing::{info, instrument};

use crate::mesh_pipeline::{
    cloud::{Backprojector, CameraIntrinsics},
    common::{PipelineError, Result},
    config::PipelineConfig,
    depth::{DepthEstimator, ImageFileDepth},
    image::{ImageNormalizer, crop_border},
    mesh::{GridReconstructor, Mesh, MeshFormat, SurfaceReconstructor, writer_for},
    timing::{PipelineTimings, Timer},
    viz,
};

/// Sequences the three stages: depth estimation, point cloud construction,
/// mesh generation. Strictly forward, single-threaded; any stage failure
/// aborts the run and no partial output is considered valid.
pub struct PhotoToMeshPipeline<D: DepthEstimator, S: SurfaceReconstructor> {
    estimator: D,
    reconstructor: S,
    normalizer: ImageNormalizer,
    backprojector: Backprojector,
    config: PipelineConfig,
}

impl PhotoToMeshPipeline<ImageFileDepth, GridReconstructor> {
    /// Stock pipeline: precomputed depth image in, height-field mesh out.
    pub fn with_depth_file<P: AsRef<Path>>(config: PipelineConfig, depth_path: P) -> Self {
        let estimator = ImageFileDepth::new(depth_path.as_ref(), config.depth_scale);
        Self::with_custom(estimator, GridReconstructor::new(), config)
    }
}

impl<D: DepthEstimator, S: SurfaceReconstructor> PhotoToMeshPipeline<D, S> {
    pub fn with_custom(estimator: D, reconstructor: S, config: PipelineConfig) -> Self {
        let normalizer = ImageNormalizer::new(config.max_height);
        let backprojector = Backprojector::new(config.projection);
        Self {
            estimator,
            reconstructor,
            normalizer,
            backprojector,
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    fn run_stages(&self, image: &RgbImage) -> Result<(Mesh, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("depth_estimation");
        let (image, depth) = {
            let _span = tracing::info_span!("depth_estimation").entered();
            let normalized = self.normalizer.normalize(image)?;
            let depth = self.estimator.estimate(&normalized)?;
            let image = crop_border(&normalized, self.config.crop_border)?;
            let depth = depth.crop_border(self.config.crop_border)?;
            (image, depth)
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        if self.config.visualize.depth_estimator {
            viz::preview_depth(&depth);
        }

        let timer = Timer::start("point_cloud_construction");
        let cloud = {
            let _span = tracing::info_span!(
                "point_cloud_construction",
                width = image.width(),
                height = image.height()
            )
            .entered();
            let intrinsics = CameraIntrinsics::approximate(image.width(), image.height());
            self.backprojector.backproject(&image, &depth, &intrinsics)?
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        if self.config.visualize.point_cloud {
            viz::preview_point_cloud(&cloud);
        }

        let timer = Timer::start("mesh_generation");
        let mesh = {
            let _span = tracing::info_span!("mesh_generation").entered();
            let mut mesh = self.reconstructor.reconstruct(&cloud, self.config.mesh_depth)?;
            mesh.rotate_x_pi();
            mesh
        };
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        if self.config.visualize.mesh_generation {
            viz::preview_mesh(&mesh);
        }

        Ok((mesh, timings))
    }

    /// Runs the full pipeline on an in-memory image and writes the mesh in
    /// the given format.
    #[instrument(skip(self, image, output), fields(width = image.width(), height = image.height()))]
    pub fn convert(
        &self,
        image: &RgbImage,
        format: MeshFormat,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        info!("Starting photo to mesh conversion");

        let (mesh, mut timings) = self.run_stages(image)?;

        let timer = Timer::start("write_mesh");
        {
            let _span = tracing::info_span!("write_mesh").entered();
            writer_for(format).write_mesh(&mesh, output)?;
        }
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "Conversion complete"
        );
        Ok(timings)
    }

    /// Runs the full pipeline from an image file to a mesh file, format
    /// chosen by the output extension. Fails fast on an unsupported
    /// extension before any stage executes.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let format = MeshFormat::from_path(output_path)?;

        let image = {
            let _span = tracing::info_span!("read_input_file").entered();
            image::open(input_path)
                .map_err(|e| {
                    PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
                })?
                .to_rgb8()
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        let timings = self.convert(&image, format, &mut output_file)?;
        timings.log_summary();

        Ok(())
    }
}
