use anyhow::Context;
use photomesh_rs::logger;
use photomesh_rs::mesh_pipeline::{PhotoToMeshPipeline, PipelineConfig, RunConfig};

use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "configs.yaml".to_string());
    let run = RunConfig::from_yaml_file(&config_path)
        .with_context(|| format!("loading {}", config_path))?;

    info!("Feature extractor: {}", run.model.feature_extractor);
    info!("Depth estimator: {}", run.model.depth_estimator);
    info!("Input image path: {}", run.image.display());
    info!("Output mesh path: {}", run.output.display());
    info!("Mesh depth: {}", run.mesh_depth);

    let depth_map = run.depth_map.clone().context(
        "configuration needs a `depth_map` entry: this build reads precomputed \
         depth images instead of running the depth network",
    )?;

    let config = PipelineConfig::builder()
        .mesh_depth(run.mesh_depth)
        .projection(run.projection)
        .visualize(run.visualize.clone())
        .build();
    let pipeline = PhotoToMeshPipeline::with_depth_file(config, depth_map);

    match pipeline.convert_file(&run.image, &run.output) {
        Ok(_) => info!("Mesh written to {}", run.output.display()),
        Err(e) => error!("Pipeline failed: {}", e),
    }

    Ok(())
}
