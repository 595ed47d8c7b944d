use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidImageDimensions(u32, u32),

    #[error("Image too small to crop a {border}px border: {width}x{height}")]
    ImageTooSmallToCrop {
        width: u32,
        height: u32,
        border: u32,
    },

    #[error(
        "Image/depth dimension mismatch: image {image_width}x{image_height}, depth {depth_width}x{depth_height}"
    )]
    DimensionMismatch {
        image_width: u32,
        image_height: u32,
        depth_width: u32,
        depth_height: u32,
    },

    #[error("Degenerate depth range: depth map has no positive values")]
    DegenerateDepthRange,

    #[error("Invalid depth data: {0}")]
    InvalidDepthData(String),

    #[error("Depth estimation failed: {0}")]
    DepthEstimationError(String),

    #[error("Surface reconstruction failed: {0}")]
    ReconstructionError(String),

    #[error("Unsupported mesh format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
