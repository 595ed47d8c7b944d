//! Common utilities module
//!
//! This module contains shared utilities used across the mesh pipeline.

pub mod error;

pub use error::{PipelineError, Result};
