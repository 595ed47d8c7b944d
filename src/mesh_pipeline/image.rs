//! Image normalization module
//!
//! This module resizes input photographs to dimensions the depth network can
//! consume and crops receptive-field borders afterward.

mod crop;
mod normalizer;

pub use crop::crop_border;
pub use normalizer::{ImageNormalizer, STRIDE};
