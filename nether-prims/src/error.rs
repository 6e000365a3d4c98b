//! Error types for configurable mesh generation

use bytemuck::PodCastError;
use thiserror::Error;

/// Errors from the configurable builders and buffer views.
///
/// The fixed builders ([`crate::build_cube`], [`crate::build_sphere`]) never fail.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("sphere subdivision depth {depth} exceeds maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },

    #[error("invalid sphere config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("vertex buffer of {len} floats is not a whole number of triangles")]
    PartialTriangle { len: usize },

    #[error("vertex buffer layout mismatch: {0:?}")]
    Layout(PodCastError),
}
