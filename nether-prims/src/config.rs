//! Sphere generation settings
//!
//! Settings can come from a TOML snippet (e.g. a section of a larger asset
//! manifest). Missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::error::MeshError;

/// Default recursion depth: 4^3 = 64 sub-triangles per base face, 512 total.
pub const DEFAULT_SUBDIVISION_DEPTH: u32 = 3;

/// Deepest subdivision accepted (8 × 4^8 triangles, ~9.4M floats).
pub const MAX_SUBDIVISION_DEPTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SphereConfig {
    /// Number of midpoint subdivision passes applied to each octahedron face
    #[serde(default = "default_depth")]
    pub depth: u32,
}

fn default_depth() -> u32 { DEFAULT_SUBDIVISION_DEPTH }

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SUBDIVISION_DEPTH,
        }
    }
}

impl SphereConfig {
    pub fn with_depth(depth: u32) -> Self {
        Self { depth }
    }

    /// Parse and validate settings from TOML, e.g. `depth = 4`
    pub fn from_toml_str(content: &str) -> Result<Self, MeshError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MeshError> {
        if self.depth > MAX_SUBDIVISION_DEPTH {
            return Err(MeshError::DepthTooLarge {
                depth: self.depth,
                max: MAX_SUBDIVISION_DEPTH,
            });
        }
        Ok(())
    }
}
