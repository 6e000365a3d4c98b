//! Unit sphere built by recursive midpoint subdivision of an octahedron
//!
//! Each base triangle is split into 4 per level, with new midpoints pushed
//! out onto the unit sphere. Since every emitted corner has length 1, a
//! vertex's normal is its own position.

use glam::Vec3;
use tracing::{debug, warn};

use crate::config::{DEFAULT_SUBDIVISION_DEPTH, MAX_SUBDIVISION_DEPTH, SphereConfig};
use crate::corners::OCTAHEDRON_FACES;
use crate::emit::{FLOATS_PER_TRIANGLE, add_triangle};
use crate::error::MeshError;

/// Triangles emitted for a given subdivision depth: 8 × 4^depth
///
/// `None` past [`MAX_SUBDIVISION_DEPTH`], where no sphere is ever built.
pub const fn sphere_triangle_count(depth: u32) -> Option<usize> {
    if depth > MAX_SUBDIVISION_DEPTH {
        return None;
    }
    Some(OCTAHEDRON_FACES.len() << (2 * depth))
}

/// Floats emitted for a given subdivision depth: 8 × 4^depth × 18
pub const fn sphere_float_count(depth: u32) -> Option<usize> {
    match sphere_triangle_count(depth) {
        Some(triangles) => Some(triangles * FLOATS_PER_TRIANGLE),
        None => None,
    }
}

/// Generate the unit sphere at the default depth of 3
///
/// # Returns
/// 9216 floats (512 triangles)
pub fn build_sphere() -> Vec<f32> {
    build_at_depth(DEFAULT_SUBDIVISION_DEPTH)
}

/// Generate the unit sphere at a configured depth
///
/// Output holds [`sphere_float_count`]`(config.depth)` floats. Depth 0 is the
/// bare octahedron.
pub fn build_sphere_with(config: &SphereConfig) -> Result<Vec<f32>, MeshError> {
    if let Err(e) = config.validate() {
        warn!("build_sphere_with: {e}");
        return Err(e);
    }
    Ok(build_at_depth(config.depth))
}

// Callers validate depth first
fn build_at_depth(depth: u32) -> Vec<f32> {
    let mut data = Vec::with_capacity(sphere_float_count(depth).unwrap_or_default());

    for [c1, c2, c3] in OCTAHEDRON_FACES {
        subdivide(&mut data, c1, c2, c3, depth);
    }

    debug!(
        "build_sphere: depth {}, {} triangles, {} floats",
        depth,
        data.len() / FLOATS_PER_TRIANGLE,
        data.len()
    );
    data
}

fn subdivide(data: &mut Vec<f32>, c1: Vec3, c2: Vec3, c3: Vec3, remaining: u32) {
    if remaining == 0 {
        // Unit sphere: positions double as normals
        add_triangle(data, c1, c2, c3, c1, c2, c3);
        return;
    }

    let m1 = midpoint_on_sphere(c1, c2);
    let m2 = midpoint_on_sphere(c2, c3);
    let m3 = midpoint_on_sphere(c3, c1);

    subdivide(data, c1, m1, m3, remaining - 1);
    subdivide(data, m1, c2, m2, remaining - 1);
    subdivide(data, m3, m2, c3, remaining - 1);
    subdivide(data, m1, m2, m3, remaining - 1);
}

/// Edge midpoint projected onto the unit sphere.
///
/// Corners are never antipodal, so the sum is never zero.
fn midpoint_on_sphere(a: Vec3, b: Vec3) -> Vec3 {
    let m = (a + b).normalize();
    debug_assert!(m.is_finite(), "degenerate edge {a} -> {b}");
    m
}
