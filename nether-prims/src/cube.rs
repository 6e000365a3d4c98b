//! Unit cube with flat face normals

use glam::Vec3;
use tracing::debug;

use crate::corners::CUBE_POINTS;
use crate::emit::{FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX, add_quad};

/// Vertices in the cube buffer (6 faces × 2 triangles × 3)
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Floats in the cube buffer
pub const CUBE_FLOAT_COUNT: usize = CUBE_VERTEX_COUNT * FLOATS_PER_VERTEX;

/// Generate the cube spanning (-1, -1, -1) to (1, 1, 1)
///
/// # Returns
/// 216 floats: 6 faces, each split into 2 triangles sharing the p1-p3
/// diagonal. Every vertex of a face carries that face's axis normal.
pub fn build_cube() -> Vec<f32> {
    let mut data = Vec::with_capacity(CUBE_FLOAT_COUNT);

    let [c1, c2, c3, c4, c5, c6, c7, c8] = CUBE_POINTS;

    // Top
    add_quad(&mut data, c1, c2, c3, c4, Vec3::Y);

    // Bottom
    add_quad(&mut data, c8, c7, c6, c5, Vec3::NEG_Y);

    // Back / south
    add_quad(&mut data, c2, c1, c5, c6, Vec3::NEG_Z);

    // Front / north
    add_quad(&mut data, c4, c3, c7, c8, Vec3::Z);

    // Left / west
    add_quad(&mut data, c1, c4, c8, c5, Vec3::NEG_X);

    // Right / east
    add_quad(&mut data, c3, c2, c6, c7, Vec3::X);

    debug!(
        "build_cube: {} triangles, {} floats",
        data.len() / FLOATS_PER_TRIANGLE,
        data.len()
    );
    data
}
