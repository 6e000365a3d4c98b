//! Fixed corner tables for the cube and octahedron primitives

use glam::Vec3;

/// The 8 corners of the unit cube.
///
/// Top face first (counter-clockwise seen from above), then the bottom face
/// in the same order one unit down.
pub const CUBE_POINTS: [Vec3; 8] = [
    Vec3::new(-1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, -1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(-1.0, 1.0, 1.0),
    Vec3::new(-1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, -1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(-1.0, -1.0, 1.0),
];

// Octahedron inscribed in the unit sphere
pub const WEST: Vec3 = Vec3::new(-1.0, 0.0, 0.0);
pub const EAST: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const DOWN: Vec3 = Vec3::new(0.0, -1.0, 0.0);
pub const UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);
pub const SOUTH: Vec3 = Vec3::new(0.0, 0.0, -1.0);
pub const NORTH: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Base triangles of the octahedron: lower half around [`DOWN`], then upper
/// half around [`UP`]. All 8 share one winding.
pub const OCTAHEDRON_FACES: [[Vec3; 3]; 8] = [
    // Bottom half
    [WEST, NORTH, DOWN],
    [NORTH, EAST, DOWN],
    [EAST, SOUTH, DOWN],
    [SOUTH, WEST, DOWN],
    // Top half
    [NORTH, WEST, UP],
    [EAST, NORTH, UP],
    [SOUTH, EAST, UP],
    [WEST, SOUTH, UP],
];
