//! Nether-Prims: static vertex data for primitive meshes
//!
//! Generates flat, interleaved position/normal buffers ready for a GPU
//! vertex buffer upload:
//!
//! - [`build_cube`] - unit cube with flat face normals (216 floats)
//! - [`build_sphere`] - octahedron subdivided 3 times and projected onto the
//!   unit sphere (9216 floats)
//!
//! # Layout
//!
//! ```text
//! vertex   = [px, py, pz, nx, ny, nz]    6 × f32, 24 bytes
//! triangle = 3 consecutive vertices      18 × f32
//! ```
//!
//! Buffers are non-indexed; every triangle carries its own vertices.
//!
//! # Winding
//!
//! All triangles of both meshes share one winding: clockwise when viewed from
//! outside under a right-handed basis. Use [`flip_winding`] for pipelines that
//! cull counter-clockwise back faces.
//!
//! # Usage
//!
//! ```
//! use nether_prims::{SphereConfig, as_bytes, build_cube, build_sphere_with};
//!
//! let cube = build_cube();
//! assert_eq!(cube.len(), 216);
//!
//! let sphere = build_sphere_with(&SphereConfig::from_toml_str("depth = 2").unwrap()).unwrap();
//! assert_eq!(sphere.len(), 8 * 16 * 18);
//!
//! let bytes: &[u8] = as_bytes(&sphere);
//! assert_eq!(bytes.len(), sphere.len() * 4);
//! ```

mod config;
mod corners;
mod cube;
mod emit;
mod error;
mod sphere;

pub use config::{DEFAULT_SUBDIVISION_DEPTH, MAX_SUBDIVISION_DEPTH, SphereConfig};
pub use corners::{CUBE_POINTS, DOWN, EAST, NORTH, OCTAHEDRON_FACES, SOUTH, UP, WEST};
pub use cube::{CUBE_FLOAT_COUNT, CUBE_VERTEX_COUNT, build_cube};
pub use emit::{
    FLOATS_PER_TRIANGLE, FLOATS_PER_VERTEX, Vertex, add_point, add_quad, add_triangle, as_bytes,
    as_vertices, flip_winding, triangles,
};
pub use error::MeshError;
pub use sphere::{build_sphere, build_sphere_with, sphere_float_count, sphere_triangle_count};
