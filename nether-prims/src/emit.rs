//! Interleaved vertex buffer writers and views
//!
//! Buffers are flat `f32` sequences: each vertex is
//! `[px, py, pz, nx, ny, nz]`, each triangle is 3 consecutive vertices.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::error::MeshError;

/// Floats per vertex (position + normal)
pub const FLOATS_PER_VERTEX: usize = 6;

/// Floats per triangle (3 vertices)
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;

/// One interleaved vertex, laid out exactly as in the flat buffer (24 bytes)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Append a quad as triangles (p1, p2, p3) and (p1, p3, p4), all with the
/// same flat normal
pub fn add_quad(data: &mut Vec<f32>, p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3, normal: Vec3) {
    add_triangle(data, p1, p2, p3, normal, normal, normal);
    add_triangle(data, p1, p3, p4, normal, normal, normal);
}

/// Append one triangle: (p1, n1), (p2, n2), (p3, n3)
pub fn add_triangle(
    data: &mut Vec<f32>,
    p1: Vec3,
    p2: Vec3,
    p3: Vec3,
    n1: Vec3,
    n2: Vec3,
    n3: Vec3,
) {
    add_point(data, p1);
    add_point(data, n1);
    add_point(data, p2);
    add_point(data, n2);
    add_point(data, p3);
    add_point(data, n3);
}

/// Append x, y, z and return the new buffer length
pub fn add_point(data: &mut Vec<f32>, p: Vec3) -> usize {
    data.extend_from_slice(&p.to_array());
    data.len()
}

/// Reinterpret a flat buffer as vertices without copying.
///
/// Fails unless the buffer holds whole triangles.
pub fn as_vertices(data: &[f32]) -> Result<&[Vertex], MeshError> {
    if data.len() % FLOATS_PER_TRIANGLE != 0 {
        return Err(MeshError::PartialTriangle { len: data.len() });
    }
    bytemuck::try_cast_slice(data).map_err(MeshError::Layout)
}

/// Raw bytes for a GPU vertex buffer upload (stride 24, normal at offset 12)
pub fn as_bytes(data: &[f32]) -> &[u8] {
    bytemuck::cast_slice(data)
}

/// Iterate vertices in groups of 3. Trailing vertices short of a triangle
/// are skipped.
pub fn triangles(vertices: &[Vertex]) -> impl Iterator<Item = &[Vertex; 3]> {
    vertices
        .chunks_exact(3)
        .filter_map(|tri| <&[Vertex; 3]>::try_from(tri).ok())
}

/// Reverse the winding of every triangle in place by swapping its 2nd and
/// 3rd vertex. Any trailing partial triangle is left untouched.
pub fn flip_winding(data: &mut [f32]) {
    for tri in data.chunks_exact_mut(FLOATS_PER_TRIANGLE) {
        let (second, third) = tri[FLOATS_PER_VERTEX..].split_at_mut(FLOATS_PER_VERTEX);
        second.swap_with_slice(third);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_point_returns_len() {
        let mut data = Vec::new();
        assert_eq!(add_point(&mut data, Vec3::new(1.0, 2.0, 3.0)), 3);
        assert_eq!(add_point(&mut data, Vec3::new(4.0, 5.0, 6.0)), 6);
        assert_eq!(data, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_add_triangle_interleaves() {
        let mut data = Vec::new();
        add_triangle(
            &mut data,
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::NEG_X,
            Vec3::NEG_Y,
            Vec3::NEG_Z,
        );
        assert_eq!(data.len(), FLOATS_PER_TRIANGLE);
        assert_eq!(
            data,
            [
                1.0, 0.0, 0.0, -1.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, -1.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, 0.0, -1.0,
            ]
        );
    }

    #[test]
    fn test_add_quad_splits_on_p1_p3() {
        let (p1, p2, p3, p4) = (Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y);
        let mut data = Vec::new();
        add_quad(&mut data, p1, p2, p3, p4, Vec3::Z);

        let verts = as_vertices(&data).unwrap();
        let positions: Vec<Vec3> = verts.iter().map(Vertex::position).collect();
        assert_eq!(positions, [p1, p2, p3, p1, p3, p4]);
        assert!(verts.iter().all(|v| v.normal() == Vec3::Z));
    }

    #[test]
    fn test_as_vertices_rejects_partial_triangle() {
        let data = vec![0.0; FLOATS_PER_TRIANGLE + FLOATS_PER_VERTEX];
        let err = as_vertices(&data).unwrap_err();
        assert!(matches!(err, MeshError::PartialTriangle { len: 24 }));
    }

    #[test]
    fn test_as_bytes_len() {
        let data = vec![0.0f32; FLOATS_PER_TRIANGLE];
        assert_eq!(as_bytes(&data).len(), FLOATS_PER_TRIANGLE * 4);
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn test_triangles_groups_of_three() {
        let mut data = Vec::new();
        add_quad(&mut data, Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y, Vec3::Z);
        let verts = as_vertices(&data).unwrap();

        let tris: Vec<&[Vertex; 3]> = triangles(verts).collect();
        assert_eq!(tris.len(), 2);
        assert_eq!(tris[1][1].position(), Vec3::ONE);

        // Partial trailing triangle is dropped
        assert_eq!(triangles(&verts[..5]).count(), 1);
    }

    #[test]
    fn test_flip_winding_swaps_last_two_vertices() {
        let mut data = Vec::new();
        add_triangle(&mut data, Vec3::X, Vec3::Y, Vec3::Z, Vec3::X, Vec3::Y, Vec3::Z);
        flip_winding(&mut data);

        let verts = as_vertices(&data).unwrap();
        assert_eq!(verts[0].position(), Vec3::X);
        assert_eq!(verts[1].position(), Vec3::Z);
        assert_eq!(verts[2].position(), Vec3::Y);
        assert_eq!(verts[1].normal(), Vec3::Z);
    }
}
