use cavern_geom::{Bounds, Vec3};

use crate::constants::{WALL_QUAD_INDICES, WALL_QUAD_VERTICES};

/// Flat vertex/index buffers: `pos` is xyz per vertex, `uv` is empty or uv per vertex,
/// `idx` is three vertex indices per triangle.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    /// Pre-reserve capacity for `n_quads` unshared quads.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * WALL_QUAD_VERTICES * 3);
        self.idx.reserve(n_quads * WALL_QUAD_INDICES);
    }

    /// Appends a vertex and returns its index.
    #[inline]
    pub fn push_vertex(&mut self, p: Vec3) -> u32 {
        let i = self.vertex_count() as u32;
        self.pos.extend_from_slice(&[p.x, p.y, p.z]);
        i
    }

    #[inline]
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.idx.extend_from_slice(&[a, b, c]);
    }

    /// Appends the quad `top_a, top_b, bottom_a, bottom_b` as triangles
    /// (top_a, bottom_a, bottom_b) and (bottom_b, top_b, top_a).
    pub fn add_quad(&mut self, top_a: Vec3, top_b: Vec3, bottom_a: Vec3, bottom_b: Vec3) {
        let base = self.push_vertex(top_a);
        self.push_vertex(top_b);
        self.push_vertex(bottom_a);
        self.push_vertex(bottom_b);
        self.push_triangle(base, base + 2, base + 3);
        self.push_triangle(base + 3, base + 1, base);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    #[inline]
    pub fn position(&self, i: u32) -> Vec3 {
        let o = i as usize * 3;
        Vec3::new(self.pos[o], self.pos[o + 1], self.pos[o + 2])
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.pos
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.idx.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.positions())
    }

    /// Unnormalised face normal of triangle `t`, `(b - a) x (c - a)`.
    pub fn face_normal(&self, t: usize) -> Vec3 {
        let a = self.position(self.idx[t * 3]);
        let b = self.position(self.idx[t * 3 + 1]);
        let c = self.position(self.idx[t * 3 + 2]);
        (b - a).cross(c - a)
    }
}
