//! Boundary-outline tracing over the floor triangle soup.
//!
//! An edge is on the boundary when exactly one triangle uses it. Starting from
//! the lowest unchecked vertex that has such an edge, the tracer keeps stepping
//! to the first unchecked boundary neighbour until it runs out, then closes the
//! loop by repeating the start vertex.

use crate::error::MeshError;

/// Ordered vertex indices of a closed polyline; the first index is repeated at the end.
pub type Outline = Vec<u32>;

/// Fewest distinct vertices a kept outline has.
pub const MIN_OUTLINE_VERTICES: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: u32,
    pub b: u32,
    pub c: u32,
}

impl Triangle {
    #[inline]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn vertices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn contains(&self, v: u32) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// Triangles incident to each vertex, in index-buffer order.
#[derive(Clone, Debug, Default)]
pub struct TriangleAdjacency {
    by_vertex: Vec<Vec<Triangle>>,
}

impl TriangleAdjacency {
    pub fn build(vertex_count: usize, idx: &[u32]) -> Result<Self, MeshError> {
        if idx.len() % 3 != 0 {
            return Err(MeshError::RaggedIndexBuffer(idx.len()));
        }
        if let Some(&index) = idx.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::VertexOutOfRange {
                index,
                vertex_count,
            });
        }
        let mut by_vertex = vec![Vec::new(); vertex_count];
        for t in idx.chunks_exact(3) {
            let tri = Triangle::new(t[0], t[1], t[2]);
            for v in tri.vertices() {
                by_vertex[v as usize].push(tri);
            }
        }
        Ok(Self { by_vertex })
    }

    #[inline]
    pub fn triangles_of(&self, v: u32) -> &[Triangle] {
        &self.by_vertex[v as usize]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.by_vertex.len()
    }

    /// True when exactly one triangle holds the edge `(a, b)`.
    pub fn is_outline_edge(&self, a: u32, b: u32) -> bool {
        let mut shared = 0;
        for t in self.triangles_of(a) {
            if t.contains(b) {
                shared += 1;
                if shared > 1 {
                    return false;
                }
            }
        }
        shared == 1
    }

    // First unchecked vertex joined to `v` by a boundary edge.
    fn next_outline_vertex(&self, v: u32, checked: &[bool]) -> Option<u32> {
        for t in self.triangles_of(v) {
            for b in t.vertices() {
                if b != v && !checked[b as usize] && self.is_outline_edge(v, b) {
                    return Some(b);
                }
            }
        }
        None
    }
}

/// Traces every closed outline of the mesh. Vertices flagged in `interior` are
/// treated as already visited; a shorter `interior` leaves the rest unflagged.
/// Traces that stall before reaching three distinct vertices are discarded.
pub fn trace_outlines(
    vertex_count: usize,
    idx: &[u32],
    interior: &[bool],
) -> Result<Vec<Outline>, MeshError> {
    let adjacency = TriangleAdjacency::build(vertex_count, idx)?;
    let mut checked = vec![false; vertex_count];
    for (c, &i) in checked.iter_mut().zip(interior) {
        *c = i;
    }

    let mut outlines = Vec::new();
    for start in 0..vertex_count as u32 {
        if checked[start as usize] {
            continue;
        }
        let Some(mut next) = adjacency.next_outline_vertex(start, &checked) else {
            continue;
        };
        checked[start as usize] = true;
        let mut outline = vec![start];
        loop {
            outline.push(next);
            checked[next as usize] = true;
            match adjacency.next_outline_vertex(next, &checked) {
                Some(n) => next = n,
                None => break,
            }
        }
        if outline.len() < MIN_OUTLINE_VERTICES {
            log::trace!("dropping degenerate trace {:?}", outline);
            continue;
        }
        outline.push(start);
        log::trace!("outline from vertex {}: {} points", start, outline.len());
        outlines.push(outline);
    }

    log::debug!("{} outline(s) over {} vertices", outlines.len(), vertex_count);
    Ok(outlines)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two triangles forming a square 0-1-2-3 with diagonal 0-2.
    const SQUARE: [u32; 6] = [0, 1, 2, 0, 2, 3];

    #[test]
    fn shared_diagonal_is_not_a_boundary() {
        let adj = TriangleAdjacency::build(4, &SQUARE).unwrap();
        assert!(!adj.is_outline_edge(0, 2));
        assert!(adj.is_outline_edge(0, 1));
        assert!(adj.is_outline_edge(2, 3));
        assert!(!adj.is_outline_edge(1, 3));
    }

    #[test]
    fn square_traces_one_closed_loop() {
        let outlines = trace_outlines(4, &SQUARE, &[]).unwrap();
        assert_eq!(outlines, vec![vec![0, 1, 2, 3, 0]]);
    }

    #[test]
    fn interior_vertices_never_start_an_outline() {
        let outlines = trace_outlines(4, &SQUARE, &[true; 4]).unwrap();
        assert!(outlines.is_empty());
    }

    #[test]
    fn stalled_two_vertex_trace_is_dropped() {
        // Vertex 2 is interior, so the walk 0 -> 1 has nowhere to go.
        let outlines = trace_outlines(3, &[0, 1, 2], &[false, false, true]).unwrap();
        assert!(outlines.is_empty());
    }

    #[test]
    fn bad_buffers_are_rejected() {
        assert_eq!(
            trace_outlines(3, &[0, 1], &[]).unwrap_err(),
            MeshError::RaggedIndexBuffer(2)
        );
        assert_eq!(
            trace_outlines(3, &[0, 1, 3], &[]).unwrap_err(),
            MeshError::VertexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn isolated_vertices_are_skipped() {
        assert!(trace_outlines(5, &[], &[]).unwrap().is_empty());
    }
}
