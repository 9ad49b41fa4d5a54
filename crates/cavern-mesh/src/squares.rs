//! Marching-squares floor mesher.

use cavern_geom::inverse_lerp;
use cavern_grid::TileGrid;

use crate::cases::{case_points, fan_triangles};
use crate::constants::{CONFIGURATION_COUNT, FULL_CONFIGURATION, MAX_FAN_POINTS};
use crate::lattice::Lattice;
use crate::mesh_build::MeshBuild;

/// Floor geometry plus the per-vertex flags the outline tracer needs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FloorMesh {
    pub mesh: MeshBuild,
    /// `true` for corner vertices of fully solid cells; these never start or join an outline.
    pub interior: Vec<bool>,
    /// Number of cells per configuration code.
    pub configurations: [usize; CONFIGURATION_COUNT],
}

impl FloorMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }
}

/// Triangulates every cell of `grid` with shared vertices at shared nodes.
/// Grids narrower than two tiles in either direction have no cells and give an empty mesh.
pub fn build_floor(grid: &TileGrid, square_size: f32) -> FloorMesh {
    let mut lattice = Lattice::new(grid, square_size);
    let (cw, ch) = lattice.cell_dims();
    let mut mesh = MeshBuild::default();
    let mut configurations = [0usize; CONFIGURATION_COUNT];
    let mut interior_marks: Vec<u32> = Vec::new();

    for x in 0..cw {
        for y in 0..ch {
            let cell = lattice.cell(x, y);
            configurations[cell.configuration as usize] += 1;
            let points = case_points(cell.configuration);
            if points.is_empty() {
                continue;
            }
            let mut verts = [0u32; MAX_FAN_POINTS];
            for (slot, p) in points.iter().enumerate() {
                verts[slot] = lattice.vertex_or_insert(cell.node(*p), &mut mesh);
            }
            for [a, b, c] in fan_triangles(points.len()) {
                mesh.push_triangle(verts[a], verts[b], verts[c]);
            }
            if cell.configuration == FULL_CONFIGURATION {
                interior_marks.extend_from_slice(&verts[..points.len()]);
            }
        }
    }

    let mut interior = vec![false; mesh.vertex_count()];
    for v in interior_marks {
        interior[v as usize] = true;
    }

    log::debug!(
        "floor {}x{} cells: {} vertices, {} triangles, {} solid, {} empty",
        cw,
        ch,
        mesh.vertex_count(),
        mesh.triangle_count(),
        configurations[FULL_CONFIGURATION as usize],
        configurations[0]
    );

    FloorMesh {
        mesh,
        interior,
        configurations,
    }
}

/// Planar UVs over the full map extent, repeated `tiling` times across each axis.
pub fn apply_floor_uvs(
    mesh: &mut MeshBuild,
    width: usize,
    height: usize,
    square_size: f32,
    tiling: f32,
) {
    let half_w = width as f32 * square_size / 2.0;
    let half_h = height as f32 * square_size / 2.0;
    let uv: Vec<f32> = mesh
        .positions()
        .flat_map(|p| {
            [
                inverse_lerp(-half_w, half_w, p.x) * tiling,
                inverse_lerp(-half_h, half_h, p.z) * tiling,
            ]
        })
        .collect();
    mesh.uv = uv;
}
