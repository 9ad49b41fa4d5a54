//! Control-node lattice for marching squares.
//!
//! Every tile contributes one corner node plus the edge nodes half a square to
//! its right and above it. Cells address nodes by [`NodeRef`], so neighbouring
//! cells that share an edge share the node and its output vertex.

use cavern_geom::Vec3;
use cavern_grid::TileGrid;

use crate::cases::{CellPoint, configuration};
use crate::mesh_build::MeshBuild;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Corner { x: usize, y: usize },
    Right { x: usize, y: usize },
    Above { x: usize, y: usize },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CornerNode {
    pub position: Vec3,
    pub active: bool,
    pub vertex: Option<u32>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeNode {
    pub position: Vec3,
    pub vertex: Option<u32>,
}

/// One marching square: the 2x2 corners whose bottom-left corner is `(x, y)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub configuration: u8,
}

impl Cell {
    pub fn node(&self, point: CellPoint) -> NodeRef {
        let (x, y) = (self.x, self.y);
        match point {
            CellPoint::TopLeft => NodeRef::Corner { x, y: y + 1 },
            CellPoint::TopRight => NodeRef::Corner { x: x + 1, y: y + 1 },
            CellPoint::BottomRight => NodeRef::Corner { x: x + 1, y },
            CellPoint::BottomLeft => NodeRef::Corner { x, y },
            CellPoint::CentreTop => NodeRef::Right { x, y: y + 1 },
            CellPoint::CentreRight => NodeRef::Above { x: x + 1, y },
            CellPoint::CentreBottom => NodeRef::Right { x, y },
            CellPoint::CentreLeft => NodeRef::Above { x, y },
        }
    }
}

pub struct Lattice {
    pub width: usize,
    pub height: usize,
    corners: Vec<CornerNode>,
    right: Vec<EdgeNode>,
    above: Vec<EdgeNode>,
}

impl Lattice {
    /// Lays out nodes so the grid is centred on the origin in the XZ plane.
    /// A corner is active when its tile is wall.
    pub fn new(grid: &TileGrid, square_size: f32) -> Self {
        let (w, h) = (grid.width, grid.height);
        let map_w = w as f32 * square_size;
        let map_h = h as f32 * square_size;
        let half = square_size / 2.0;
        let mut corners = Vec::with_capacity(w * h);
        let mut right = Vec::with_capacity(w * h);
        let mut above = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                let position = Vec3::new(
                    -map_w / 2.0 + x as f32 * square_size + half,
                    0.0,
                    -map_h / 2.0 + y as f32 * square_size + half,
                );
                corners.push(CornerNode {
                    position,
                    active: grid.get(x, y).is_wall(),
                    vertex: None,
                });
                right.push(EdgeNode {
                    position: position + Vec3::RIGHT * half,
                    vertex: None,
                });
                above.push(EdgeNode {
                    position: position + Vec3::FORWARD * half,
                    vertex: None,
                });
            }
        }
        Self {
            width: w,
            height: h,
            corners,
            right,
            above,
        }
    }

    #[inline]
    fn slot(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn corner(&self, x: usize, y: usize) -> &CornerNode {
        &self.corners[self.slot(x, y)]
    }

    pub fn position(&self, node: NodeRef) -> Vec3 {
        match node {
            NodeRef::Corner { x, y } => self.corners[self.slot(x, y)].position,
            NodeRef::Right { x, y } => self.right[self.slot(x, y)].position,
            NodeRef::Above { x, y } => self.above[self.slot(x, y)].position,
        }
    }

    pub fn vertex(&self, node: NodeRef) -> Option<u32> {
        match node {
            NodeRef::Corner { x, y } => self.corners[self.slot(x, y)].vertex,
            NodeRef::Right { x, y } => self.right[self.slot(x, y)].vertex,
            NodeRef::Above { x, y } => self.above[self.slot(x, y)].vertex,
        }
    }

    /// Vertex index of `node`, appending its position to `mesh` on first use.
    pub fn vertex_or_insert(&mut self, node: NodeRef, mesh: &mut MeshBuild) -> u32 {
        let (slot, position) = match node {
            NodeRef::Corner { x, y } => {
                let i = self.slot(x, y);
                let position = self.corners[i].position;
                (&mut self.corners[i].vertex, position)
            }
            NodeRef::Right { x, y } => {
                let i = self.slot(x, y);
                let position = self.right[i].position;
                (&mut self.right[i].vertex, position)
            }
            NodeRef::Above { x, y } => {
                let i = self.slot(x, y);
                let position = self.above[i].position;
                (&mut self.above[i].vertex, position)
            }
        };
        *slot.get_or_insert_with(|| mesh.push_vertex(position))
    }

    /// Number of cells along x and y; zero when the grid is narrower than 2.
    #[inline]
    pub fn cell_dims(&self) -> (usize, usize) {
        (self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        let c = configuration(
            self.corner(x, y + 1).active,
            self.corner(x + 1, y + 1).active,
            self.corner(x + 1, y).active,
            self.corner(x, y).active,
        );
        Cell {
            x,
            y,
            configuration: c,
        }
    }
}
