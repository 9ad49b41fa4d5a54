//! Cave meshing: marching-squares floor, boundary outlines and extruded walls.
#![forbid(unsafe_code)]

pub mod cases;
mod constants;
pub mod error;
pub mod lattice;
pub mod mesh_build;
pub mod outline;
pub mod squares;
pub mod walls;

pub use cases::{CASES, CellPoint, case_points, configuration, fan_triangles};
pub use error::MeshError;
pub use lattice::{Cell, Lattice, NodeRef};
pub use mesh_build::MeshBuild;
pub use outline::{MIN_OUTLINE_VERTICES, Outline, Triangle, TriangleAdjacency, trace_outlines};
pub use squares::{FloorMesh, apply_floor_uvs, build_floor};
pub use walls::extrude_walls;
