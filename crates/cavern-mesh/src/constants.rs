//! Shared constants for cavern-mesh.

// Marching-squares configurations (4 corner bits)
pub(crate) const CONFIGURATION_COUNT: usize = 16;
pub(crate) const FULL_CONFIGURATION: u8 = 15;

// Corner bit weights
pub(crate) const TOP_LEFT_BIT: u8 = 8;
pub(crate) const TOP_RIGHT_BIT: u8 = 4;
pub(crate) const BOTTOM_RIGHT_BIT: u8 = 2;
pub(crate) const BOTTOM_LEFT_BIT: u8 = 1;

// Largest fan any case emits (two corners cut off a square)
pub(crate) const MAX_FAN_POINTS: usize = 6;

// Wall quads are unshared: 4 vertices, 2 triangles each
pub(crate) const WALL_QUAD_VERTICES: usize = 4;
pub(crate) const WALL_QUAD_INDICES: usize = 6;
