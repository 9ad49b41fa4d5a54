use cavern_geom::Vec3;

use crate::error::MeshError;
use crate::mesh_build::MeshBuild;
use crate::outline::{MIN_OUTLINE_VERTICES, Outline};

/// Drops a vertical quad strip of depth `wall_height` below every outline segment.
/// Quads do not share vertices; outlines closing fewer than three distinct points add nothing.
pub fn extrude_walls(
    outlines: &[Outline],
    floor: &MeshBuild,
    wall_height: f32,
) -> Result<MeshBuild, MeshError> {
    let vertex_count = floor.vertex_count();
    let segments: usize = outlines
        .iter()
        .filter(|o| o.len() > MIN_OUTLINE_VERTICES)
        .map(|o| o.len() - 1)
        .sum();
    let mut walls = MeshBuild::default();
    walls.reserve_quads(segments);

    let drop = Vec3::UP * wall_height;
    for outline in outlines.iter().filter(|o| o.len() > MIN_OUTLINE_VERTICES) {
        if let Some(&index) = outline.iter().find(|&&v| v as usize >= vertex_count) {
            return Err(MeshError::VertexOutOfRange {
                index,
                vertex_count,
            });
        }
        for pair in outline.windows(2) {
            let a = floor.position(pair[0]);
            let b = floor.position(pair[1]);
            walls.add_quad(a, b, a - drop, b - drop);
        }
    }

    log::debug!(
        "walls: {} quads from {} outline(s), height {}",
        walls.triangle_count() / 2,
        outlines.len(),
        wall_height
    );
    Ok(walls)
}
