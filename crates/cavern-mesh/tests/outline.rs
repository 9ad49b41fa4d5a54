use std::collections::HashSet;

use cavern_gen::generate;
use cavern_mesh::{MeshError, build_floor, extrude_walls, trace_outlines};

#[test]
fn open_room_has_one_closed_outline() {
    let grid = generate(10, 10, "room", 0, 0, 0).unwrap().padded(5);
    let floor = build_floor(&grid, 1.0);
    let outlines = trace_outlines(floor.vertex_count(), &floor.mesh.idx, &floor.interior).unwrap();
    assert_eq!(outlines.len(), 1);
    let o = &outlines[0];
    assert_eq!(o.len(), 33);
    assert_eq!(o.first(), o.last());
    let distinct: HashSet<u32> = o.iter().copied().collect();
    assert_eq!(distinct.len(), 32);
    assert!(o.iter().all(|&v| !floor.interior[v as usize]));
}

#[test]
fn solid_slab_has_no_outlines() {
    let grid = generate(5, 5, "slab", 100, 0, 0).unwrap().padded(5);
    let floor = build_floor(&grid, 1.0);
    assert_eq!(floor.triangle_count(), 392);
    let outlines = trace_outlines(floor.vertex_count(), &floor.mesh.idx, &floor.interior).unwrap();
    assert!(outlines.is_empty());
    let walls = extrude_walls(&outlines, &floor.mesh, 5.0).unwrap();
    assert!(walls.is_empty());
}

#[test]
fn vertex_belongs_to_at_most_one_outline() {
    let grid = generate(48, 36, "many-rooms", 47, 20, 20).unwrap().padded(5);
    let floor = build_floor(&grid, 1.0);
    let outlines = trace_outlines(floor.vertex_count(), &floor.mesh.idx, &floor.interior).unwrap();
    assert!(!outlines.is_empty());
    let mut seen = HashSet::new();
    for o in &outlines {
        assert_eq!(o.first(), o.last());
        for &v in &o[..o.len() - 1] {
            assert!(seen.insert(v), "vertex {v} traced twice");
        }
    }
}

#[test]
fn walls_hang_below_floor_and_face_the_room() {
    let grid = generate(10, 10, "room", 0, 0, 0).unwrap().padded(5);
    let floor = build_floor(&grid, 1.0);
    let outlines = trace_outlines(floor.vertex_count(), &floor.mesh.idx, &floor.interior).unwrap();
    let walls = extrude_walls(&outlines, &floor.mesh, 5.0).unwrap();
    assert_eq!(walls.vertex_count(), 32 * 4);
    assert_eq!(walls.triangle_count(), 32 * 2);

    let b = walls.bounds().unwrap();
    assert_eq!(b.max.y, 0.0);
    assert_eq!(b.min.y, -5.0);

    // The room is centred on the origin, so inward means towards it.
    for t in 0..walls.triangle_count() {
        let [a, bi, c] = [walls.idx[t * 3], walls.idx[t * 3 + 1], walls.idx[t * 3 + 2]];
        let centre = (walls.position(a) + walls.position(bi) + walls.position(c)) * (1.0 / 3.0);
        let normal = walls.face_normal(t);
        assert!(normal.dot(-centre) > 0.0, "wall triangle {t} faces away");
    }
}

#[test]
fn out_of_range_index_is_reported() {
    let err = trace_outlines(2, &[0, 1, 2], &[]).unwrap_err();
    assert_eq!(
        err,
        MeshError::VertexOutOfRange {
            index: 2,
            vertex_count: 2
        }
    );
}

#[test]
fn unpadded_caves_keep_only_real_loops() {
    for i in 0..60 {
        let seed = format!("bare{i}");
        let grid = generate(24, 18, &seed, 47, 0, 0).unwrap().padded(0);
        let floor = build_floor(&grid, 1.0);
        let outlines =
            trace_outlines(floor.vertex_count(), &floor.mesh.idx, &floor.interior).unwrap();
        let mut segments = 0;
        for o in &outlines {
            assert_eq!(o.first(), o.last(), "seed {seed}");
            let distinct: HashSet<u32> = o.iter().copied().collect();
            assert!(distinct.len() >= 3, "seed {seed}: outline {o:?}");
            segments += o.len() - 1;
        }
        let walls = extrude_walls(&outlines, &floor.mesh, 2.0).unwrap();
        assert_eq!(walls.triangle_count(), segments * 2, "seed {seed}");
    }
}
