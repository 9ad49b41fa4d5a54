use cavern::{CaveConfig, CaveError, ConfigError, Tile, build_cave};

fn config(width: i32, height: i32, seed: &str) -> CaveConfig {
    CaveConfig {
        width,
        height,
        seed: seed.into(),
        ..CaveConfig::default()
    }
}

#[test]
fn same_config_same_cave() {
    let cfg = config(48, 36, "twin");
    let a = build_cave(&cfg).unwrap();
    let b = build_cave(&cfg).unwrap();
    assert_eq!(a.seed, b.seed);
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.floor, b.floor);
    assert_eq!(a.outlines, b.outlines);
    assert_eq!(a.walls, b.walls);
}

#[test]
fn different_seeds_differ() {
    let a = build_cave(&config(48, 36, "north")).unwrap();
    let b = build_cave(&config(48, 36, "south")).unwrap();
    assert_ne!(a.grid, b.grid);
}

#[test]
fn open_room_scenario() {
    let cfg = CaveConfig {
        fill_percent: 0,
        wall_threshold: 0,
        room_threshold: 0,
        ..config(10, 10, "room")
    };
    let build = build_cave(&cfg).unwrap();
    assert_eq!((build.grid.width, build.grid.height), (20, 20));
    assert_eq!(build.grid.count(Tile::Open), 60);
    assert!(build.grid.edge_is_solid());
    assert_eq!(build.floor.vertex_count(), 372);
    assert_eq!(build.floor.triangle_count(), 636);
    assert_eq!(build.outlines.len(), 1);
    assert_eq!(build.walls.triangle_count(), 64);
}

#[test]
fn solid_scenario() {
    let cfg = CaveConfig {
        fill_percent: 100,
        wall_threshold: 0,
        room_threshold: 0,
        ..config(5, 5, "slab")
    };
    let build = build_cave(&cfg).unwrap();
    assert_eq!(build.grid.count(Tile::Open), 0);
    assert_eq!(build.floor.triangle_count(), 392);
    assert!(build.outlines.is_empty());
    assert!(build.walls.is_empty());
}

#[test]
fn single_tile_grid_is_valid() {
    let build = build_cave(&config(1, 1, "dot")).unwrap();
    assert_eq!((build.grid.width, build.grid.height), (11, 11));
    assert!(build.outlines.is_empty());
}

#[test]
fn zero_border_still_meshes() {
    let cfg = CaveConfig {
        border_size: 0,
        ..config(30, 20, "bare")
    };
    let build = build_cave(&cfg).unwrap();
    assert_eq!((build.grid.width, build.grid.height), (30, 20));
    assert_eq!(build.floor.mesh.uv.len(), build.floor.vertex_count() * 2);
    for o in &build.outlines {
        assert_eq!(o.first(), o.last());
        assert!(o.len() >= 4, "degenerate outline {o:?}");
    }
}

#[test]
fn walls_hang_from_floor_to_wall_height() {
    let cfg = CaveConfig {
        wall_height: 3.5,
        ..config(40, 30, "height")
    };
    let build = build_cave(&cfg).unwrap();
    if let Some(b) = build.walls.bounds() {
        assert_eq!(b.max.y, 0.0);
        assert_eq!(b.min.y, -3.5);
    }
}

#[test]
fn config_errors_surface_unchanged() {
    let err = build_cave(&config(-4, 10, "x")).unwrap_err();
    assert!(matches!(
        err,
        CaveError::Config(ConfigError::InvalidDimensions { width: -4, height: 10 })
    ));
    let err = build_cave(&config(10, 10, "")).unwrap_err();
    assert!(matches!(err, CaveError::Config(ConfigError::EmptySeed)));
    let huge_border = CaveConfig {
        border_size: usize::MAX / 2,
        ..config(10, 10, "x")
    };
    assert!(matches!(
        build_cave(&huge_border),
        Err(CaveError::Config(ConfigError::GridTooLarge { .. }))
    ));
    let bad_height = CaveConfig {
        wall_height: f32::NAN,
        ..config(10, 10, "x")
    };
    assert!(matches!(
        build_cave(&bad_height),
        Err(CaveError::Config(ConfigError::InvalidWallHeight(_)))
    ));
}
