//! Procedural 2D caves: cellular-automaton grid, marching-squares floor and extruded walls.
#![forbid(unsafe_code)]

use thiserror::Error;

pub mod export;

pub use cavern_gen::{CaveConfig, ConfigError, Stage, StageTimings, load_config_from_path};
pub use cavern_grid::{Tile, TileGrid};
pub use cavern_mesh::{FloorMesh, MeshBuild, MeshError, Outline};

use cavern_gen::{GridParams, generate_grid, resolve_seed};
use cavern_mesh::{apply_floor_uvs, build_floor, extrude_walls, trace_outlines};

#[derive(Debug, Error)]
pub enum CaveError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("mesh invariant violated: {0}")]
    Mesh(#[from] MeshError),
}

/// Everything one generation run produces.
#[derive(Clone, Debug)]
pub struct CaveBuild {
    /// Seed actually used; the time-derived one when the config asks for a random seed.
    pub seed: String,
    /// Cleaned grid after border padding.
    pub grid: TileGrid,
    pub floor: FloorMesh,
    pub outlines: Vec<Outline>,
    pub walls: MeshBuild,
    pub timings: StageTimings,
}

/// Runs the whole pipeline for one configuration. Each call owns all of its state.
pub fn build_cave(cfg: &CaveConfig) -> Result<CaveBuild, CaveError> {
    let params = GridParams::from_config(cfg)?;
    let seed = resolve_seed(&cfg.seed, cfg.use_random_seed);
    let mut timings = StageTimings::default();

    let grid = generate_grid(&params, &seed, &mut timings);
    let grid = timings.time(Stage::Pad, || grid.padded(cfg.border_size));
    let floor = timings.time(Stage::Floor, || {
        let mut floor = build_floor(&grid, cfg.square_size);
        apply_floor_uvs(
            &mut floor.mesh,
            grid.width,
            grid.height,
            cfg.square_size,
            cfg.uv_tiling,
        );
        floor
    });
    let outlines = timings.time(Stage::Outline, || {
        trace_outlines(floor.vertex_count(), &floor.mesh.idx, &floor.interior)
    })?;
    let walls = timings.time(Stage::Walls, || {
        extrude_walls(&outlines, &floor.mesh, cfg.wall_height)
    })?;

    log::info!(
        "cave {}x{} (seed {:?}): {} floor triangles, {} outline(s), {} wall triangles in {:.2} ms",
        grid.width,
        grid.height,
        seed,
        floor.triangle_count(),
        outlines.len(),
        walls.triangle_count(),
        timings.total().as_secs_f64() * 1000.0
    );
    timings.log_summary();

    Ok(CaveBuild {
        seed,
        grid,
        floor,
        outlines,
        walls,
        timings,
    })
}
