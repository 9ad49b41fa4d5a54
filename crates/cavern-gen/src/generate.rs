use cavern_grid::{Tile, TileGrid, regions_of};
use rand::Rng;

use crate::config::CaveConfig;
use crate::error::ConfigError;
use crate::seed::{CaveRng, rng_for_seed};
use crate::timings::{Stage, StageTimings};

/// Cellular-automaton iterations applied after the random fill.
pub const SMOOTHING_PASSES: usize = 5;

// A tile with more wall neighbours than this becomes wall, fewer becomes open.
const NEIGHBOUR_PIVOT: u8 = 4;

// Validated grid parameters (snapshot of the config used by the passes)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridParams {
    pub width: usize,
    pub height: usize,
    pub fill_percent: i32,
    pub wall_threshold: usize,
    pub room_threshold: usize,
}

impl GridParams {
    pub fn new(
        width: i32,
        height: i32,
        fill_percent: i32,
        wall_threshold: u32,
        room_threshold: u32,
    ) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width: width as usize,
            height: height as usize,
            fill_percent,
            wall_threshold: wall_threshold as usize,
            room_threshold: room_threshold as usize,
        })
    }

    pub fn from_config(cfg: &CaveConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Self::new(
            cfg.width,
            cfg.height,
            cfg.fill_percent,
            cfg.wall_threshold,
            cfg.room_threshold,
        )
    }
}

/// What the region cleanup pass changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub wall_regions: usize,
    pub wall_regions_removed: usize,
    pub room_regions: usize,
    pub room_regions_filled: usize,
    pub tiles_opened: usize,
    pub tiles_filled: usize,
}

/// Generates a cleaned cave grid. Same arguments always give the same grid.
pub fn generate(
    width: i32,
    height: i32,
    seed: &str,
    fill_percent: i32,
    wall_threshold: u32,
    room_threshold: u32,
) -> Result<TileGrid, ConfigError> {
    let params = GridParams::new(width, height, fill_percent, wall_threshold, room_threshold)?;
    let mut timings = StageTimings::default();
    Ok(generate_grid(&params, seed, &mut timings))
}

pub fn generate_grid(params: &GridParams, seed: &str, timings: &mut StageTimings) -> TileGrid {
    let mut rng = rng_for_seed(seed);
    let grid = timings.time(Stage::Fill, || {
        random_fill(params.width, params.height, params.fill_percent, &mut rng)
    });
    let mut grid = timings.time(Stage::Smooth, || {
        let mut g = grid;
        for _ in 0..SMOOTHING_PASSES {
            g = smooth_pass(&g);
        }
        g
    });
    let report = timings.time(Stage::Cleanup, || {
        cull_small_regions(&mut grid, params.wall_threshold, params.room_threshold)
    });
    log::debug!(
        "grid {}x{} seed={:?}: removed {}/{} wall regions ({} tiles), filled {}/{} rooms ({} tiles)",
        params.width,
        params.height,
        seed,
        report.wall_regions_removed,
        report.wall_regions,
        report.tiles_opened,
        report.room_regions_filled,
        report.room_regions,
        report.tiles_filled
    );
    grid
}

/// Outer ring is wall; each interior tile is wall when a `0..100` draw is below `fill_percent`.
/// Draws happen in x-outer, y-inner order and border tiles consume none.
pub fn random_fill(width: usize, height: usize, fill_percent: i32, rng: &mut CaveRng) -> TileGrid {
    TileGrid::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x + 1 == width || y + 1 == height {
            Tile::Wall
        } else if rng.random_range(0..100) < fill_percent {
            Tile::Wall
        } else {
            Tile::Open
        }
    })
}

/// Number of wall tiles among the 8 neighbours; positions off the grid count as wall.
pub fn wall_neighbour_count(grid: &TileGrid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for dx in -1i64..=1 {
        for dy in -1i64..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            match grid.get_signed(x as i64 + dx, y as i64 + dy) {
                Some(Tile::Open) => {}
                Some(Tile::Wall) | None => count += 1,
            }
        }
    }
    count
}

/// One automaton step. Reads only `grid`, so the result is independent of scan order.
pub fn smooth_pass(grid: &TileGrid) -> TileGrid {
    let mut next = grid.clone();
    for x in 0..grid.width {
        for y in 0..grid.height {
            let n = wall_neighbour_count(grid, x, y);
            if n > NEIGHBOUR_PIVOT {
                next.set(x, y, Tile::Wall);
            } else if n < NEIGHBOUR_PIVOT {
                next.set(x, y, Tile::Open);
            }
        }
    }
    next
}

/// Opens wall regions smaller than `wall_threshold`, then fills rooms smaller than
/// `room_threshold`. Wall regions touching the outer ring are never opened.
pub fn cull_small_regions(
    grid: &mut TileGrid,
    wall_threshold: usize,
    room_threshold: usize,
) -> CleanupReport {
    let mut report = CleanupReport::default();

    let walls = regions_of(grid, Tile::Wall);
    report.wall_regions = walls.len();
    for region in &walls {
        if region.len() < wall_threshold && !region.touches_edge(grid) {
            for c in &region.tiles {
                grid.set(c.x, c.y, Tile::Open);
            }
            report.wall_regions_removed += 1;
            report.tiles_opened += region.len();
        }
    }

    let rooms = regions_of(grid, Tile::Open);
    report.room_regions = rooms.len();
    for region in &rooms {
        if region.len() < room_threshold {
            for c in &region.tiles {
                grid.set(c.x, c.y, Tile::Wall);
            }
            report.room_regions_filled += 1;
            report.tiles_filled += region.len();
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> TileGrid {
        TileGrid::from_ascii(text).unwrap()
    }

    #[test]
    fn off_grid_neighbours_count_as_wall() {
        let g = TileGrid::filled(3, 3, Tile::Open);
        assert_eq!(wall_neighbour_count(&g, 0, 0), 5);
        assert_eq!(wall_neighbour_count(&g, 1, 0), 3);
        assert_eq!(wall_neighbour_count(&g, 1, 1), 0);
    }

    #[test]
    fn smoothing_keeps_ties() {
        // (2,2) has exactly four wall neighbours and must keep its state.
        let g = grid(
            "
            .........
            .##......
            ...#.....
            ..#......
            .........
            ",
        );
        assert_eq!(wall_neighbour_count(&g, 2, 2), 4);
        assert_eq!(g.get(2, 2), Tile::Open);
        assert_eq!(smooth_pass(&g).get(2, 2), Tile::Open);

        let mut walled = g.clone();
        walled.set(2, 2, Tile::Wall);
        assert_eq!(smooth_pass(&walled).get(2, 2), Tile::Wall);
    }

    #[test]
    fn smoothing_reads_only_the_previous_pass() {
        let mut rng = rng_for_seed("double-buffer");
        let g = random_fill(12, 9, 50, &mut rng);
        let next = smooth_pass(&g);
        for x in 0..g.width {
            for y in 0..g.height {
                let n = wall_neighbour_count(&g, x, y);
                let expect = match n {
                    n if n > 4 => Tile::Wall,
                    n if n < 4 => Tile::Open,
                    _ => g.get(x, y),
                };
                assert_eq!(next.get(x, y), expect, "({x},{y})");
            }
        }
    }

    #[test]
    fn small_wall_islands_open_and_small_rooms_fill() {
        let mut g = grid(
            "
            ##########
            #........#
            #.#......#
            #........#
            ##########
            #..#######
            ##########
            ",
        );
        let report = cull_small_regions(&mut g, 2, 3);
        assert_eq!(report.wall_regions_removed, 1);
        assert_eq!(report.tiles_opened, 1);
        assert_eq!(report.room_regions_filled, 1);
        assert_eq!(report.tiles_filled, 2);
        assert_eq!(g.get(2, 4), Tile::Open);
        assert_eq!(g.get(1, 1), Tile::Wall);
        assert_eq!(g.get(2, 1), Tile::Wall);
        assert!(g.edge_is_solid());
    }

    #[test]
    fn edge_anchored_walls_survive_any_threshold() {
        let mut g = grid(
            "
            ####
            #..#
            ####
            ",
        );
        cull_small_regions(&mut g, 1000, 0);
        assert!(g.edge_is_solid());
        assert_eq!(g.count(Tile::Open), 2);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            generate(0, 10, "s", 45, 0, 0),
            Err(ConfigError::InvalidDimensions { width: 0, height: 10 })
        );
        assert!(generate(10, -1, "s", 45, 0, 0).is_err());
    }
}
