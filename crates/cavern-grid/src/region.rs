//! 4-connected region analysis over a [`TileGrid`].

use std::collections::VecDeque;

use crate::{Coord, Tile, TileGrid};

/// A maximal 4-connected group of same-type tiles, in discovery order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub tile: Tile,
    pub tiles: Vec<Coord>,
}

impl Region {
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True if any tile of the region lies on the grid's outer ring.
    pub fn touches_edge(&self, grid: &TileGrid) -> bool {
        self.tiles.iter().any(|c| grid.is_edge(c.x, c.y))
    }
}

/// All regions of `tile`, ordered by the x-outer, y-inner position of their first tile.
pub fn regions_of(grid: &TileGrid, tile: Tile) -> Vec<Region> {
    let mut visited = vec![false; grid.width * grid.height];
    let mut regions = Vec::new();
    for x in 0..grid.width {
        for y in 0..grid.height {
            if !visited[grid.idx(x, y)] && grid.get(x, y) == tile {
                regions.push(fill_from(grid, Coord::new(x, y), &mut visited));
            }
        }
    }
    log::trace!("{} {:?} region(s) in {}x{} grid", regions.len(), tile, grid.width, grid.height);
    regions
}

/// Region of the tile type found at `(x, y)`, or `None` when the start is out of range.
pub fn flood_fill(grid: &TileGrid, x: usize, y: usize) -> Option<Region> {
    if x >= grid.width || y >= grid.height {
        return None;
    }
    let mut visited = vec![false; grid.width * grid.height];
    Some(fill_from(grid, Coord::new(x, y), &mut visited))
}

// Breadth-first fill; marks tiles in `visited` as they are queued.
fn fill_from(grid: &TileGrid, start: Coord, visited: &mut [bool]) -> Region {
    let tile = grid.get(start.x, start.y);
    let mut tiles = Vec::new();
    let mut queue = VecDeque::new();
    visited[grid.idx(start.x, start.y)] = true;
    queue.push_back(start);

    while let Some(c) = queue.pop_front() {
        tiles.push(c);
        for (dx, dy) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
            let nx = c.x as i64 + dx;
            let ny = c.y as i64 + dy;
            if grid.get_signed(nx, ny) != Some(tile) {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            let i = grid.idx(nx, ny);
            if !visited[i] {
                visited[i] = true;
                queue.push_back(Coord::new(nx, ny));
            }
        }
    }

    Region { tile, tiles }
}
