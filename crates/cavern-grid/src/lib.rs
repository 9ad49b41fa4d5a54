//! Binary occupancy grid, region analysis and border padding.
#![forbid(unsafe_code)]

use std::fmt;

pub mod region;

pub use region::{Region, flood_fill, regions_of};

/// One cell of the occupancy grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Open = 0,
    Wall = 1,
}

impl Tile {
    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Wall => '#',
        }
    }
}

/// Grid coordinate, `x` in `[0, width)`, `y` in `[0, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub width: usize,
    pub height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width * height],
        }
    }

    /// Builds a grid by evaluating `f(x, y)` in x-outer, y-inner order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Tile) -> Self {
        let mut grid = Self::filled(width, height, Tile::Open);
        for x in 0..width {
            for y in 0..height {
                let t = f(x, y);
                grid.set(x, y, t);
            }
        }
        grid
    }

    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Tile {
        self.tiles[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        let i = self.idx(x, y);
        self.tiles[i] = tile;
    }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Tile at a signed position, `None` outside the grid.
    #[inline]
    pub fn get_signed(&self, x: i64, y: i64) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.get(x as usize, y as usize))
        } else {
            None
        }
    }

    /// True for cells on the outermost ring.
    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x + 1 == self.width || y + 1 == self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|t| **t == tile).count()
    }

    /// Every outer-ring cell is `Wall`. Vacuously true for an empty grid.
    pub fn edge_is_solid(&self) -> bool {
        if self.is_empty() {
            return true;
        }
        for x in 0..self.width {
            if !self.get(x, 0).is_wall() || !self.get(x, self.height - 1).is_wall() {
                return false;
            }
        }
        for y in 0..self.height {
            if !self.get(0, y).is_wall() || !self.get(self.width - 1, y).is_wall() {
                return false;
            }
        }
        true
    }

    /// Copy of the grid wrapped in `border` rings of `Wall`.
    pub fn padded(&self, border: usize) -> TileGrid {
        let w = self.width + border * 2;
        let h = self.height + border * 2;
        let out = TileGrid::from_fn(w, h, |x, y| {
            let inside = x >= border
                && x < self.width + border
                && y >= border
                && y < self.height + border;
            if inside {
                self.get(x - border, y - border)
            } else {
                Tile::Wall
            }
        });
        log::trace!(
            "padded {}x{} grid by {} -> {}x{}",
            self.width,
            self.height,
            border,
            w,
            h
        );
        out
    }

    /// Renders one text row per grid row, highest `y` first.
    pub fn to_ascii(&self) -> String {
        let mut s = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                s.push(self.get(x, y).glyph());
            }
            s.push('\n');
        }
        s
    }

    /// Parses the format written by [`TileGrid::to_ascii`]. Blank lines are ignored;
    /// returns `None` on ragged rows or unknown glyphs.
    pub fn from_ascii(text: &str) -> Option<TileGrid> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = TileGrid::filled(width, height, Tile::Open);
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return None;
            }
            let y = height - 1 - row;
            for (x, c) in line.chars().enumerate() {
                let tile = match c {
                    '#' => Tile::Wall,
                    '.' => Tile::Open,
                    _ => return None,
                };
                grid.set(x, y, tile);
            }
        }
        Some(grid)
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}
