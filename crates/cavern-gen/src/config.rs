use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Width of the solid padding added around the cleaned grid before meshing.
pub const DEFAULT_BORDER_SIZE: usize = 5;

/// Largest padded grid, in tiles, a config may request.
pub const MAX_PADDED_TILES: usize = 1 << 28;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CaveConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_seed")]
    pub seed: String,
    #[serde(default)]
    pub use_random_seed: bool,
    #[serde(default = "default_fill_percent")]
    pub fill_percent: i32,
    #[serde(default = "default_threshold")]
    pub wall_threshold: u32,
    #[serde(default = "default_threshold")]
    pub room_threshold: u32,
    #[serde(default = "default_square_size")]
    pub square_size: f32,
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    #[serde(default = "default_border_size")]
    pub border_size: usize,
    #[serde(default = "default_uv_tiling")]
    pub uv_tiling: f32,
}

fn default_width() -> i32 {
    64
}
fn default_height() -> i32 {
    48
}
fn default_seed() -> String {
    "cavern".into()
}
fn default_fill_percent() -> i32 {
    47
}
fn default_threshold() -> u32 {
    50
}
fn default_square_size() -> f32 {
    1.0
}
fn default_wall_height() -> f32 {
    5.0
}
fn default_border_size() -> usize {
    DEFAULT_BORDER_SIZE
}
fn default_uv_tiling() -> f32 {
    10.0
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            seed: default_seed(),
            use_random_seed: false,
            fill_percent: default_fill_percent(),
            wall_threshold: default_threshold(),
            room_threshold: default_threshold(),
            square_size: default_square_size(),
            wall_height: default_wall_height(),
            border_size: default_border_size(),
            uv_tiling: default_uv_tiling(),
        }
    }
}

impl CaveConfig {
    /// Tile count after padding, `None` on overflow or negative dimensions.
    pub fn padded_tiles(&self) -> Option<usize> {
        let pad = self.border_size.checked_mul(2)?;
        let w = usize::try_from(self.width).ok()?.checked_add(pad)?;
        let h = usize::try_from(self.height).ok()?.checked_add(pad)?;
        w.checked_mul(h)
    }

    /// Checks every field that would make generation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.use_random_seed && self.seed.is_empty() {
            return Err(ConfigError::EmptySeed);
        }
        if !(self.square_size.is_finite() && self.square_size > 0.0) {
            return Err(ConfigError::InvalidSquareSize(self.square_size));
        }
        if !(self.wall_height.is_finite() && self.wall_height > 0.0) {
            return Err(ConfigError::InvalidWallHeight(self.wall_height));
        }
        if self.padded_tiles().is_none_or(|n| n > MAX_PADDED_TILES) {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                border: self.border_size,
                max_tiles: MAX_PADDED_TILES,
            });
        }
        if !(0..=100).contains(&self.fill_percent) {
            log::warn!(
                "fill_percent {} outside 0..=100; every interior tile starts {}",
                self.fill_percent,
                if self.fill_percent > 100 { "wall" } else { "open" }
            );
        }
        Ok(())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<CaveConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: CaveConfig = toml::from_str(&s)?;
    Ok(cfg)
}
