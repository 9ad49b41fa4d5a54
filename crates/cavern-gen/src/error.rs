use thiserror::Error;

/// Rejected generation request. Raised before any grid is allocated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("seed must not be empty unless a random seed is requested")]
    EmptySeed,
    #[error("square size must be a positive finite number, got {0}")]
    InvalidSquareSize(f32),
    #[error("wall height must be a positive finite number, got {0}")]
    InvalidWallHeight(f32),
    #[error("border {border} around a {width}x{height} grid exceeds {max_tiles} tiles")]
    GridTooLarge {
        width: i32,
        height: i32,
        border: usize,
        max_tiles: usize,
    },
}
