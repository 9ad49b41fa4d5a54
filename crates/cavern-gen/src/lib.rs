//! Cave grid generation: configuration, seeding, cellular automaton and region cleanup.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod generate;
pub mod seed;
pub mod timings;

pub use config::{CaveConfig, DEFAULT_BORDER_SIZE, MAX_PADDED_TILES, load_config_from_path};
pub use error::ConfigError;
pub use generate::{
    CleanupReport, GridParams, SMOOTHING_PASSES, cull_small_regions, generate, generate_grid,
    random_fill, smooth_pass, wall_neighbour_count,
};
pub use seed::{CaveRng, hash_seed, resolve_seed, rng_for_seed};
pub use timings::{STAGE_COUNT, STAGE_LABELS, Stage, StageTimings};
