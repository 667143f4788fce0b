//! Cellular-automata cave generation for cave_map.
//!
//! The primary entry point is [`generate_cave`], which validates a
//! [`CaveConfig`], runs the pipeline and emits a
//! [`TileMap`](cave_map_core::TileMap). [`generate_cave_with_rng`] takes a
//! caller-supplied random stream instead of seeding one from the config.
//!
//! Every surviving cave is reachable from every other once
//! [`CaveConfig::connect_caves`] is set: regions are joined along a minimum
//! spanning tree of their closest-cell distances.
//!
//! This crate does no I/O. It operates on plain data from `cave_map_core`.

mod config;
pub mod connect;
mod emit;
mod error;
mod grid;
pub mod init;
mod pipeline;
pub mod regions;
pub mod smooth;

pub use config::{CaveConfig, MAX_NEIGHBOR_THRESHOLD};
pub use connect::{connect_regions, RegionEdge};
pub use emit::{emit_tile_map, CAVE_LAYER_NAME};
pub use error::{ConfigError, GridParseError};
pub use grid::{Cell, Grid};
pub use init::initialize_grid;
pub use pipeline::{
    generate_cave, generate_cave_with_rng, generate_grid_with_rng, CaveOutput, GenerationReport,
};
pub use regions::{label_regions, prune_regions, Bounds, Region};
pub use smooth::{smooth_grid, smooth_step};
