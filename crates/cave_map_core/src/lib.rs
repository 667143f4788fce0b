//! Core data structures for cave_map
//!
//! This crate provides the output types handed to rendering, collision and
//! spawning code once a cave has been generated:
//! - `TileMap` - A layered tile grid with pixel dimensions and bounds helpers
//! - `Layer` - A single tile layer
//! - `Tileset` - Tile appearance metadata (tile size, wall/floor ids, collision)
//! - `find_valid_spawn_position` - Nearest walkable tile search for spawners
//!
//! This crate knows nothing about how maps are generated; see `cave_map_gen`.

mod layer;
pub mod spawn;
mod tile_map;
mod tileset;

pub use layer::Layer;
pub use spawn::{find_nearest_floor_tile, find_valid_spawn_position};
pub use tile_map::TileMap;
pub use tileset::{TileProperties, Tileset};
