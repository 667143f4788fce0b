//! Deterministic procedural cave maps.
//!
//! Re-exports the tile map data model from [`cave_map_core`] and the
//! generator from [`cave_map_gen`]. Most users only need the prelude:
//!
//! ```
//! use cave_map::prelude::*;
//!
//! let config = CaveConfig::new(40, 30).with_seed(7);
//! let output = generate_cave(&config).unwrap();
//!
//! let (world_x, world_y) = find_valid_spawn_position(&output.map, 20, 15);
//! let (tile_x, tile_y) = output.map.world_to_tile(world_x, world_y);
//! assert!(output.report.degenerate || output.map.is_walkable(tile_x, tile_y));
//! ```

pub mod prelude;

pub use cave_map_core as core;
pub use cave_map_gen as generator;
