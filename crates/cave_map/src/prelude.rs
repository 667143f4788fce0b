pub use cave_map_core::{
    find_nearest_floor_tile, find_valid_spawn_position, Layer, TileMap, TileProperties, Tileset,
};
pub use cave_map_gen::{
    generate_cave, generate_cave_with_rng, generate_grid_with_rng, CaveConfig, CaveOutput, Cell,
    ConfigError, GenerationReport, Grid,
};
