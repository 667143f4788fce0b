//! Grid to [`TileMap`] conversion.

use cave_map_core::{TileMap, Tileset};

use crate::{CaveConfig, Cell, Grid};

/// Name of the single layer the generator fills
pub const CAVE_LAYER_NAME: &str = "Cave";

/// Build the output map for `grid`.
///
/// Layer 0 holds `wall_tile_id` for every wall and `floor_tile_id` for every
/// floor; the tileset marks the wall tile as colliding.
pub fn emit_tile_map(grid: &Grid, config: &CaveConfig) -> TileMap {
    let tileset = Tileset::new(
        CAVE_LAYER_NAME.to_string(),
        config.tile_width,
        config.tile_height,
        config.wall_tile_id,
        config.floor_tile_id,
    );
    let mut map = TileMap::new(grid.width(), grid.height(), tileset);
    let layer = map.add_layer(CAVE_LAYER_NAME.to_string());

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let tile = match grid.get(x, y) {
                Cell::Wall => config.wall_tile_id,
                Cell::Floor => config.floor_tile_id,
            };
            map.set_tile(layer, x, y, Some(tile));
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_follow_the_grid() {
        let grid: Grid = "####\n#..#\n####".parse().unwrap();
        let config = CaveConfig::new(4, 3).with_tile_ids(7, 3).with_tile_size(32, 8);
        let map = emit_tile_map(&grid, &config);

        assert_eq!((map.width(), map.height()), (4, 3));
        assert_eq!((map.tile_width(), map.tile_height()), (32, 8));
        assert_eq!(map.layers().len(), 1);
        assert_eq!(map.layers()[0].name, CAVE_LAYER_NAME);
        assert_eq!(map.layers()[0].filled_count(), 12);

        assert_eq!(map.get_tile(0, 0, 0), Some(7));
        assert_eq!(map.get_tile(0, 1, 1), Some(3));
        assert_eq!(map.get_tile(0, 2, 1), Some(3));
        assert_eq!(map.layers()[0].count_tile(3), 2);
    }

    #[test]
    fn tileset_records_collision() {
        let grid = Grid::filled(2, 2, Cell::Wall);
        let config = CaveConfig::new(2, 2).with_tile_ids(4, 9);
        let map = emit_tile_map(&grid, &config);

        let tileset = map.tileset();
        assert_eq!(tileset.wall_tile, 4);
        assert_eq!(tileset.floor_tile, 9);
        assert!(tileset.tile_has_collision(4));
        assert!(!tileset.tile_has_collision(9));
        assert!(!map.is_walkable(0, 0));
    }

    #[test]
    fn floor_tiles_are_walkable() {
        let grid: Grid = "#.\n..".parse().unwrap();
        let map = emit_tile_map(&grid, &CaveConfig::new(2, 2));

        assert!(map.is_walkable(1, 0));
        assert!(map.is_walkable(0, 1));
        assert!(!map.is_walkable(0, 0));
        assert!(!map.is_walkable(2, 0));
    }
}
