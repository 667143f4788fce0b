//! The layered tile grid handed to rendering and collision code

use serde::{Deserialize, Serialize};

use crate::{Layer, Tileset};

/// A layered tile grid plus the tileset its ids refer to.
///
/// Coordinates on the query side are `i32` so callers can probe outside the
/// map without casting; anything out of bounds is simply not valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    width: u32,
    height: u32,
    tileset: Tileset,
    layers: Vec<Layer>,
}

impl TileMap {
    /// Create a map with no layers
    pub fn new(width: u32, height: u32, tileset: Tileset) -> Self {
        Self {
            width,
            height,
            tileset,
            layers: Vec::new(),
        }
    }

    /// Append an empty tile layer and return its index
    pub fn add_layer(&mut self, name: String) -> usize {
        let layer = Layer::new_tile_layer(name, self.tileset.id, self.width, self.height);
        self.layers.push(layer);
        self.layers.len() - 1
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tile width in pixels
    pub fn tile_width(&self) -> u32 {
        self.tileset.tile_width
    }

    /// Tile height in pixels
    pub fn tile_height(&self) -> u32 {
        self.tileset.tile_height
    }

    pub fn tileset(&self) -> &Tileset {
        &self.tileset
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Check whether `(x, y)` lies inside the map
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width as i64 && (y as i64) < self.height as i64
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_valid_position(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the tile at `(x, y)` on `layer`.
    ///
    /// Returns `None` for a missing layer, an out-of-bounds position or an
    /// empty cell.
    pub fn get_tile(&self, layer: usize, x: i32, y: i32) -> Option<u32> {
        let idx = self.index(x, y)?;
        self.layers.get(layer)?.tiles.get(idx).copied().flatten()
    }

    /// Set the tile at `(x, y)` on `layer`. Returns `false` if nothing was written.
    pub fn set_tile(&mut self, layer: usize, x: u32, y: u32, tile: Option<u32>) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = y as usize * self.width as usize + x as usize;
        match self.layers.get_mut(layer).and_then(|l| l.tiles.get_mut(idx)) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    /// Whether the base layer tile at `(x, y)` can be walked on
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.is_valid_position(x, y) && self.tileset.is_walkable(self.get_tile(0, x, y))
    }

    /// Pixel-space center of tile `(x, y)`.
    ///
    /// Defined for any coordinate, including ones outside the map.
    pub fn tile_to_world_center(&self, x: i32, y: i32) -> (f32, f32) {
        let tw = self.tile_width() as f32;
        let th = self.tile_height() as f32;
        (x as f32 * tw + tw / 2.0, y as f32 * th + th / 2.0)
    }

    /// Tile coordinate containing the pixel-space point `(world_x, world_y)`
    pub fn world_to_tile(&self, world_x: f32, world_y: f32) -> (i32, i32) {
        let tw = self.tile_width() as f32;
        let th = self.tile_height() as f32;
        ((world_x / tw).floor() as i32, (world_y / th).floor() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_map() -> TileMap {
        let tileset = Tileset::new("Cave".to_string(), 16, 8, 1, 0);
        let mut map = TileMap::new(4, 3, tileset);
        let layer = map.add_layer("Cave".to_string());
        for y in 0..3 {
            for x in 0..4 {
                map.set_tile(layer, x, y, Some(1));
            }
        }
        map.set_tile(layer, 2, 1, Some(0));
        map
    }

    #[test]
    fn test_get_tile() {
        let map = small_map();

        assert_eq!(map.get_tile(0, 0, 0), Some(1));
        assert_eq!(map.get_tile(0, 2, 1), Some(0));
        assert_eq!(map.get_tile(0, 4, 0), None);
        assert_eq!(map.get_tile(0, -1, 0), None);
        assert_eq!(map.get_tile(1, 0, 0), None);
    }

    #[test]
    fn test_is_valid_position() {
        let map = small_map();

        assert!(map.is_valid_position(0, 0));
        assert!(map.is_valid_position(3, 2));
        assert!(!map.is_valid_position(4, 2));
        assert!(!map.is_valid_position(3, 3));
        assert!(!map.is_valid_position(-1, 0));
        assert!(!map.is_valid_position(0, i32::MIN));
    }

    #[test]
    fn test_set_tile_out_of_bounds() {
        let mut map = small_map();

        assert!(!map.set_tile(0, 4, 0, Some(0)));
        assert!(!map.set_tile(3, 0, 0, Some(0)));
        assert!(map.set_tile(0, 3, 2, None));
        assert_eq!(map.get_tile(0, 3, 2), None);
    }

    #[test]
    fn test_tile_to_world_center() {
        let map = small_map();

        assert_eq!(map.tile_to_world_center(0, 0), (8.0, 4.0));
        assert_eq!(map.tile_to_world_center(2, 1), (40.0, 12.0));
        assert_eq!(map.tile_to_world_center(-1, 0), (-8.0, 4.0));
        assert_eq!(map.world_to_tile(40.0, 12.0), (2, 1));
        assert_eq!(map.world_to_tile(-0.5, 0.0), (-1, 0));
    }

    #[test]
    fn test_is_walkable() {
        let map = small_map();

        assert!(map.is_walkable(2, 1));
        assert!(!map.is_walkable(0, 0));
        assert!(!map.is_walkable(-3, 1));
    }

    #[test]
    fn test_layers_share_tileset_id() {
        let mut map = small_map();
        let second = map.add_layer("Decor".to_string());

        assert_eq!(second, 1);
        assert_eq!(map.layers().len(), 2);
        assert_eq!(map.layers()[1].tileset_id, map.tileset().id);
        assert_eq!(map.layers()[1].filled_count(), 0);
    }

    #[test]
    fn test_serde_roundtrip_preserves_tiles() {
        let map = small_map();
        let json = serde_json::to_string(&map).unwrap();
        let back: TileMap = serde_json::from_str(&json).unwrap();

        assert_eq!(back, map);
    }
}
