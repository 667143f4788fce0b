//! Tile layers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single tile layer of a [`TileMap`](crate::TileMap).
///
/// Tiles are stored row-major; `None` means the cell is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub visible: bool,
    /// The tileset the tile ids in this layer refer to
    pub tileset_id: Uuid,
    pub tiles: Vec<Option<u32>>,
}

impl Layer {
    /// Create a new, empty tile layer with the given tileset
    pub fn new_tile_layer(name: String, tileset_id: Uuid, width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            name,
            visible: true,
            tileset_id,
            tiles: vec![None; size],
        }
    }

    /// Number of cells holding a tile
    pub fn filled_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    /// Number of cells holding exactly `tile`
    pub fn count_tile(&self, tile: u32) -> usize {
        self.tiles.iter().filter(|t| **t == Some(tile)).count()
    }
}
