//! Tile appearance metadata for generated caves

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Per-tile properties read by collision and rendering code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TileProperties {
    /// Whether this tile blocks movement
    #[serde(default)]
    pub collision: bool,
    /// Optional display name for editors and debug output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TileProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set collision for this tile
    pub fn with_collision(mut self, collision: bool) -> Self {
        self.collision = collision;
        self
    }

    /// Set the display label for this tile
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check if any properties are set (non-default)
    pub fn is_empty(&self) -> bool {
        !self.collision && self.label.is_none()
    }
}

/// Tileset metadata for a cave map.
///
/// Records the pixel size of a tile and which tile ids stand for wall and
/// floor. The wall tile is registered with collision, the floor tile without.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tileset {
    pub id: Uuid,
    pub name: String,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    pub wall_tile: u32,
    pub floor_tile: u32,
    /// Per-tile properties (collision, labels)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tile_properties: HashMap<u32, TileProperties>,
}

impl Tileset {
    /// Create a wall/floor tileset
    pub fn new(
        name: String,
        tile_width: u32,
        tile_height: u32,
        wall_tile: u32,
        floor_tile: u32,
    ) -> Self {
        let mut tileset = Self {
            id: Uuid::new_v4(),
            name,
            tile_width,
            tile_height,
            wall_tile,
            floor_tile,
            tile_properties: HashMap::new(),
        };
        tileset.set_tile_properties(floor_tile, TileProperties::new().with_label("floor"));
        // Registered last so the wall wins if both ids coincide
        tileset.set_tile_properties(
            wall_tile,
            TileProperties::new().with_collision(true).with_label("wall"),
        );
        tileset
    }

    /// Get properties for a tile
    pub fn get_tile_properties(&self, tile_index: u32) -> Option<&TileProperties> {
        self.tile_properties.get(&tile_index)
    }

    /// Set properties for a tile
    pub fn set_tile_properties(&mut self, tile_index: u32, properties: TileProperties) {
        if properties.is_empty() {
            self.tile_properties.remove(&tile_index);
        } else {
            self.tile_properties.insert(tile_index, properties);
        }
    }

    /// Check if a tile has collision
    pub fn tile_has_collision(&self, tile_index: u32) -> bool {
        self.get_tile_properties(tile_index)
            .map(|p| p.collision)
            .unwrap_or(false)
    }

    /// A cell is walkable when it holds a tile without collision
    pub fn is_walkable(&self, tile: Option<u32>) -> bool {
        matches!(tile, Some(t) if !self.tile_has_collision(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_has_collision_floor_does_not() {
        let tileset = Tileset::new("Cave".to_string(), 16, 16, 1, 0);

        assert!(tileset.tile_has_collision(1));
        assert!(!tileset.tile_has_collision(0));
        assert_eq!(
            tileset.get_tile_properties(1).and_then(|p| p.label.as_deref()),
            Some("wall")
        );
        assert_eq!(
            tileset.get_tile_properties(0).and_then(|p| p.label.as_deref()),
            Some("floor")
        );
        assert_eq!(tileset.tile_properties.len(), 2);
    }

    #[test]
    fn test_is_walkable() {
        let tileset = Tileset::new("Cave".to_string(), 16, 16, 7, 3);

        assert!(tileset.is_walkable(Some(3)));
        assert!(!tileset.is_walkable(Some(7)));
        assert!(!tileset.is_walkable(None));
        // Unknown tiles have no collision registered
        assert!(tileset.is_walkable(Some(42)));
    }

    #[test]
    fn test_coinciding_ids_resolve_to_wall() {
        let tileset = Tileset::new("Cave".to_string(), 16, 16, 4, 4);

        assert_eq!(tileset.tile_properties.len(), 1);
        assert!(tileset.tile_has_collision(4));
        assert!(!tileset.is_walkable(Some(4)));
    }

    #[test]
    fn test_set_tile_properties_replaces() {
        let mut tileset = Tileset::new("Cave".to_string(), 16, 16, 1, 0);
        tileset.set_tile_properties(0, TileProperties::new().with_collision(true));

        assert!(tileset.tile_has_collision(0));
        assert!(!tileset.is_walkable(Some(0)));

        tileset.set_tile_properties(0, TileProperties::new());
        assert!(tileset.get_tile_properties(0).is_none());
    }
}
