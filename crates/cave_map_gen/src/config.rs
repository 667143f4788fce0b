//! Generation parameters.
//!
//! [`CaveConfig`] is a plain value. It is validated once, up front, by every
//! generation entry point; nothing is allocated for an invalid config.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Largest value either neighbor-count threshold may take (the Moore neighborhood size).
pub const MAX_NEIGHBOR_THRESHOLD: u8 = 8;

/// Parameters for one cave generation run.
///
/// Deserializes from partial documents: missing fields take their
/// [`Default`] values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveConfig {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,
    /// Number of smoothing generations. `0` leaves the noise untouched.
    pub iterations: u32,
    /// Chance in `[0, 1]` that a cell starts as a wall.
    pub initial_wall_probability: f64,
    /// A cell becomes a wall when at least this many of its 8 neighbors are walls.
    pub birth_threshold: u8,
    /// A cell becomes floor when at most this many of its 8 neighbors are walls.
    pub death_threshold: u8,
    /// Seed for the random stream. `None` draws a fresh seed from the OS and
    /// the run is not reproducible.
    pub seed: Option<u64>,
    /// Force the outer ring of cells to wall, and count out-of-bounds
    /// neighbors as walls while smoothing.
    pub edge_is_wall: bool,
    /// Carve corridors so every cave is reachable from every other.
    pub connect_caves: bool,
    /// Caves with fewer floor cells than this are filled in. `0` keeps everything.
    pub min_cave_size: usize,
    pub wall_tile_id: u32,
    pub floor_tile_id: u32,
    /// Tile width in pixels.
    pub tile_width: u32,
    /// Tile height in pixels.
    pub tile_height: u32,
    /// Side length of the square brush used when carving corridors.
    pub corridor_width: u32,
}

impl Default for CaveConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            iterations: 5,
            initial_wall_probability: 0.45,
            birth_threshold: 5,
            death_threshold: 3,
            seed: None,
            edge_is_wall: true,
            connect_caves: true,
            min_cave_size: 12,
            wall_tile_id: 1,
            floor_tile_id: 0,
            tile_width: 16,
            tile_height: 16,
            corridor_width: 1,
        }
    }
}

impl CaveConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Parse a TOML document and validate the result
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CaveConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field, reporting the first violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if (self.width as usize).checked_mul(self.height as usize).is_none() {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.tile_width == 0 {
            return Err(ConfigError::ZeroTileWidth);
        }
        if self.tile_height == 0 {
            return Err(ConfigError::ZeroTileHeight);
        }
        if self.birth_threshold > MAX_NEIGHBOR_THRESHOLD {
            return Err(ConfigError::BirthThresholdOutOfRange(self.birth_threshold));
        }
        if self.death_threshold > MAX_NEIGHBOR_THRESHOLD {
            return Err(ConfigError::DeathThresholdOutOfRange(self.death_threshold));
        }
        // NaN fails the range check too
        if !(0.0..=1.0).contains(&self.initial_wall_probability) {
            return Err(ConfigError::WallProbabilityOutOfRange(
                self.initial_wall_probability,
            ));
        }
        if self.corridor_width == 0 {
            return Err(ConfigError::ZeroCorridorWidth);
        }
        if self.wall_tile_id == self.floor_tile_id {
            return Err(ConfigError::AmbiguousTileIds(self.wall_tile_id));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_wall_probability(mut self, probability: f64) -> Self {
        self.initial_wall_probability = probability;
        self
    }

    pub fn with_thresholds(mut self, birth: u8, death: u8) -> Self {
        self.birth_threshold = birth;
        self.death_threshold = death;
        self
    }

    pub fn with_edge_is_wall(mut self, edge_is_wall: bool) -> Self {
        self.edge_is_wall = edge_is_wall;
        self
    }

    pub fn with_connect_caves(mut self, connect: bool) -> Self {
        self.connect_caves = connect;
        self
    }

    pub fn with_min_cave_size(mut self, size: usize) -> Self {
        self.min_cave_size = size;
        self
    }

    pub fn with_tile_ids(mut self, wall: u32, floor: u32) -> Self {
        self.wall_tile_id = wall;
        self.floor_tile_id = floor;
        self
    }

    pub fn with_tile_size(mut self, tile_width: u32, tile_height: u32) -> Self {
        self.tile_width = tile_width;
        self.tile_height = tile_height;
        self
    }

    pub fn with_corridor_width(mut self, width: u32) -> Self {
        self.corridor_width = width;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CaveConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(CaveConfig::new(0, 10).validate(), Err(ConfigError::ZeroWidth));
        assert_eq!(CaveConfig::new(10, 0).validate(), Err(ConfigError::ZeroHeight));

        let err = CaveConfig::new(10, 10).with_tile_size(0, 16).validate();
        assert_eq!(err, Err(ConfigError::ZeroTileWidth));
        let err = CaveConfig::new(10, 10).with_tile_size(16, 0).validate();
        assert_eq!(err, Err(ConfigError::ZeroTileHeight));
    }

    #[test]
    fn thresholds_must_fit_the_neighborhood() {
        let config = CaveConfig::new(10, 10).with_thresholds(9, 3);
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigError::BirthThresholdOutOfRange(9));
        assert_eq!(err.field(), "birth_threshold");

        let config = CaveConfig::new(10, 10).with_thresholds(8, 12);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DeathThresholdOutOfRange(12))
        );

        let config = CaveConfig::new(10, 10).with_thresholds(0, 8);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn wall_probability_range() {
        assert!(CaveConfig::new(4, 4).with_wall_probability(0.0).validate().is_ok());
        assert!(CaveConfig::new(4, 4).with_wall_probability(1.0).validate().is_ok());

        let err = CaveConfig::new(4, 4).with_wall_probability(1.5).validate();
        assert_eq!(err, Err(ConfigError::WallProbabilityOutOfRange(1.5)));

        let err = CaveConfig::new(4, 4)
            .with_wall_probability(f64::NAN)
            .validate()
            .unwrap_err();
        assert_eq!(err.field(), "initial_wall_probability");
    }

    #[test]
    fn corridor_width_and_tile_ids() {
        let err = CaveConfig::new(4, 4).with_corridor_width(0).validate();
        assert_eq!(err, Err(ConfigError::ZeroCorridorWidth));

        let err = CaveConfig::new(4, 4).with_tile_ids(2, 2).validate().unwrap_err();
        assert_eq!(err, ConfigError::AmbiguousTileIds(2));
        assert_eq!(err.field(), "floor_tile_id");
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
width = 32
height = 20
seed = 7
min_cave_size = 0
"#;
        let config = CaveConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.min_cave_size, 0);
        // Untouched fields keep their defaults
        assert_eq!(config.iterations, CaveConfig::default().iterations);
        assert!(config.edge_is_wall);
    }

    #[test]
    fn parse_rejects_invalid_values() {
        let err = CaveConfig::from_toml_str("width = 0").unwrap_err();
        assert_eq!(err, ConfigError::ZeroWidth);

        let err = CaveConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
