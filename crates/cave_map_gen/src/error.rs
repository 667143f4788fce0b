//! Configuration errors.

use thiserror::Error;

/// A [`CaveConfig`](crate::CaveConfig) that cannot be generated from.
///
/// Every variant names the offending field; see [`ConfigError::field`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("width must be greater than 0")]
    ZeroWidth,
    #[error("height must be greater than 0")]
    ZeroHeight,
    #[error("tile_width must be greater than 0")]
    ZeroTileWidth,
    #[error("tile_height must be greater than 0")]
    ZeroTileHeight,
    #[error("birth_threshold must be in 0..=8, got {0}")]
    BirthThresholdOutOfRange(u8),
    #[error("death_threshold must be in 0..=8, got {0}")]
    DeathThresholdOutOfRange(u8),
    #[error("initial_wall_probability must be in [0, 1], got {0}")]
    WallProbabilityOutOfRange(f64),
    #[error("corridor_width must be greater than 0")]
    ZeroCorridorWidth,
    #[error("a {width}x{height} grid does not fit in memory")]
    GridTooLarge { width: u32, height: u32 },
    #[error("wall_tile_id and floor_tile_id must differ, both are {0}")]
    AmbiguousTileIds(u32),
    #[error("could not parse config: {0}")]
    Parse(String),
}

impl ConfigError {
    /// Name of the config field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::ZeroWidth => "width",
            ConfigError::ZeroHeight => "height",
            ConfigError::ZeroTileWidth => "tile_width",
            ConfigError::ZeroTileHeight => "tile_height",
            ConfigError::BirthThresholdOutOfRange(_) => "birth_threshold",
            ConfigError::DeathThresholdOutOfRange(_) => "death_threshold",
            ConfigError::WallProbabilityOutOfRange(_) => "initial_wall_probability",
            ConfigError::ZeroCorridorWidth => "corridor_width",
            ConfigError::GridTooLarge { .. } => "width",
            ConfigError::AmbiguousTileIds(_) => "floor_tile_id",
            ConfigError::Parse(_) => "<document>",
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Failure to read a [`Grid`](crate::Grid) from its text form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("grid text has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell character {0:?}, expected '#' or '.'")]
    UnknownCell(char),
}
