//! The generation pipeline and its entry points.
//!
//! Initialize, smooth, label, prune, re-label, connect, emit. Every stage
//! takes the grid by value; the config is validated before the first
//! allocation.

use std::fmt;

use cave_map_core::TileMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::connect::connect_regions;
use crate::emit::emit_tile_map;
use crate::init::initialize_grid;
use crate::regions::{label_regions, prune_regions};
use crate::smooth::smooth_grid;
use crate::{CaveConfig, ConfigError, Grid};

/// What a generation run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Seed the random stream was built from. `None` when the caller
    /// supplied the stream.
    pub seed: Option<u64>,
    pub regions_before_prune: usize,
    pub regions_pruned: usize,
    pub regions_after_prune: usize,
    pub corridors_carved: usize,
    pub floor_cells: usize,
    /// No floor cell survived
    pub degenerate: bool,
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.seed {
            Some(seed) => writeln!(f, "seed:      {seed}")?,
            None => writeln!(f, "seed:      <caller stream>")?,
        }
        writeln!(
            f,
            "regions:   {} found, {} pruned, {} kept",
            self.regions_before_prune, self.regions_pruned, self.regions_after_prune
        )?;
        writeln!(f, "corridors: {}", self.corridors_carved)?;
        write!(f, "floor:     {} cells", self.floor_cells)?;
        if self.degenerate {
            write!(f, " (degenerate: no floor)")?;
        }
        Ok(())
    }
}

/// Everything a generation run produces
#[derive(Debug, Clone)]
pub struct CaveOutput {
    pub map: TileMap,
    /// The final wall/floor grid the map was emitted from
    pub grid: Grid,
    pub report: GenerationReport,
}

/// Generate a cave, seeding the random stream from `config.seed`.
///
/// Without a seed a fresh one is drawn from the thread RNG and recorded in
/// the report, so the run can be replayed.
pub fn generate_cave(config: &CaveConfig) -> Result<CaveOutput, ConfigError> {
    config.validate()?;

    let seed = match config.seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::random();
            warn!(seed, "no seed configured, generation is not reproducible");
            seed
        }
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut output = generate_cave_with_rng(config, &mut rng)?;
    output.report.seed = Some(seed);
    Ok(output)
}

/// Generate a cave from a caller-supplied random stream.
///
/// `config.seed` is ignored.
pub fn generate_cave_with_rng(
    config: &CaveConfig,
    rng: &mut impl Rng,
) -> Result<CaveOutput, ConfigError> {
    let (grid, report) = generate_grid_with_rng(config, rng)?;
    let map = emit_tile_map(&grid, config);
    debug!(
        width = map.width(),
        height = map.height(),
        layers = map.layers().len(),
        "emitted tile map"
    );
    Ok(CaveOutput { map, grid, report })
}

/// Run every stage except emission.
pub fn generate_grid_with_rng(
    config: &CaveConfig,
    rng: &mut impl Rng,
) -> Result<(Grid, GenerationReport), ConfigError> {
    config.validate()?;

    let grid = initialize_grid(config, rng);
    debug!(
        width = grid.width(),
        height = grid.height(),
        floor = grid.floor_count(),
        "initialized grid"
    );

    let grid = smooth_grid(grid, config);
    debug!(
        iterations = config.iterations,
        floor = grid.floor_count(),
        "smoothed grid"
    );

    let regions = label_regions(&grid);
    let regions_before_prune = regions.len();
    let (grid, regions_pruned) = prune_regions(grid, &regions, config.min_cave_size);
    debug!(
        found = regions_before_prune,
        pruned = regions_pruned,
        min_size = config.min_cave_size,
        "pruned regions"
    );

    // Pruning invalidates ids and cell lists
    let regions = label_regions(&grid);
    let regions_after_prune = regions.len();

    let (grid, corridors_carved) = if config.connect_caves {
        let (grid, tree) = connect_regions(
            grid,
            &regions,
            config.corridor_width,
            config.edge_is_wall,
        );
        (grid, tree.len())
    } else {
        debug!("cave connection disabled");
        (grid, 0)
    };

    let floor_cells = grid.floor_count();
    let report = GenerationReport {
        seed: None,
        regions_before_prune,
        regions_pruned,
        regions_after_prune,
        corridors_carved,
        floor_cells,
        degenerate: floor_cells == 0,
    };

    if report.degenerate {
        warn!(
            width = config.width,
            height = config.height,
            "generated map has no floor"
        );
    }
    info!(
        regions = report.regions_after_prune,
        pruned = report.regions_pruned,
        corridors = report.corridors_carved,
        floor = report.floor_cells,
        "generated cave"
    );

    Ok((grid, report))
}
