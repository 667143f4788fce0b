//! Initial noise: one random draw per cell.

use rand::Rng;

use crate::{CaveConfig, Cell, Grid};

/// Fill a `width x height` grid with random walls.
///
/// Cells are visited in row-major order and each takes exactly one draw from
/// `rng`, border cells included, so the stream position never depends on
/// `edge_is_wall`. A draw below `initial_wall_probability` makes a wall.
pub fn initialize_grid(config: &CaveConfig, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::filled(config.width, config.height, Cell::Floor);

    for y in 0..config.height {
        for x in 0..config.width {
            let roll: f64 = rng.gen();
            if roll < config.initial_wall_probability {
                grid.set(x, y, Cell::Wall);
            }
        }
    }

    if config.edge_is_wall {
        grid.enforce_border_walls();
    }

    grid
}
