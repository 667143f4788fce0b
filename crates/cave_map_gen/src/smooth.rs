//! Cellular-automata smoothing.
//!
//! Each generation is computed into a fresh grid from a frozen copy of the
//! previous one, so no cell ever sees a neighbor's new state. With the
//! `parallel` feature the rows of a generation are filled concurrently; the
//! result is identical to the sequential path.

use crate::{CaveConfig, Cell, Grid};

/// Run `config.iterations` generations over `grid`.
///
/// Zero iterations hands the grid back untouched.
pub fn smooth_grid(grid: Grid, config: &CaveConfig) -> Grid {
    let mut current = grid;
    for _ in 0..config.iterations {
        current = smooth_step(
            &current,
            config.birth_threshold,
            config.death_threshold,
            config.edge_is_wall,
        );
    }
    current
}

/// Compute one generation from `prev`.
///
/// A cell becomes a wall when its wall-neighbor count is at least `birth`,
/// floor when the count is at most `death`, and keeps its state otherwise.
/// The wall test wins if both hold.
pub fn smooth_step(prev: &Grid, birth: u8, death: u8, edge_is_wall: bool) -> Grid {
    let row_len = (prev.width() as usize).max(1);
    let mut next = Grid::filled(prev.width(), prev.height(), Cell::Wall);

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        next.cells_mut()
            .par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| fill_row(prev, y as u32, row, birth, death, edge_is_wall));
    }

    #[cfg(not(feature = "parallel"))]
    for (y, row) in next.cells_mut().chunks_mut(row_len).enumerate() {
        fill_row(prev, y as u32, row, birth, death, edge_is_wall);
    }

    if edge_is_wall {
        next.enforce_border_walls();
    }
    next
}

fn fill_row(prev: &Grid, y: u32, row: &mut [Cell], birth: u8, death: u8, edge_is_wall: bool) {
    for (x, out) in row.iter_mut().enumerate() {
        let x = x as u32;
        let walls = wall_neighbor_count(prev, x, y, edge_is_wall);
        *out = if walls >= birth {
            Cell::Wall
        } else if walls <= death {
            Cell::Floor
        } else {
            prev.get(x, y)
        };
    }
}

/// Count walls in the Moore neighborhood of `(x, y)`.
///
/// Out-of-bounds neighbors count as walls when `edge_is_wall`, and are left
/// out of the count otherwise.
pub fn wall_neighbor_count(grid: &Grid, x: u32, y: u32, edge_is_wall: bool) -> u8 {
    let mut count = 0;
    for dy in -1i64..=1 {
        for dx in -1i64..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            match grid.get_checked(x as i64 + dx, y as i64 + dy) {
                Some(Cell::Wall) => count += 1,
                Some(Cell::Floor) => {}
                None if edge_is_wall => count += 1,
                None => {}
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    #[test]
    fn count_includes_out_of_bounds_only_with_edges() {
        let g = grid("###\n#.#\n###");

        assert_eq!(wall_neighbor_count(&g, 1, 1, false), 8);
        assert_eq!(wall_neighbor_count(&g, 0, 0, false), 2);
        assert_eq!(wall_neighbor_count(&g, 0, 0, true), 7);
        assert_eq!(wall_neighbor_count(&g, 1, 0, true), 7);
    }

    #[test]
    fn isolated_floor_fills_in() {
        let g = grid("#####\n#####\n##.##\n#####\n#####");
        let next = smooth_step(&g, 5, 3, true);
        assert!(next.is_all_wall());
    }

    #[test]
    fn isolated_wall_erodes() {
        let g = grid(".....\n.....\n..#..\n.....\n.....");
        let next = smooth_step(&g, 5, 3, false);
        assert_eq!(next.floor_count(), 25);
    }

    #[test]
    fn stability_band_keeps_state() {
        // Center has exactly 4 wall neighbors: between death 3 and birth 5.
        let g = grid("##.\n#..\n#..");
        let wall_center = {
            let mut g = g.clone();
            g.set(1, 1, Cell::Wall);
            g
        };

        assert_eq!(wall_neighbor_count(&g, 1, 1, false), 4);
        assert_eq!(smooth_step(&g, 5, 3, false).get(1, 1), Cell::Floor);
        assert_eq!(smooth_step(&wall_center, 5, 3, false).get(1, 1), Cell::Wall);
    }

    #[test]
    fn wall_rule_wins_when_thresholds_overlap() {
        let g = grid("...\n.#.\n...");
        // Count 0 satisfies both `>= 0` and `<= 8`
        let next = smooth_step(&g, 0, 8, false);
        assert!(next.is_all_wall());
    }

    #[test]
    fn corners_without_edges_see_fewer_neighbors() {
        let g = grid("###\n###\n###");
        let next = smooth_step(&g, 5, 3, false);
        // Corners have 3 neighbors, edges 5, the center 8.
        assert_eq!(next.to_string(), ".#.\n###\n.#.\n");
    }

    #[test]
    fn border_stays_wall_every_generation() {
        let g = grid("######\n#....#\n#....#\n#....#\n######");
        let config = CaveConfig::new(6, 5)
            .with_iterations(4)
            .with_thresholds(8, 3);
        let out = smooth_grid(g, &config);

        for y in 0..5 {
            for x in 0..6 {
                if out.is_border(x, y) {
                    assert_eq!(out.get(x, y), Cell::Wall, "border ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn zero_iterations_is_identity() {
        let g = grid("#.#.\n.#..\n##.#");
        let config = CaveConfig::new(4, 3).with_iterations(0);
        assert_eq!(smooth_grid(g.clone(), &config), g);
    }

    #[test]
    fn each_generation_reads_the_previous_grid_only() {
        // Updating in place would let row 0's new walls feed row 1's count
        let g = grid(".....\n#####\n.....");
        let next = smooth_step(&g, 3, 1, false);
        assert_eq!(next.to_string(), ".###.\n.###.\n.###.\n");
    }
}
