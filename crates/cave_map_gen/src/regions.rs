//! Region labeling and pruning.
//!
//! A region is a maximal 4-connected set of floor cells. Labeling is a single
//! row-major sweep with a visited mask; each unvisited floor cell seeds a
//! breadth-first flood fill. Regions are plain values: they copy the cell
//! coordinates out and never point back into the grid.

use std::collections::VecDeque;

use crate::{Cell, Grid};

/// Orthogonal neighbor offsets, in the order the flood fill expands them.
pub(crate) const ORTHOGONAL: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Inclusive bounding box of a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    fn at(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// One connected cave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Position of this region in the labeling that produced it
    pub id: usize,
    /// Member cells in flood-fill discovery order; the first is the
    /// region's row-major first cell.
    pub cells: Vec<(u32, u32)>,
    pub bounds: Bounds,
}

impl Region {
    pub fn size(&self) -> usize {
        self.cells.len()
    }
}

/// Find every 4-connected floor region of `grid`.
///
/// Regions are ordered by their first cell in row-major order and numbered
/// `0..n` in that order. Every floor cell lands in exactly one region.
pub fn label_regions(grid: &Grid) -> Vec<Region> {
    let mut visited = vec![false; grid.cells().len()];
    let mut regions = Vec::new();
    let mut queue = VecDeque::new();

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let idx = grid.index(x, y);
            if visited[idx] || grid.get(x, y) != Cell::Floor {
                continue;
            }

            visited[idx] = true;
            queue.push_back((x, y));
            let mut cells = Vec::new();
            let mut bounds = Bounds::at(x, y);

            while let Some((cx, cy)) = queue.pop_front() {
                cells.push((cx, cy));
                bounds.include(cx, cy);

                for (dx, dy) in ORTHOGONAL {
                    let nx = cx as i64 + dx;
                    let ny = cy as i64 + dy;
                    if grid.get_checked(nx, ny) != Some(Cell::Floor) {
                        continue;
                    }
                    let nidx = grid.index(nx as u32, ny as u32);
                    if !visited[nidx] {
                        visited[nidx] = true;
                        queue.push_back((nx as u32, ny as u32));
                    }
                }
            }

            regions.push(Region {
                id: regions.len(),
                cells,
                bounds,
            });
        }
    }

    regions
}

/// Fill in every region smaller than `min_size`.
///
/// Returns the grid and the number of regions removed. A `min_size` of 0
/// changes nothing; removing every region is a valid outcome.
pub fn prune_regions(mut grid: Grid, regions: &[Region], min_size: usize) -> (Grid, usize) {
    let mut removed = 0;
    for region in regions.iter().filter(|r| r.size() < min_size) {
        for &(x, y) in &region.cells {
            grid.set(x, y, Cell::Wall);
        }
        removed += 1;
    }
    (grid, removed)
}
