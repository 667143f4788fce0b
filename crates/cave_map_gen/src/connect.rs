//! Connectivity repair: join every region into one cave.
//!
//! The regions form a complete graph whose edge weights are the squared
//! Euclidean distance between the closest pair of cells of the two regions.
//! Kruskal's algorithm picks the spanning tree with the least total length,
//! and one L-shaped corridor is carved per tree edge.
//!
//! Only boundary cells (floor cells with a non-floor 4-neighbor) take part in
//! the closest-pair search. An interior cell always has a floor neighbor of
//! its own region that is strictly closer to any outside cell, so neither the
//! minimum distance nor the set of tied pairs changes.

use tracing::debug;

use crate::regions::ORTHOGONAL;
use crate::{Cell, Grid, Region};

/// The shortest link between two regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEdge {
    /// Lower region id
    pub a: usize,
    /// Higher region id
    pub b: usize,
    /// Squared Euclidean distance between `from` and `to`
    pub distance_sq: u64,
    /// Cell of region `a`
    pub from: (u32, u32),
    /// Cell of region `b`
    pub to: (u32, u32),
}

/// Carve corridors until every region in `regions` is reachable from every other.
///
/// `regions` must be the labeling of `grid`. With `edge_is_wall` every border
/// cell of `grid` must already be a wall: corridors never carve the border,
/// so a region touching it could be left unreachable. Fewer than two regions
/// leaves the grid untouched. Returns the grid and the spanning-tree edges
/// that were carved, in carving order.
pub fn connect_regions(
    mut grid: Grid,
    regions: &[Region],
    corridor_width: u32,
    edge_is_wall: bool,
) -> (Grid, Vec<RegionEdge>) {
    debug_assert!(
        !edge_is_wall || border_is_wall(&grid),
        "edge_is_wall set but the border holds floor cells"
    );
    if regions.len() < 2 {
        debug!(regions = regions.len(), "nothing to connect");
        return (grid, Vec::new());
    }

    let edges = region_edges(&grid, regions);
    let tree = minimum_spanning_tree(regions.len(), edges);

    for edge in &tree {
        carve_corridor(&mut grid, edge.from, edge.to, corridor_width, edge_is_wall);
    }

    debug!(
        regions = regions.len(),
        corridors = tree.len(),
        total_length_sq = tree.iter().map(|e| e.distance_sq).sum::<u64>(),
        "connected regions"
    );
    (grid, tree)
}

fn border_is_wall(grid: &Grid) -> bool {
    (0..grid.height()).all(|y| {
        (0..grid.width()).all(|x| !grid.is_border(x, y) || grid.get(x, y) == Cell::Wall)
    })
}

/// Closest-pair edge for every unordered pair of regions.
///
/// Edges come out ordered by `(a, b)`.
pub fn region_edges(grid: &Grid, regions: &[Region]) -> Vec<RegionEdge> {
    let boundaries: Vec<Vec<(u32, u32)>> =
        regions.iter().map(|r| boundary_cells(grid, r)).collect();

    let mut edges = Vec::with_capacity(regions.len() * regions.len().saturating_sub(1) / 2);
    for i in 0..regions.len() {
        for j in (i + 1)..regions.len() {
            if let Some((distance_sq, from, to)) = nearest_pair(&boundaries[i], &boundaries[j]) {
                edges.push(RegionEdge {
                    a: regions[i].id,
                    b: regions[j].id,
                    distance_sq,
                    from,
                    to,
                });
            }
        }
    }
    edges
}

/// Kruskal's algorithm over `edges` for a graph of `node_count` nodes.
///
/// Ties in weight are broken by `(a, b)`, so the tree is fully determined by
/// its input.
pub fn minimum_spanning_tree(node_count: usize, mut edges: Vec<RegionEdge>) -> Vec<RegionEdge> {
    edges.sort_by_key(|e| (e.distance_sq, e.a, e.b));

    let mut sets = DisjointSet::new(node_count);
    let mut tree = Vec::with_capacity(node_count.saturating_sub(1));
    for edge in edges {
        if sets.union(edge.a, edge.b) {
            tree.push(edge);
            if tree.len() + 1 == node_count {
                break;
            }
        }
    }
    tree
}

/// Floor cells of `region` with at least one 4-neighbor that is wall or
/// outside the grid, sorted by `(x, y)`.
fn boundary_cells(grid: &Grid, region: &Region) -> Vec<(u32, u32)> {
    let mut cells: Vec<(u32, u32)> = region
        .cells
        .iter()
        .copied()
        .filter(|&(x, y)| {
            ORTHOGONAL
                .iter()
                .any(|&(dx, dy)| grid.get_checked(x as i64 + dx, y as i64 + dy) != Some(Cell::Floor))
        })
        .collect();
    cells.sort_unstable();
    cells
}

/// Closest pair between two cell sets.
///
/// Among equally close pairs the lexicographically smallest
/// `((ax, ay), (bx, by))` wins.
fn nearest_pair(a: &[(u32, u32)], b: &[(u32, u32)]) -> Option<(u64, (u32, u32), (u32, u32))> {
    let mut best: Option<(u64, (u32, u32), (u32, u32))> = None;
    for &pa in a {
        for &pb in b {
            let candidate = (distance_sq(pa, pb), pa, pb);
            if best.map_or(true, |current| candidate < current) {
                best = Some(candidate);
            }
        }
    }
    best
}

fn distance_sq(a: (u32, u32), b: (u32, u32)) -> u64 {
    let dx = a.0.abs_diff(b.0) as u64;
    let dy = a.1.abs_diff(b.1) as u64;
    dx * dx + dy * dy
}

/// Carve an L-shaped corridor from `from` to `to`.
///
/// The horizontal leg runs along `from`'s row to `to`'s column, then the
/// vertical leg runs along that column to `to`. Every path cell is stamped
/// with a `width x width` square brush covering offsets `-(width-1)/2 ..=
/// width/2`. With `edge_is_wall` the border is never carved.
pub fn carve_corridor(
    grid: &mut Grid,
    from: (u32, u32),
    to: (u32, u32),
    width: u32,
    edge_is_wall: bool,
) {
    let (fx, fy) = from;
    let (tx, ty) = to;

    for x in fx.min(tx)..=fx.max(tx) {
        stamp(grid, x, fy, width, edge_is_wall);
    }
    for y in fy.min(ty)..=fy.max(ty) {
        stamp(grid, tx, y, width, edge_is_wall);
    }
}

fn stamp(grid: &mut Grid, x: u32, y: u32, width: u32, edge_is_wall: bool) {
    let lo = -((width.max(1) as i64 - 1) / 2);
    let hi = width.max(1) as i64 / 2;
    let margin = i64::from(edge_is_wall);
    let max_x = grid.width() as i64 - 1 - margin;
    let max_y = grid.height() as i64 - 1 - margin;

    for dy in lo..=hi {
        for dx in lo..=hi {
            let cx = x as i64 + dx;
            let cy = y as i64 + dy;
            if cx < margin || cy < margin || cx > max_x || cy > max_y {
                continue;
            }
            grid.set(cx as u32, cy as u32, Cell::Floor);
        }
    }
}

/// Union-find with path compression and union by size
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets holding `a` and `b`; `false` if they were already one set
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }
}
