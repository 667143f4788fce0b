//! Spawn-position queries over an emitted [`TileMap`].
//!
//! Entity spawners call [`find_valid_spawn_position`] with a candidate tile
//! and get back the world-space center of the nearest walkable tile. The
//! search expands ring by ring (Chebyshev distance 0, 1, 2, ...) from the
//! start; within a ring, tiles are visited top to bottom, left to right, and
//! the first walkable one wins.

use crate::TileMap;

/// Find the walkable tile nearest to `(start_x, start_y)`.
///
/// The start may lie outside the map. Returns `None` when the map holds no
/// walkable tile at all.
pub fn find_nearest_floor_tile(map: &TileMap, start_x: i32, start_y: i32) -> Option<(u32, u32)> {
    if map.width() == 0 || map.height() == 0 {
        return None;
    }

    let sx = start_x as i64;
    let sy = start_y as i64;
    let max_x = map.width() as i64 - 1;
    let max_y = map.height() as i64 - 1;

    // Rings closer than the map rectangle hold no tiles
    let min_radius = gap(sx, max_x).max(gap(sy, max_y));
    let max_radius = max_ring_radius(map, start_x, start_y);

    for r in min_radius..=max_radius {
        for y in (sy - r).max(0)..=(sy + r).min(max_y) {
            if (y - sy).abs() == r {
                // Top or bottom edge of the ring: every column inside the map
                for x in (sx - r).max(0)..=(sx + r).min(max_x) {
                    if let Some(found) = walkable_at(map, x, y) {
                        return Some(found);
                    }
                }
            } else {
                // Sides only
                if let Some(found) = walkable_at(map, sx - r, y) {
                    return Some(found);
                }
                if let Some(found) = walkable_at(map, sx + r, y) {
                    return Some(found);
                }
            }
        }
    }

    None
}

/// World-space center of the walkable tile nearest to `(start_x, start_y)`.
///
/// Falls back to the world-space center of the start tile itself when the
/// map has no walkable tile (for example an all-wall map).
pub fn find_valid_spawn_position(map: &TileMap, start_x: i32, start_y: i32) -> (f32, f32) {
    match find_nearest_floor_tile(map, start_x, start_y) {
        Some((x, y)) => map.tile_to_world_center(x as i32, y as i32),
        None => map.tile_to_world_center(start_x, start_y),
    }
}

/// Smallest ring radius whose square covers every tile of the map
fn max_ring_radius(map: &TileMap, start_x: i32, start_y: i32) -> i64 {
    let sx = start_x as i64;
    let sy = start_y as i64;
    let max_x = map.width() as i64 - 1;
    let max_y = map.height() as i64 - 1;
    sx.abs()
        .max((max_x - sx).abs())
        .max(sy.abs())
        .max((max_y - sy).abs())
}

/// Distance from `v` to the range `0..=max`, zero inside it
fn gap(v: i64, max: i64) -> i64 {
    (-v).max(v - max).max(0)
}

fn walkable_at(map: &TileMap, x: i64, y: i64) -> Option<(u32, u32)> {
    if x < 0 || y < 0 || x >= map.width() as i64 || y >= map.height() as i64 {
        return None;
    }
    if map.is_walkable(x as i32, y as i32) {
        Some((x as u32, y as u32))
    } else {
        None
    }
}
