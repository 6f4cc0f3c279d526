//! Generators for common groups of tiles: neighbors, lines, rings, areas, etc.
//! Every function here is pure and allocates a fresh list. None of them know
//! about any particular [HexMap](crate::HexMap), so the output can include
//! tiles that don't exist in your world; use
//! [HexMap::tiles_at](crate::HexMap::tiles_at) to filter them down.
//!
//! For functions that take a size (`range`, `radius`, `length`), negative
//! sizes produce an empty list.

use crate::{
    hex::{CubeCoordinate, TileDirection},
    world,
};
use std::{cmp, convert::TryFrom};

/// Calculate the number of tiles within `range` steps of a tile, including the
/// tile itself. Range 0 means 1 tile, 1 is 7 tiles, 2 is 19, etc. Negative
/// ranges have no tiles.
pub fn area_len(range: i32) -> usize {
    // We'll always have 3r^2+3r+1 tiles (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r tiles for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    match usize::try_from(range) {
        Ok(r) => 3 * r * r + 3 * r + 1,
        Err(_) => 0,
    }
}

/// Get the 6 tiles adjacent to `center`, in canonical direction order (see
/// [CubeCoordinate::DIRECTIONS]).
pub fn neighbors(center: CubeCoordinate) -> Vec<CubeCoordinate> {
    center.adjacents().collect()
}

/// Get every tile `center + (x, y)` where `x` and `y` are each in
/// `[-range, range]`. This is a box in axial coordinates, **not** a circle
/// (see [area_by_distance] for that), so it always has `(2*range + 1)^2`
/// tiles. In world space it looks like a rhombus.
pub fn rectangle(center: CubeCoordinate, range: i32) -> Vec<CubeCoordinate> {
    let side = usize::try_from(2 * range + 1).unwrap_or(0);
    let mut tiles = Vec::with_capacity(side * side);
    for x in -range..=range {
        for y in -range..=range {
            tiles.push(center + CubeCoordinate::new(x, y));
        }
    }
    tiles
}

/// Get `length` tiles starting at `origin` (inclusive) and stepping by
/// `direction` each time. `direction` doesn't have to be a unit vector; a
/// scaled direction gives a line that skips tiles.
pub fn line(
    origin: CubeCoordinate,
    direction: CubeCoordinate,
    length: i32,
) -> Vec<CubeCoordinate> {
    (0..length).map(|i| origin + direction * i).collect()
}

/// Get a line of tiles from `from` to `to`, inclusive on both ends. This
/// samples `distance + 1` evenly spaced points along the straight world-space
/// segment between the two tile centers and converts each one back to a tile,
/// so it works between any two tiles, not just ones that share an axis.
///
/// Returns an empty list if the two tiles are the same. Points that land
/// exactly on a tile boundary can round to the same tile as their neighbor,
/// so the output may contain a repeated tile; it's left in.
pub fn line_between(
    from: CubeCoordinate,
    to: CubeCoordinate,
    hex_size: f64,
) -> Vec<CubeCoordinate> {
    let distance = from.distance_to(to);
    if distance == 0 {
        return Vec::new();
    }

    let start = world::hex_to_world_2d(from, hex_size);
    let end = world::hex_to_world_2d(to, hex_size);
    let step = (end - start) / distance as f64;
    (0..=distance)
        .map(|i| world::world_to_hex(start + step * i as f64, hex_size))
        .collect()
}

/// Get every tile exactly `radius` steps from `center`, i.e. a hollow hexagon.
/// The walk starts at the `radius`-th tile in the [CubeCoordinate::DIR_S]
/// direction, then follows each canonical direction in order for `radius`
/// steps, so the output is `6 * radius` tiles going around clockwise.
///
/// A radius of 0 gives just `[center]`.
pub fn ring(center: CubeCoordinate, radius: i32) -> Vec<CubeCoordinate> {
    match radius.cmp(&0) {
        cmp::Ordering::Less => return Vec::new(),
        cmp::Ordering::Equal => return vec![center],
        cmp::Ordering::Greater => {}
    }

    let mut tiles = Vec::with_capacity(6 * radius as usize);
    let mut tile = center + CubeCoordinate::DIR_S * radius;
    for direction in CubeCoordinate::DIRECTIONS {
        for _ in 0..radius {
            tiles.push(tile);
            tile += direction;
        }
    }
    debug_assert_eq!(tile, center + CubeCoordinate::DIR_S * radius);
    tiles
}

/// Get a triangular wedge of tiles. One edge of the triangle is
/// `line(center, direction, range)`; from the `i`th tile on that edge, a row of
/// `i + 1` tiles extends in the direction two steps clockwise of `direction`.
/// The result has `range * (range + 1) / 2` tiles, all within `range - 1`
/// steps of `center`.
pub fn triangle(
    center: CubeCoordinate,
    direction: TileDirection,
    range: i32,
) -> Vec<CubeCoordinate> {
    let row_direction = direction.rotate(2).vector();
    line(center, direction.vector(), range)
        .into_iter()
        .zip(1..)
        .flat_map(|(row_start, row_length)| {
            line(row_start, row_direction, row_length)
        })
        .collect()
}

/// Same as [triangle], but for a direction given as a vector. Returns an error
/// if the vector isn't one of [CubeCoordinate::DIRECTIONS].
pub fn triangle_towards(
    center: CubeCoordinate,
    direction: CubeCoordinate,
    range: i32,
) -> anyhow::Result<Vec<CubeCoordinate>> {
    let direction = TileDirection::try_from(direction)?;
    Ok(triangle(center, direction, range))
}

/// Get every tile within `range` steps of `center`, including `center`. This
/// forms a filled hexagon of [area_len] tiles.
pub fn area_by_distance(
    center: CubeCoordinate,
    range: i32,
) -> Vec<CubeCoordinate> {
    let mut tiles = Vec::with_capacity(area_len(range));
    for x in -range..=range {
        // If we just do [-range, range] for y as well, then we end up with
        // a rhombus (see [rectangle]) instead of a hexagon
        // https://www.redblobgames.com/grids/hexagons/#range
        let y_min = cmp::max(-range, -x - range);
        let y_max = cmp::min(range, -x + range);
        for y in y_min..=y_max {
            tiles.push(center + CubeCoordinate::new(x, y));
        }
    }
    debug_assert_eq!(tiles.len(), area_len(range), "expected 3r²+3r+1 tiles");
    tiles
}
