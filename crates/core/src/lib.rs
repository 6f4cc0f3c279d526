//! Hexmap is a toolkit for hex tile-based worlds: a cube coordinate type, a
//! coordinate-keyed storage map, generators for common tile shapes, and
//! conversion between continuous world positions and tiles. It doesn't do any
//! rendering or game logic; it's the grid underneath those.
//!
//! ```
//! use hexmap::{shape, world_to_hex, CubeCoordinate, HexMap, Point2};
//!
//! let mut map = HexMap::new();
//! for tile in shape::area_by_distance(CubeCoordinate::ORIGIN, 3) {
//!     map.set(tile, "grass");
//! }
//! map.set(CubeCoordinate::new(2, -1), "water");
//!
//! // Which tile did the player click on?
//! let clicked = world_to_hex(Point2::new(3.4, 1.6), 1.0);
//! assert_eq!(map.try_get(clicked), Some(&"water"));
//!
//! // What's around it?
//! let around: Vec<_> = map
//!     .tiles_at(shape::neighbors(clicked))
//!     .map(|(_, tile)| *tile)
//!     .collect();
//! assert_eq!(around.len(), 6);
//! ```
//!
//! See the [hex] module for a description of the coordinate systems.

mod config;
mod error;
pub mod hex;
mod util;
pub mod world;

pub use crate::{
    config::HexLayout,
    error::HexError,
    hex::{
        shape, CubeCoordinate, CubeMap, CubeSet, HexMap, IntHexMap,
        TileDirection,
    },
    world::{
        hex_to_world, hex_to_world_2d, world_to_hex, Point2, Point3, Position,
        DEFAULT_HEX_SIZE,
    },
};
