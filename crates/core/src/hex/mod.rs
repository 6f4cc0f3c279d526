//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are two coordinate systems in play:
//!
//! ### Hex Coordinates
//!
//! Hex coordinates identify individual tiles. We use the [cube coordinate
//! system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! Each coordinate has three components (`q`, `r`, and `s`), and **for every
//! tile, all three components are integers and `q + r + s = 0`.** Even though
//! the grid is two-dimensional, using three components makes the math around
//! directions, rotation and distance uniform across all six neighbors. Since
//! the third component is always derivable from the other two, only `q` and
//! `r` are stored (these two alone are known as "axial" coordinates).
//!
//! Stepping to an adjacent tile changes exactly two components, one up and one
//! down. The six single-step vectors are listed in
//! [CubeCoordinate::DIRECTIONS], and the number of steps between two tiles is
//! [CubeCoordinate::distance_to].
//!
//! ### World Coordinates
//!
//! World coordinates are continuous positions in whatever simulation or
//! rendering layer sits on top of the grid. Hex tiles lie flat on the ground
//! plane. In 2D ([Point2](crate::Point2)) that plane is `x`/`y`; in 3D
//! ([Point3](crate::Point3)) it's `x`/`z`, and `y` is height, which the grid
//! doesn't care about. Positive `x` is east and positive `y` (2D) or `z` (3D)
//! is north.
//!
//! Tiles are "pointy-topped": each tile has a vertex pointing due north and
//! due south, and flat sides facing east and west. The tile `(0, 0, 0)` is
//! centered on the world origin.
//!
//! ```text
//!          NNW   NNE
//!            \   /
//!       W ---- o ---- E
//!            /   \
//!          SSW   SSE
//! ```
//!
//! Holding `r` still and stepping `+q` moves east; holding `q` still and
//! stepping `+r` moves south-southeast. See [crate::world] for the exact
//! formulas and the conversion functions.

mod data_structure;
pub mod shape;
mod unit;

pub use self::{data_structure::*, unit::*};
