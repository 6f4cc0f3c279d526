//! This sub-module contains the basic units of the hex coordinate system:
//! coordinates and directions. See the parent module documentation for more
//! info on the coordinate system.

use crate::HexError;
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use log::debug;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

/// A single hex tile, in cube coordinates. See module-level documentation for
/// a description of the coordinate system.
///
/// ## Implementation
///
/// Every tile falls on the plane `q + r + s = 0`, so this struct only needs to
/// store `q` and `r` and can derive `s` as needed. This also means it's
/// impossible to construct a coordinate that breaks the invariant: the only
/// constructor that accepts an explicit `s` ([Self::new_qrs]) validates it.
///
/// Equality and hashing only consider `q` and `r`, which is exactly the stored
/// state.
///
/// Arithmetic is available through the standard operators (`a + b`, `a - b`,
/// `a * k`, `-a`, `+=`, `-=`) as well as the named methods [Self::scale] and
/// [Self::negate]. All of them are componentwise on `q` and `r`, with `s`
/// re-derived, so results always stay on the plane.
///
/// Any pair of `i32`s is a valid tile. The derived `s` can fall outside the
/// `i32` range (e.g. `q = i32::MIN, r = 0`), so it's an `i64`, and
/// [Self::distance_to] is computed in `i64` as well.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Mul,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct CubeCoordinate {
    q: i32,
    r: i32,
}

impl CubeCoordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Unit vector along the `q` axis
    pub const DIR_Q: Self = Self::new(0, -1);
    /// Unit vector along the `r` axis
    pub const DIR_R: Self = Self::new(1, 0);
    /// Unit vector along the `s` axis
    pub const DIR_S: Self = Self::new(-1, 1);

    /// All six single-step directions. The order here matters! Ring walks and
    /// direction rotation both index into this list positionally. In world
    /// space, this goes clockwise starting from north-northwest; see
    /// [TileDirection] for the named version of each entry.
    pub const DIRECTIONS: [Self; 6] = [
        Self::DIR_Q,
        Self::DIR_S.negate(),
        Self::DIR_R,
        Self::DIR_Q.negate(),
        Self::DIR_S,
        Self::DIR_R.negate(),
    ];

    /// Construct a new coordinate with the given q and r. Since q+r+s=0 for
    /// all tiles, we can derive s from q & r.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a new coordinate from all three cube components. Returns an
    /// error if they don't fall on the plane `q + r + s = 0`.
    pub fn new_qrs(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(HexError::InvalidCoordinate { q, r, s }.into())
        } else {
            Ok(Self::new(q, r))
        }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    /// Derived third component. Widened since `-q - r` doesn't always fit in
    /// an `i32`.
    pub const fn s(&self) -> i64 {
        -(self.q as i64) - (self.r as i64)
    }

    /// Multiply both components by `factor`. Same as `self * factor`.
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.q * factor, self.r * factor)
    }

    /// Flip this coordinate through the origin. Same as `-self`.
    pub const fn negate(self) -> Self {
        Self::new(-self.q, -self.r)
    }

    /// Get one of the six canonical directions by its index in
    /// [Self::DIRECTIONS].
    ///
    /// **Out-of-range indices are clamped, not rejected.** Anything below 0
    /// gives the first direction and anything above 5 gives the last, so a
    /// caller can't tell a clamped index from an exact one. If you need that
    /// distinction, index [Self::DIRECTIONS] directly.
    pub fn direction(index: i32) -> Self {
        let clamped = index.clamp(0, Self::DIRECTIONS.len() as i32 - 1);
        if clamped != index {
            debug!("Direction index {} clamped to {}", index, clamped);
        }
        Self::DIRECTIONS[clamped as usize]
    }

    /// If this coordinate is one of the canonical directions, get its index in
    /// [Self::DIRECTIONS]. `None` for any other vector.
    pub fn direction_index(self) -> Option<usize> {
        Self::DIRECTIONS.iter().position(|dir| *dir == self)
    }

    /// Treat this coordinate as a direction and rotate it by `amount` steps
    /// through [Self::DIRECTIONS]. Positive amounts move forward through the
    /// list (clockwise), negative amounts move backward, and every multiple
    /// of 6 is a full turn. Returns an error if this isn't a canonical
    /// direction.
    pub fn rotate_direction(self, amount: i32) -> anyhow::Result<Self> {
        let direction = TileDirection::try_from(self)?;
        Ok(direction.rotate(amount).vector())
    }

    /// Get the tile adjacent to this one in the given direction
    pub fn adjacent(self, direction: TileDirection) -> Self {
        self + direction.vector()
    }

    /// Get an iterator of all the tiles directly adjacent to this one, in
    /// canonical direction order. The iterator will always contain exactly 6
    /// values.
    pub fn adjacents(self) -> impl Iterator<Item = Self> {
        TileDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the tiles are equal,
    /// 1 if they're adjacent, 2 if there is 1 tile between them, etc.
    pub fn distance_to(self, other: Self) -> u64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = self.s() - other.s();
        (dq.unsigned_abs() + dr.unsigned_abs() + ds.unsigned_abs())
            // Each step moves exactly two components by one
            / 2
    }
}

/// The 6 directions in which hexes line up side-to-side. For any given tile, a
/// tile direction points from its center to the center of a neighbor.
///
/// Names are compass headings in world space, where positive `y` (2D) or `z`
/// (3D) is north. Variants are declared in the same order as
/// [CubeCoordinate::DIRECTIONS], which is clockwise starting from
/// north-northwest, so iteration order (via [strum::IntoEnumIterator]) is the
/// canonical order too.
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    EnumString,
    StrumDisplay,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TileDirection {
    /// North-northwest, `(0, -1, 1)`
    NNW,
    /// North-northeast, `(1, -1, 0)`
    NNE,
    /// East, `(1, 0, -1)`
    E,
    /// South-southeast, `(0, 1, -1)`
    SSE,
    /// South-southwest, `(-1, 1, 0)`
    SSW,
    /// West, `(-1, 0, 1)`
    W,
}

impl TileDirection {
    /// All directions, in clockwise order starting at north-northwest
    pub const CLOCKWISE: [Self; 6] =
        [Self::NNW, Self::NNE, Self::E, Self::SSE, Self::SSW, Self::W];

    /// Get the index of this direction within the clockwise ordering. This is
    /// also its index in [CubeCoordinate::DIRECTIONS].
    pub const fn clockwise_index(self) -> usize {
        match self {
            Self::NNW => 0,
            Self::NNE => 1,
            Self::E => 2,
            Self::SSE => 3,
            Self::SSW => 4,
            Self::W => 5,
        }
    }

    /// Get the unit vector that moves a tile one step in this direction
    pub const fn vector(self) -> CubeCoordinate {
        CubeCoordinate::DIRECTIONS[self.clockwise_index()]
    }

    /// Rotate clockwise by `amount` sixths of a turn. Negative amounts rotate
    /// counter-clockwise.
    pub fn rotate(self, amount: i32) -> Self {
        let len = Self::CLOCKWISE.len() as i32;
        // rem_euclid (not %) so negative amounts wrap around to the front.
        // Reduce the amount before adding so huge values can't overflow
        let index = (self.clockwise_index() as i32 + amount.rem_euclid(len))
            .rem_euclid(len);
        Self::CLOCKWISE[index as usize]
    }

    /// Get the direction directly opposite this one
    pub fn opposite(self) -> Self {
        self.rotate(3)
    }
}

impl From<TileDirection> for CubeCoordinate {
    fn from(direction: TileDirection) -> Self {
        direction.vector()
    }
}

impl TryFrom<CubeCoordinate> for TileDirection {
    type Error = anyhow::Error;

    fn try_from(value: CubeCoordinate) -> Result<Self, Self::Error> {
        value
            .direction_index()
            .map(|index| Self::CLOCKWISE[index])
            .ok_or_else(|| HexError::NotADirection(value).into())
    }
}
