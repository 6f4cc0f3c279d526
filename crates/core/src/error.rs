use crate::hex::CubeCoordinate;
use derive_more::Display;

/// The concrete failures that the hex API can produce. Public functions return
/// [anyhow::Result], so to inspect the cause of a failure, downcast it:
///
/// ```
/// use hexmap::{CubeCoordinate, HexError};
///
/// let err = CubeCoordinate::new_qrs(1, 1, 1).unwrap_err();
/// assert!(matches!(
///     err.downcast_ref::<HexError>(),
///     Some(HexError::InvalidCoordinate { .. })
/// ));
/// ```
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum HexError {
    /// Three explicit cube components were given that don't sum to zero
    #[display(
        fmt = "Invalid cube coordinate ({}, {}, {}); must be on the plane q+r+s=0",
        q,
        r,
        s
    )]
    InvalidCoordinate { q: i32, r: i32, s: i32 },

    /// A hex map was asked for a tile it doesn't hold
    #[display(fmt = "No tile at {}", _0)]
    TileNotFound(CubeCoordinate),

    /// A vector was used as a direction, but it isn't one of the six unit
    /// vectors in [CubeCoordinate::DIRECTIONS]
    #[display(fmt = "{} is not one of the six canonical directions", _0)]
    NotADirection(CubeCoordinate),
}

impl std::error::Error for HexError {}
