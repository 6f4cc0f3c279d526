use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, Mul, MulAssign, Neg, Sub,
    SubAssign,
};
use serde::{Deserialize, Serialize};

/// A point on the 2D ground plane in world space. `x` is east and `y` is
/// north. See module-level docs in [crate::hex] for how this lines up with
/// hex coordinates.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A point in 3D world space. `x` is east, `y` is up and `z` is north, so the
/// ground plane is `x`/`z`. Hex tiles have no height, so `y` is ignored when
/// converting to a hex and is always 0 when converting from one.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", x, y, z)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Anything that has a position on the world's ground plane. This is the input
/// type for [world_to_hex](crate::world_to_hex), so you can pass in positions
/// from whatever math library your simulation or renderer uses. Implement it
/// for your own types as needed.
pub trait Position {
    /// Project this position onto the ground plane, discarding any height
    fn ground(&self) -> Point2;
}

impl Position for Point2 {
    fn ground(&self) -> Point2 {
        *self
    }
}

impl Position for Point3 {
    fn ground(&self) -> Point2 {
        Point2::new(self.x, self.z)
    }
}

impl Position for nalgebra::Point2<f64> {
    fn ground(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl Position for nalgebra::Point3<f64> {
    fn ground(&self) -> Point2 {
        Point2::new(self.x, self.z)
    }
}

impl<P: Position> Position for &P {
    fn ground(&self) -> Point2 {
        (*self).ground()
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(other: Point2) -> Self {
        Self::new(other.x, other.y)
    }
}

impl From<nalgebra::Point3<f64>> for Point3 {
    fn from(other: nalgebra::Point3<f64>) -> Self {
        Self::new(other.x, other.y, other.z)
    }
}

impl From<Point3> for nalgebra::Point3<f64> {
    fn from(other: Point3) -> Self {
        Self::new(other.x, other.y, other.z)
    }
}

impl From<Point3> for Point2 {
    fn from(other: Point3) -> Self {
        other.ground()
    }
}
