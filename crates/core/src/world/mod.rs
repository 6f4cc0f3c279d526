//! Conversion between continuous world-space positions and discrete hex
//! tiles. See the [crate::hex] module docs for a description of both spaces.
//!
//! All functions here take a `hex_size`, which is the distance from a tile's
//! center to any of its corners (the circumradius), in world units. It must be
//! positive. [HexLayout](crate::HexLayout) bundles a validated size if you
//! don't want to pass it around yourself.

mod unit;

pub use self::unit::*;
use crate::hex::CubeCoordinate;

/// Hex size used when the caller doesn't care: each tile has a circumradius of
/// one world unit.
pub const DEFAULT_HEX_SIZE: f64 = 1.0;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Find the tile that contains a world position. For 3D positions, height is
/// ignored.
///
/// `hex_size` is only checked in debug builds. In release builds a zero,
/// negative or NaN size gives a meaningless tile rather than an error, so if
/// the size comes from outside the program, go through
/// [HexLayout](crate::HexLayout), which validates it once up front. Positions
/// whose tile falls outside the `i32` range (infinite ones included) saturate
/// to the nearest representable component, and a NaN position gives the
/// origin.
///
/// ```
/// use hexmap::{world_to_hex, CubeCoordinate, Point2, Point3};
///
/// assert_eq!(world_to_hex(Point2::new(0.0, 0.0), 1.0), CubeCoordinate::ORIGIN);
/// assert_eq!(
///     world_to_hex(Point3::new(1.8, 50.0, 0.1), 1.0),
///     CubeCoordinate::new(1, 0)
/// );
/// ```
pub fn world_to_hex(position: impl Position, hex_size: f64) -> CubeCoordinate {
    debug_assert!(hex_size > 0.0, "hex size must be positive: {hex_size}");
    let Point2 { x, y: north } = position.ground();
    // Inverse of the pointy-top layout matrix. World north is -r, hence the
    // flipped sign on that axis
    let q = (SQRT_3 / 3.0 * x + north / 3.0) / hex_size;
    let r = (-2.0 / 3.0 * north) / hex_size;
    cube_round(q, r)
}

/// Get the world position of a tile's center, in 3D. The vertical component is
/// always 0.
pub fn hex_to_world(coordinate: CubeCoordinate, hex_size: f64) -> Point3 {
    let Point2 { x, y } = hex_to_world_2d(coordinate, hex_size);
    Point3::new(x, 0.0, y)
}

/// Get the world position of a tile's center, on the 2D ground plane
pub fn hex_to_world_2d(coordinate: CubeCoordinate, hex_size: f64) -> Point2 {
    let q = f64::from(coordinate.q());
    let r = f64::from(coordinate.r());
    Point2::new(SQRT_3 * (q + r / 2.0) * hex_size, -1.5 * r * hex_size)
}

/// Round fractional axial coordinates to the nearest tile.
///
/// Rounding each component independently can land off the plane
/// `q + r + s = 0`, so whichever component was rounded the furthest gets
/// recomputed from the other two.
/// https://www.redblobgames.com/grids/hexagons/#rounding
fn cube_round(q: f64, r: f64) -> CubeCoordinate {
    let s = -q - r;

    let mut rounded_q = q.round();
    let mut rounded_r = r.round();
    let rounded_s = s.round();

    let q_diff = (rounded_q - q).abs();
    let r_diff = (rounded_r - r).abs();
    let s_diff = (rounded_s - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rounded_q = -rounded_r - rounded_s;
    } else if s_diff > r_diff {
        // s isn't stored, so it's implicitly recomputed from q and r
    } else {
        rounded_r = -rounded_q - rounded_s;
    }

    CubeCoordinate::new(rounded_q as i32, rounded_r as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_sqrt_3() {
        assert_approx_eq!(SQRT_3, 3.0_f64.sqrt(), 1e-15);
    }

    #[test]
    fn test_hex_to_world() {
        let p = hex_to_world_2d(CubeCoordinate::new(1, 0), 1.0);
        assert_approx_eq!(p.x, SQRT_3);
        assert_approx_eq!(p.y, 0.0);

        let p = hex_to_world_2d(CubeCoordinate::new(0, -2), 2.0);
        assert_approx_eq!(p.x, -2.0 * SQRT_3);
        assert_approx_eq!(p.y, 6.0);

        let p = hex_to_world(CubeCoordinate::new(0, -2), 2.0);
        assert_approx_eq!(p.x, -2.0 * SQRT_3);
        assert_approx_eq!(p.y, 0.0);
        assert_approx_eq!(p.z, 6.0);
    }

    #[test]
    fn test_world_to_hex_centers() {
        for q in -10..=10 {
            for r in -10..=10 {
                let c = CubeCoordinate::new(q, r);
                for hex_size in [0.5, 1.0, 3.0] {
                    assert_eq!(world_to_hex(hex_to_world(c, hex_size), hex_size), c);
                    assert_eq!(
                        world_to_hex(hex_to_world_2d(c, hex_size), hex_size),
                        c
                    );
                }
            }
        }
    }

    #[test]
    fn test_world_to_hex_ignores_height() {
        let c = CubeCoordinate::new(-3, 2);
        let mut p = hex_to_world(c, 1.0);
        p.y = -1000.0;
        assert_eq!(world_to_hex(p, 1.0), c);
        assert_eq!(world_to_hex(&p, 1.0), c);
    }

    #[test]
    fn test_world_to_hex_nalgebra() {
        let c = CubeCoordinate::new(2, -5);
        let p: nalgebra::Point3<f64> = hex_to_world(c, 1.5).into();
        assert_eq!(world_to_hex(p, 1.5), c);
        let p: nalgebra::Point2<f64> = hex_to_world_2d(c, 1.5).into();
        assert_eq!(world_to_hex(p, 1.5), c);
    }

    #[test]
    fn test_world_to_hex_near_corner() {
        // Corners of the origin tile, pulled slightly towards its center.
        // Independent per-axis rounding gets some of these wrong
        for i in 0..6 {
            let angle = std::f64::consts::PI / 180.0 * (60.0 * i as f64 - 30.0);
            let p = Point2::new(0.99 * angle.cos(), 0.99 * angle.sin());
            assert_eq!(
                world_to_hex(p, 1.0),
                CubeCoordinate::ORIGIN,
                "corner {i} at {p}"
            );
        }
    }

    #[test]
    fn test_world_to_hex_out_of_range() {
        // Way past the edge of the i32 grid
        assert_eq!(
            world_to_hex(Point2::new(1e12, 0.0), 1.0),
            CubeCoordinate::new(i32::MAX, 0)
        );
        assert_eq!(
            world_to_hex(Point2::new(-1e12, 0.0), 1.0),
            CubeCoordinate::new(i32::MIN, 0)
        );
        assert_eq!(
            world_to_hex(Point2::new(f64::NAN, 0.0), 1.0),
            CubeCoordinate::ORIGIN
        );
        assert_eq!(
            world_to_hex(Point2::new(f64::INFINITY, 0.0), 1.0),
            CubeCoordinate::new(i32::MAX, 0)
        );
    }

    #[test]
    fn test_cube_round() {
        assert_eq!(cube_round(0.0, 0.0), CubeCoordinate::ORIGIN);
        assert_eq!(cube_round(0.4, 0.4), CubeCoordinate::new(0, 1));
        assert_eq!(cube_round(1.7, -0.2), CubeCoordinate::new(2, 0));
        assert_eq!(cube_round(-0.3, -0.3), CubeCoordinate::new(0, 0));
        for (q, r) in [(0.4, 0.4), (1.7, -0.2), (-2.45, 0.9), (7.51, -3.49)] {
            let c = cube_round(q, r);
            assert_eq!(i64::from(c.q()) + i64::from(c.r()) + c.s(), 0);
        }
    }
}
