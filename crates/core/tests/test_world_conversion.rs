use assert_approx_eq::assert_approx_eq;
use hexmap::{
    hex_to_world, hex_to_world_2d, world_to_hex, CubeCoordinate, HexLayout,
    Point2, Point3,
};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

const SEED: u64 = 0x6865_786d_6170;

#[test]
fn test_origin() {
    assert_eq!(world_to_hex(Point2::new(0.0, 0.0), 1.0), CubeCoordinate::ORIGIN);
    assert_eq!(
        world_to_hex(Point3::new(0.0, 0.0, 0.0), 1.0),
        CubeCoordinate::ORIGIN
    );
    let p = hex_to_world(CubeCoordinate::ORIGIN, 1.0);
    assert_approx_eq!(p.x, 0.0);
    assert_approx_eq!(p.z, 0.0);
}

/// Adjacent tile centers are always sqrt(3) * size apart
#[test]
fn test_neighbor_spacing() {
    let size = 2.0;
    let center = CubeCoordinate::new(3, -7);
    let center_pos = hex_to_world_2d(center, size);
    for neighbor in center.adjacents() {
        let distance = center_pos.distance_to(hex_to_world_2d(neighbor, size));
        assert_approx_eq!(distance, 3.0_f64.sqrt() * size);
    }
}

/// The 2D and 3D conversions agree on the ground plane
#[test]
fn test_2d_matches_3d() {
    for tile in hexmap::shape::area_by_distance(CubeCoordinate::ORIGIN, 5) {
        let p2 = hex_to_world_2d(tile, 1.5);
        let p3 = hex_to_world(tile, 1.5);
        assert_approx_eq!(p2.x, p3.x);
        assert_approx_eq!(p2.y, p3.z);
        assert_eq!(p3.y, 0.0);
    }
}

/// For random positions, the chosen tile's center should be the closest center
/// to the position, and within one circumradius of it. Converting that center
/// back gives the same tile.
#[test]
fn test_random_positions() {
    let mut rng = Pcg64::seed_from_u64(SEED);
    for _ in 0..10_000 {
        let hex_size: f64 = rng.gen_range(0.1..5.0);
        let position =
            Point2::new(rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0));

        let tile = world_to_hex(position, hex_size);
        let center = hex_to_world_2d(tile, hex_size);
        let distance = position.distance_to(center);
        assert!(
            distance <= hex_size + 1e-9,
            "{position} is {distance} from center of {tile} (size {hex_size})"
        );

        for neighbor in tile.adjacents() {
            let neighbor_distance =
                position.distance_to(hex_to_world_2d(neighbor, hex_size));
            assert!(
                distance <= neighbor_distance + 1e-9,
                "{position} is closer to {neighbor} than {tile}"
            );
        }

        assert_eq!(world_to_hex(center, hex_size), tile);
    }
}

#[test]
fn test_layout() {
    let mut rng = Pcg64::seed_from_u64(SEED);
    let layout = HexLayout::new(0.75).unwrap();
    for _ in 0..1000 {
        let tile = CubeCoordinate::new(
            rng.gen_range(-1000..1000),
            rng.gen_range(-1000..1000),
        );
        let mut position = layout.hex_to_world(tile);
        // Height doesn't matter
        position.y = rng.gen_range(-10.0..10.0);
        assert_eq!(layout.world_to_hex(position), tile);
    }
}
