use hexmap::{shape, CubeCoordinate, CubeSet, HexMap, TileDirection};

#[test]
fn test_ring_of_2() {
    let tiles = shape::ring(CubeCoordinate::ORIGIN, 2);
    assert_eq!(tiles.len(), 12);
    assert!(tiles
        .iter()
        .all(|tile| tile.distance_to(CubeCoordinate::ORIGIN) == 2));
    assert_eq!(
        tiles,
        vec![
            CubeCoordinate::new(-2, 2),
            CubeCoordinate::new(-2, 1),
            CubeCoordinate::new(-2, 0),
            CubeCoordinate::new(-1, -1),
            CubeCoordinate::new(0, -2),
            CubeCoordinate::new(1, -2),
            CubeCoordinate::new(2, -2),
            CubeCoordinate::new(2, -1),
            CubeCoordinate::new(2, 0),
            CubeCoordinate::new(1, 1),
            CubeCoordinate::new(0, 2),
            CubeCoordinate::new(-1, 2),
        ]
    );
}

#[test]
fn test_neighbors_of_origin() {
    assert_eq!(
        shape::neighbors(CubeCoordinate::ORIGIN),
        vec![
            CubeCoordinate::new(0, -1),
            CubeCoordinate::new(1, -1),
            CubeCoordinate::new(1, 0),
            CubeCoordinate::new(0, 1),
            CubeCoordinate::new(-1, 1),
            CubeCoordinate::new(-1, 0),
        ]
    );
}

/// A full turn of triangles around a tile covers the area around it, with each
/// wedge owning its own slice
#[test]
fn test_triangles_tile_the_area() {
    let center = CubeCoordinate::new(2, -4);
    let range = 5;
    let mut covered = CubeSet::default();
    let mut total = 0;
    for direction in TileDirection::CLOCKWISE {
        // Drop the center so the wedges only meet along their edges
        let wedge: Vec<_> = shape::triangle(center, direction, range)
            .into_iter()
            .filter(|tile| *tile != center)
            .collect();
        total += wedge.len();
        covered.extend(wedge);
    }
    covered.insert(center);

    let area: CubeSet = shape::area_by_distance(center, range - 1)
        .into_iter()
        .collect();
    assert_eq!(covered, area);
    // Neighboring wedges share an edge, so every spoke gets counted twice
    assert_eq!(total, area.len() - 1 + 6 * (range as usize - 1));
}

/// The use case this library exists for: combine shape output with map lookups
#[test]
fn test_shape_lookups() {
    let mut map: HexMap<&str> = HexMap::new();
    for tile in shape::area_by_distance(CubeCoordinate::ORIGIN, 4) {
        map.set(tile, "grass");
    }
    for tile in shape::line(CubeCoordinate::ORIGIN, CubeCoordinate::DIR_R, 5) {
        map.set(tile, "road");
    }

    let ring_roads = map
        .tiles_at(shape::ring(CubeCoordinate::ORIGIN, 3))
        .filter(|(_, tile)| **tile == "road")
        .count();
    assert_eq!(ring_roads, 1);

    // Rectangle corners poke out past the area, so some lookups miss
    let rectangle = shape::rectangle(CubeCoordinate::ORIGIN, 4);
    let found = map.tiles_at(rectangle.iter().copied()).count();
    assert!(found < rectangle.len());
    let in_range = rectangle
        .iter()
        .filter(|tile| tile.distance_to(CubeCoordinate::ORIGIN) <= 4)
        .count();
    assert_eq!(found, in_range);
}

#[test]
fn test_line_between_reversed() {
    let a = CubeCoordinate::new(-3, 1);
    let b = CubeCoordinate::new(5, -2);
    let forward = shape::line_between(a, b, 1.0);
    let backward = shape::line_between(b, a, 1.0);
    assert_eq!(forward.len(), backward.len());
    assert_eq!(forward.first(), backward.last());
    assert_eq!(forward.last(), backward.first());
}
