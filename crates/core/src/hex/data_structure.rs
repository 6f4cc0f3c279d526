use crate::{hex::CubeCoordinate, HexError};
use fnv::FnvBuildHasher;
use log::trace;
use std::{
    collections::{hash_map, HashMap, HashSet},
    iter::FromIterator,
};

/// A set of cube coordinates
pub type CubeSet = HashSet<CubeCoordinate, FnvBuildHasher>;
/// A map of cube coordinates to some `T`. This is the raw storage behind
/// [HexMap]; prefer [HexMap] unless you need the full `HashMap` API.
pub type CubeMap<T> = HashMap<CubeCoordinate, T, FnvBuildHasher>;

/// A hex map with integer tile values
pub type IntHexMap = HexMap<i32>;

/// A collection of tile values, keyed by their coordinate. There is no notion
/// of world bounds here: any coordinate is a valid key, including far-flung
/// ones, and tiles don't need to be contiguous. Use the functions in
/// [crate::hex::shape] to generate sets of keys, and [Self::tiles_at] to look
/// them all up at once.
///
/// Not internally synchronized. Mutation needs `&mut self`, so sharing a map
/// between threads means wrapping it in your own lock.
#[derive(Clone, Debug)]
pub struct HexMap<T> {
    tiles: CubeMap<T>,
}

impl<T> HexMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self {
            tiles: CubeMap::default(),
        }
    }

    /// Create an empty map with room for at least `capacity` tiles
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tiles: CubeMap::with_capacity_and_hasher(
                capacity,
                FnvBuildHasher::default(),
            ),
        }
    }

    /// Create a map with one tile for each of the given coordinates, e.g. the
    /// output of one of the [shape](crate::hex::shape) functions.
    /// `initializer` is called once per coordinate to produce its value. If a
    /// coordinate appears more than once, the last value wins.
    pub fn from_shape(
        coordinates: impl IntoIterator<Item = CubeCoordinate>,
        initializer: impl Fn(CubeCoordinate) -> T,
    ) -> Self {
        coordinates
            .into_iter()
            .map(|coordinate| (coordinate, initializer(coordinate)))
            .collect()
    }

    /// Insert a value for a tile, replacing whatever was there. Returns the old
    /// value, if any.
    pub fn set(&mut self, coordinate: CubeCoordinate, value: T) -> Option<T> {
        self.tiles.insert(coordinate, value)
    }

    /// Get the value for a tile. Returns an error if there is no such tile, so
    /// only use this when the tile is known to exist. Otherwise use
    /// [Self::try_get].
    pub fn get(&self, coordinate: CubeCoordinate) -> anyhow::Result<&T> {
        self.tiles
            .get(&coordinate)
            .ok_or_else(|| HexError::TileNotFound(coordinate).into())
    }

    /// Get the value for a tile, or `None` if it isn't in the map
    pub fn try_get(&self, coordinate: CubeCoordinate) -> Option<&T> {
        self.tiles.get(&coordinate)
    }

    /// Mutable version of [Self::try_get]
    pub fn try_get_mut(&mut self, coordinate: CubeCoordinate) -> Option<&mut T> {
        self.tiles.get_mut(&coordinate)
    }

    /// Is there a value for this tile?
    pub fn tile_exists(&self, coordinate: CubeCoordinate) -> bool {
        self.tiles.contains_key(&coordinate)
    }

    /// Remove a tile from the map, returning its value if it was present
    pub fn remove(&mut self, coordinate: CubeCoordinate) -> Option<T> {
        self.tiles.remove(&coordinate)
    }

    /// Collect references to every value in the map. Order is unspecified.
    pub fn get_all(&self) -> Vec<&T> {
        self.values().collect()
    }

    /// Iterate over every value in the map. Order is unspecified.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.tiles.values()
    }

    /// Iterate over every `(coordinate, value)` pair in the map. Order is
    /// unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (CubeCoordinate, &T)> {
        self.tiles.iter().map(|(coordinate, value)| (*coordinate, value))
    }

    /// Look up each of the given coordinates, skipping any that aren't in the
    /// map. Output order follows input order. This is the bridge between shape
    /// queries and map contents, e.g. "everything in the ring around this
    /// tile":
    ///
    /// ```
    /// use hexmap::{shape, CubeCoordinate, HexMap};
    ///
    /// let mut map = HexMap::new();
    /// map.set(CubeCoordinate::new(0, -2), "tree");
    /// map.set(CubeCoordinate::new(5, 5), "rock");
    /// let ring = shape::ring(CubeCoordinate::ORIGIN, 2);
    /// let found: Vec<_> = map.tiles_at(ring).map(|(_, v)| *v).collect();
    /// assert_eq!(found, vec!["tree"]);
    /// ```
    pub fn tiles_at<'a, I>(
        &'a self,
        coordinates: I,
    ) -> impl Iterator<Item = (CubeCoordinate, &'a T)> + 'a
    where
        I: IntoIterator<Item = CubeCoordinate>,
        I::IntoIter: 'a,
    {
        coordinates.into_iter().filter_map(move |coordinate| {
            self.try_get(coordinate).map(|value| (coordinate, value))
        })
    }

    /// Map this collection into a new collection by applying the given
    /// function to each value. Coordinates are unchanged.
    pub fn map<U>(self, f: impl Fn(T) -> U) -> HexMap<U> {
        self.tiles.into_iter().map(|(k, v)| (k, f(v))).collect()
    }

    /// Remove every tile. The map stays usable afterwards.
    pub fn clear(&mut self) {
        trace!("Clearing {} tiles from hex map", self.tiles.len());
        self.tiles.clear();
    }

    /// Get the number of tiles in the map
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

// Derive would require T: Default
impl<T> Default for HexMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(CubeCoordinate, T)> for HexMap<T> {
    fn from_iter<I: IntoIterator<Item = (CubeCoordinate, T)>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<(CubeCoordinate, T)> for HexMap<T> {
    fn extend<I: IntoIterator<Item = (CubeCoordinate, T)>>(&mut self, iter: I) {
        self.tiles.extend(iter);
    }
}

impl<T> IntoIterator for HexMap<T> {
    type Item = (CubeCoordinate, T);
    type IntoIter = hash_map::IntoIter<CubeCoordinate, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.into_iter()
    }
}
