use crate::{
    hex::{shape, CubeCoordinate},
    world::{self, Point2, Point3, Position, DEFAULT_HEX_SIZE},
};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that ties the hex grid to world space. Use this instead of
/// the free functions in [crate::world] when the hex size comes from outside
/// (a config file, user input, etc.), so it only needs to be validated once.
///
/// Deserializing does **not** validate. Either construct via [Self::new] or
/// call [Validate::validate] yourself after loading.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HexLayout {
    /// Distance from the center of a tile to any of its corners, in world
    /// units. Tiles are pointy-topped, so two adjacent tile centers are
    /// `sqrt(3) * hex_size` apart.
    #[validate(range(min = 0.0001, max = 1000000.0))]
    pub hex_size: f64,
}

impl HexLayout {
    /// Create a layout, returning an error if the hex size is out of range
    pub fn new(hex_size: f64) -> anyhow::Result<Self> {
        // NaN slips through range validation, since every comparison is false
        if hex_size.is_nan() {
            bail!("invalid hex layout: hex size cannot be NaN");
        }
        let layout = Self { hex_size };
        layout.validate().context("invalid hex layout")?;
        Ok(layout)
    }

    /// See [world::world_to_hex]
    pub fn world_to_hex(&self, position: impl Position) -> CubeCoordinate {
        world::world_to_hex(position, self.hex_size)
    }

    /// See [world::hex_to_world]
    pub fn hex_to_world(&self, coordinate: CubeCoordinate) -> Point3 {
        world::hex_to_world(coordinate, self.hex_size)
    }

    /// See [world::hex_to_world_2d]
    pub fn hex_to_world_2d(&self, coordinate: CubeCoordinate) -> Point2 {
        world::hex_to_world_2d(coordinate, self.hex_size)
    }

    /// See [shape::line_between]
    pub fn line_between(
        &self,
        from: CubeCoordinate,
        to: CubeCoordinate,
    ) -> Vec<CubeCoordinate> {
        shape::line_between(from, to, self.hex_size)
    }
}

impl Default for HexLayout {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
        }
    }
}
