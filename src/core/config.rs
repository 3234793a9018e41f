//! Map generation parameters with documented defaults
//!
//! All tunable numbers are collected here with notes on what they affect.

use serde::{Deserialize, Serialize};

use crate::core::error::{MapError, Result};
use crate::grid::Projection;

/// Parameters for one territory map generation pass
///
/// Defaults reproduce the grid the map view was tuned against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    // === GRID ===
    /// Number of columns; axial q runs over [0, width)
    pub width: i32,

    /// Number of rows; axial r runs over [0, height)
    pub height: i32,

    // === PROJECTION ===
    /// On-screen diamond width of one tile, in pixels
    ///
    /// Together with tile_height this sets the half-tile lattice scale.
    /// It changes spacing only, never ownership or border topology.
    pub tile_width: f32,

    /// On-screen diamond height of one tile, in pixels
    ///
    /// The 100x30 default gives the flattened look the tile art assumes.
    pub tile_height: f32,

    // === TERRITORY ===
    /// Claim radius around each capital, in hex distance
    ///
    /// Radius 0 claims only the capital tile itself. Disks wide enough to
    /// overlap are resolved by claim order: the later faction wins.
    pub radius: i32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            tile_width: 100.0,
            tile_height: 30.0,
            radius: 2,
        }
    }
}

impl MapConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Projection derived from the configured tile size
    pub fn projection(&self) -> Projection {
        Projection::new(self.tile_width, self.tile_height)
    }

    /// Validate parameters before any tile is created
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(MapError::InvalidDimensions(self.width, self.height));
        }
        if self.tile_width <= 0.0 || self.tile_height <= 0.0 {
            return Err(MapError::InvalidTileSize(self.tile_width, self.tile_height));
        }
        if self.radius < 0 {
            return Err(MapError::InvalidRadius(self.radius));
        }
        Ok(())
    }
}
