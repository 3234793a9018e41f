//! Core type definitions used throughout the crate

use serde::{Deserialize, Serialize};

/// One of the two rival owners competing for territory
///
/// Tile ownership is `Option<Faction>`; `None` is unclaimed land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Crimson,
    Azure,
}

impl Faction {
    /// Claim order: earlier factions claim first, later ones overwrite overlap
    pub const ALL: [Faction; 2] = [Faction::Crimson, Faction::Azure];

    /// Stable lowercase name for reports and stroke colors
    pub fn name(&self) -> &'static str {
        match self {
            Faction::Crimson => "crimson",
            Faction::Azure => "azure",
        }
    }
}

/// 2D screen-space position in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for ScreenPoint {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::Sub for ScreenPoint {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for ScreenPoint {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}
