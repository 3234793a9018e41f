//! Axial grid coordinates, the half-tile lattice, and the screen projection
//!
//! Ownership logic runs on axial (q, r) coordinates with hex distance.
//! Border geometry runs on an integer lattice in half-tile units so edge
//! endpoints can be compared exactly; floats appear only at screen output.

use serde::{Deserialize, Serialize};

use crate::core::types::ScreenPoint;

/// Axial coordinate of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
}

impl HexCoord {
    pub fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Cube coordinate s (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Hex distance: half the Manhattan distance in cube space
    pub fn distance(&self, other: &Self) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        (dq + dr + ds) / 2
    }

    /// All 6 hex-adjacent coordinates (the distance-1 ring)
    pub fn neighbors(&self) -> [HexCoord; 6] {
        [
            HexCoord::new(self.q + 1, self.r),
            HexCoord::new(self.q + 1, self.r - 1),
            HexCoord::new(self.q, self.r - 1),
            HexCoord::new(self.q - 1, self.r),
            HexCoord::new(self.q - 1, self.r + 1),
            HexCoord::new(self.q, self.r + 1),
        ]
    }

    /// Point mirror about the center of a width x height grid
    pub fn mirrored(&self, width: i32, height: i32) -> Self {
        Self::new(width - 1 - self.q, height - 1 - self.r)
    }

    /// Lattice point of this tile's center, in half-tile units
    pub fn lattice_center(&self) -> LatticePoint {
        LatticePoint::new(self.q - self.r, self.q + self.r)
    }
}

/// Integer point on the half-tile lattice
///
/// x counts half tile widths, y counts half tile heights. Tile centers sit
/// at (q - r, q + r) and tile corners one unit away, so every border-edge
/// endpoint is representable without rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LatticePoint {
    pub x: i32,
    pub y: i32,
}

impl LatticePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// One of the four visible edges of a diamond tile
///
/// These are the axial steps that cross a drawn tile edge. Hex distance
/// uses the full six-neighbor adjacency; border exposure deliberately uses
/// only these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDir {
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl EdgeDir {
    /// All edges, clockwise on screen; a lone tile's edges chain head to tail
    pub const ALL: [EdgeDir; 4] = [
        EdgeDir::NorthEast,
        EdgeDir::SouthEast,
        EdgeDir::SouthWest,
        EdgeDir::NorthWest,
    ];

    /// Axial offset to the neighbor across this edge
    pub fn offset(&self) -> HexCoord {
        match self {
            EdgeDir::NorthEast => HexCoord::new(0, -1),
            EdgeDir::SouthEast => HexCoord::new(1, 0),
            EdgeDir::SouthWest => HexCoord::new(0, 1),
            EdgeDir::NorthWest => HexCoord::new(-1, 0),
        }
    }

    /// Coordinate of the neighbor across this edge
    pub fn neighbor_of(&self, coord: HexCoord) -> HexCoord {
        let d = self.offset();
        HexCoord::new(coord.q + d.q, coord.r + d.r)
    }

    /// Edge endpoints on the half-tile lattice, clockwise around the tile
    ///
    /// Corners relative to the tile center: top (0,-1), right (1,0),
    /// bottom (0,1), left (-1,0).
    pub fn endpoints(&self, coord: HexCoord) -> (LatticePoint, LatticePoint) {
        let c = coord.lattice_center();
        match self {
            EdgeDir::NorthEast => (c.offset(0, -1), c.offset(1, 0)),
            EdgeDir::SouthEast => (c.offset(1, 0), c.offset(0, 1)),
            EdgeDir::SouthWest => (c.offset(0, 1), c.offset(-1, 0)),
            EdgeDir::NorthWest => (c.offset(-1, 0), c.offset(0, -1)),
        }
    }
}

/// Isometric diamond projection from the grid to screen pixels
///
/// screen_x = (q - r) * tile_width / 2
/// screen_y = (q + r) * tile_height / 2
///
/// The vertical divisor is fixed at 2; only the configured tile size
/// changes the spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    half_width: f32,
    half_height: f32,
}

impl Projection {
    pub fn new(tile_width: f32, tile_height: f32) -> Self {
        Self {
            half_width: tile_width / 2.0,
            half_height: tile_height / 2.0,
        }
    }

    /// Screen position of a tile center
    pub fn tile_center(&self, coord: HexCoord) -> ScreenPoint {
        self.to_screen(coord.lattice_center())
    }

    /// Screen position of a lattice point (the only int-to-float crossing)
    pub fn to_screen(&self, p: LatticePoint) -> ScreenPoint {
        ScreenPoint::new(
            p.x as f32 * self.half_width,
            p.y as f32 * self.half_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_coord_creation() {
        let coord = HexCoord::new(5, 10);
        assert_eq!(coord.q, 5);
        assert_eq!(coord.r, 10);
        assert_eq!(coord.q + coord.r + coord.s(), 0);
    }

    #[test]
    fn test_distance_same() {
        let a = HexCoord::new(3, 3);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_distance_adjacent() {
        let a = HexCoord::new(0, 0);
        assert_eq!(a.distance(&HexCoord::new(1, 0)), 1);
        assert_eq!(a.distance(&HexCoord::new(0, 1)), 1);
        assert_eq!(a.distance(&HexCoord::new(1, -1)), 1);
    }

    #[test]
    fn test_distance_diagonal() {
        // (1,1) is two steps away in hex space, not one
        let a = HexCoord::new(0, 0);
        assert_eq!(a.distance(&HexCoord::new(1, 1)), 2);
        assert_eq!(a.distance(&HexCoord::new(2, 2)), 4);
    }

    #[test]
    fn test_neighbors_are_distance_one() {
        let coord = HexCoord::new(4, -2);
        for n in coord.neighbors() {
            assert_eq!(coord.distance(&n), 1);
        }
    }

    #[test]
    fn test_mirror_corners() {
        assert_eq!(HexCoord::new(0, 0).mirrored(3, 3), HexCoord::new(2, 2));
        assert_eq!(HexCoord::new(2, 0).mirrored(3, 3), HexCoord::new(0, 2));
        // The center of an odd grid mirrors onto itself
        assert_eq!(HexCoord::new(1, 1).mirrored(3, 3), HexCoord::new(1, 1));
    }

    #[test]
    fn test_mirror_is_involution() {
        let coord = HexCoord::new(3, 7);
        assert_eq!(coord.mirrored(15, 15).mirrored(15, 15), coord);
    }

    #[test]
    fn test_edge_neighbors_match_offsets() {
        let coord = HexCoord::new(2, 2);
        assert_eq!(EdgeDir::NorthEast.neighbor_of(coord), HexCoord::new(2, 1));
        assert_eq!(EdgeDir::SouthEast.neighbor_of(coord), HexCoord::new(3, 2));
        assert_eq!(EdgeDir::SouthWest.neighbor_of(coord), HexCoord::new(2, 3));
        assert_eq!(EdgeDir::NorthWest.neighbor_of(coord), HexCoord::new(1, 2));
    }

    #[test]
    fn test_tile_edges_chain_clockwise() {
        // Walking ALL in order traces the diamond without lifting the pen
        let coord = HexCoord::new(1, 2);
        let mut prev_end = EdgeDir::NorthWest.endpoints(coord).1;
        for dir in EdgeDir::ALL {
            let (from, to) = dir.endpoints(coord);
            assert_eq!(from, prev_end);
            assert_ne!(from, to);
            prev_end = to;
        }
    }

    #[test]
    fn test_edge_endpoints_are_unit_corners() {
        let c = HexCoord::new(0, 0).lattice_center();
        let (from, to) = EdgeDir::NorthEast.endpoints(HexCoord::new(0, 0));
        assert_eq!(from, LatticePoint::new(c.x, c.y - 1));
        assert_eq!(to, LatticePoint::new(c.x + 1, c.y));
    }

    #[test]
    fn test_projection_centers() {
        let proj = Projection::new(100.0, 30.0);
        assert_eq!(proj.tile_center(HexCoord::new(0, 0)), ScreenPoint::new(0.0, 0.0));
        assert_eq!(proj.tile_center(HexCoord::new(1, 0)), ScreenPoint::new(50.0, 15.0));
        assert_eq!(proj.tile_center(HexCoord::new(0, 1)), ScreenPoint::new(-50.0, 15.0));
        assert_eq!(proj.tile_center(HexCoord::new(1, 1)), ScreenPoint::new(0.0, 30.0));
    }

    #[test]
    fn test_lattice_to_screen_scales_half_units() {
        let proj = Projection::new(100.0, 30.0);
        let p = proj.to_screen(LatticePoint::new(3, -2));
        assert_eq!(p, ScreenPoint::new(150.0, -30.0));
    }

    proptest! {
        #[test]
        fn distance_is_symmetric(
            q1 in -50i32..50, r1 in -50i32..50,
            q2 in -50i32..50, r2 in -50i32..50,
        ) {
            let a = HexCoord::new(q1, r1);
            let b = HexCoord::new(q2, r2);
            prop_assert_eq!(a.distance(&b), b.distance(&a));
        }

        #[test]
        fn distance_is_zero_only_at_identity(
            q1 in -50i32..50, r1 in -50i32..50,
            q2 in -50i32..50, r2 in -50i32..50,
        ) {
            let a = HexCoord::new(q1, r1);
            let b = HexCoord::new(q2, r2);
            prop_assert_eq!(a.distance(&b) == 0, a == b);
        }

        #[test]
        fn distance_satisfies_triangle_inequality(
            q1 in -30i32..30, r1 in -30i32..30,
            q2 in -30i32..30, r2 in -30i32..30,
            q3 in -30i32..30, r3 in -30i32..30,
        ) {
            let a = HexCoord::new(q1, r1);
            let b = HexCoord::new(q2, r2);
            let c = HexCoord::new(q3, r3);
            prop_assert!(a.distance(&c) <= a.distance(&b) + b.distance(&c));
        }

        #[test]
        fn edge_endpoints_stay_adjacent_to_center(q in -50i32..50, r in -50i32..50) {
            let coord = HexCoord::new(q, r);
            let center = coord.lattice_center();
            for dir in EdgeDir::ALL {
                let (from, to) = dir.endpoints(coord);
                prop_assert_eq!((from.x - center.x).abs() + (from.y - center.y).abs(), 1);
                prop_assert_eq!((to.x - center.x).abs() + (to.y - center.y).abs(), 1);
            }
        }
    }
}
