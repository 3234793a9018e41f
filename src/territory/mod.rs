//! Tiles and the generated territory map

pub mod generator;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{Faction, ScreenPoint};
use crate::grid::{HexCoord, Projection};

pub use generator::{generate, generate_with_capital};

/// Ground type of a tile
///
/// A single kind for now; the asset convention leaves room for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    #[default]
    Grass,
}

impl Terrain {
    /// Sprite path for this terrain, relative to the asset root
    pub fn asset_path(&self) -> &'static str {
        match self {
            Terrain::Grass => "assets/tiles/grass.png",
        }
    }
}

/// One cell of the territory map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub coord: HexCoord,
    pub terrain: Terrain,
    /// None is unclaimed land
    pub owner: Option<Faction>,
    pub is_capital: bool,
    /// Projected center, fixed at generation time
    pub screen: ScreenPoint,
}

impl Tile {
    fn new(coord: HexCoord, projection: &Projection) -> Self {
        Self {
            coord,
            terrain: Terrain::Grass,
            owner: None,
            is_capital: false,
            screen: projection.tile_center(coord),
        }
    }

    /// Sprite path for this tile
    pub fn asset_path(&self) -> &'static str {
        self.terrain.asset_path()
    }
}

/// Dense rectangular map of tiles with O(1) coordinate lookup
///
/// Tiles are stored in generation order (r outer, q inner); the index maps
/// each coordinate to its storage slot so neighbor checks never scan.
#[derive(Debug, Clone)]
pub struct TerritoryMap {
    width: i32,
    height: i32,
    projection: Projection,
    tiles: Vec<Tile>,
    index: AHashMap<HexCoord, usize>,
}

impl TerritoryMap {
    /// Build an all-neutral map; ownership is assigned by the generator
    pub(crate) fn new(width: i32, height: i32, projection: Projection) -> Self {
        let capacity = (width * height) as usize;
        let mut tiles = Vec::with_capacity(capacity);
        let mut index = AHashMap::with_capacity(capacity);
        for r in 0..height {
            for q in 0..width {
                let coord = HexCoord::new(q, r);
                index.insert(coord, tiles.len());
                tiles.push(Tile::new(coord, &projection));
            }
        }
        Self {
            width,
            height,
            projection,
            tiles,
            index,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Projection the tiles were laid out with
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// True if the coordinate lies inside the rectangular bounds
    pub fn contains(&self, coord: HexCoord) -> bool {
        coord.q >= 0 && coord.q < self.width && coord.r >= 0 && coord.r < self.height
    }

    pub fn get(&self, coord: HexCoord) -> Option<&Tile> {
        self.index.get(&coord).map(|&i| &self.tiles[i])
    }

    /// All tiles in generation order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Capital tile of a faction, if it kept one after the claim phase
    pub fn capital_of(&self, faction: Faction) -> Option<&Tile> {
        self.tiles
            .iter()
            .find(|t| t.is_capital && t.owner == Some(faction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_map(width: i32, height: i32) -> TerritoryMap {
        TerritoryMap::new(width, height, Projection::new(100.0, 30.0))
    }

    #[test]
    fn test_map_is_dense_and_neutral() {
        let map = test_map(4, 3);
        assert_eq!(map.len(), 12);
        assert!(map.tiles().iter().all(|t| t.owner.is_none() && !t.is_capital));
    }

    #[test]
    fn test_generation_order_is_row_major() {
        let map = test_map(3, 2);
        let coords: Vec<(i32, i32)> = map.tiles().iter().map(|t| (t.coord.q, t.coord.r)).collect();
        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_index_lookup_matches_storage() {
        let map = test_map(5, 5);
        for tile in map.tiles() {
            let found = map.get(tile.coord).unwrap();
            assert_eq!(found.coord, tile.coord);
        }
        assert!(map.get(HexCoord::new(5, 0)).is_none());
        assert!(map.get(HexCoord::new(-1, 2)).is_none());
    }

    #[test]
    fn test_contains_matches_bounds() {
        let map = test_map(3, 3);
        assert!(map.contains(HexCoord::new(0, 0)));
        assert!(map.contains(HexCoord::new(2, 2)));
        assert!(!map.contains(HexCoord::new(3, 2)));
        assert!(!map.contains(HexCoord::new(0, -1)));
    }

    #[test]
    fn test_tile_screen_positions() {
        let map = test_map(2, 2);
        let tile = map.get(HexCoord::new(1, 0)).unwrap();
        assert_eq!(tile.screen, ScreenPoint::new(50.0, 15.0));
    }

    #[test]
    fn test_asset_path_follows_terrain() {
        let map = test_map(1, 1);
        assert_eq!(map.tiles()[0].asset_path(), "assets/tiles/grass.png");
    }
}
