//! Exposed-edge detection along ownership boundaries

pub mod stitch;

use serde::{Deserialize, Serialize};

use crate::core::types::Faction;
use crate::grid::{EdgeDir, LatticePoint};
use crate::territory::TerritoryMap;

pub use stitch::{stitch_paths, BorderPath};

/// One exposed tile edge, oriented clockwise around its owner's territory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderEdge {
    pub owner: Faction,
    pub from: LatticePoint,
    pub to: LatticePoint,
}

/// Collect every exposed edge of every owned tile
///
/// An edge is exposed when the tile across it is missing or belongs to a
/// different owner. Neutral tiles never emit. Within one owner's set each
/// segment appears once; a contested boundary appears once per side, with
/// opposite orientation. Emission order is tile order then direction order.
pub fn extract_edges(map: &TerritoryMap) -> Vec<BorderEdge> {
    let mut edges = Vec::new();
    for tile in map.tiles() {
        let Some(owner) = tile.owner else {
            continue;
        };
        for dir in EdgeDir::ALL {
            let exposed = match map.get(dir.neighbor_of(tile.coord)) {
                None => true,
                Some(n) => n.owner != Some(owner),
            };
            if exposed {
                let (from, to) = dir.endpoints(tile.coord);
                edges.push(BorderEdge { owner, from, to });
            }
        }
    }
    edges
}

/// Extract and stitch in one call
pub fn trace_borders(map: &TerritoryMap) -> Vec<BorderPath> {
    stitch_paths(extract_edges(map))
}
