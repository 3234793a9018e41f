//! Capital placement and radius-based ownership claims

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::core::config::MapConfig;
use crate::core::error::{MapError, Result};
use crate::core::types::Faction;
use crate::grid::HexCoord;
use crate::territory::TerritoryMap;

/// Generate a map with a randomly placed capital pair
///
/// The first capital is drawn uniformly from the grid; its point mirror
/// seeds the second faction. The same config and rng state reproduce the
/// same map.
pub fn generate(config: &MapConfig, rng: &mut ChaCha8Rng) -> Result<TerritoryMap> {
    config.validate()?;
    let capital = HexCoord::new(
        rng.gen_range(0..config.width),
        rng.gen_range(0..config.height),
    );
    generate_with_capital(config, capital)
}

/// Generate a map from an explicit first-faction capital
pub fn generate_with_capital(config: &MapConfig, capital: HexCoord) -> Result<TerritoryMap> {
    config.validate()?;
    if !(0..config.width).contains(&capital.q) || !(0..config.height).contains(&capital.r) {
        return Err(MapError::CapitalOutOfBounds(
            capital,
            config.width,
            config.height,
        ));
    }

    let mirror = capital.mirrored(config.width, config.height);
    if capital == mirror {
        warn!(
            "Capitals coincide at {:?}; claim order decides the owner",
            capital
        );
    }
    info!(
        "Placing capitals at {:?} and {:?} with radius {}",
        capital, mirror, config.radius
    );

    let mut map = TerritoryMap::new(config.width, config.height, config.projection());
    for (faction, seat) in Faction::ALL.into_iter().zip([capital, mirror]) {
        let claimed = claim_disk(&mut map, faction, seat, config.radius);
        debug!(
            "Faction {} claimed {} tiles around {:?}",
            faction.name(),
            claimed,
            seat
        );
    }

    Ok(map)
}

/// Claim every tile within radius of the seat for the faction
///
/// Later claims overwrite earlier ones. is_capital always tracks the
/// claiming faction's seat, so a seat swallowed by a later disk loses its
/// flag along with its owner.
fn claim_disk(map: &mut TerritoryMap, faction: Faction, seat: HexCoord, radius: i32) -> usize {
    let mut claimed = 0;
    for tile in map.tiles_mut() {
        let d = tile.coord.distance(&seat);
        if d <= radius {
            tile.owner = Some(faction);
            tile.is_capital = d == 0;
            claimed += 1;
        }
    }
    claimed
}
