use thiserror::Error;

use crate::grid::HexCoord;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Invalid map dimensions: {0}x{1} (both must be positive)")]
    InvalidDimensions(i32, i32),

    #[error("Invalid tile size: {0}x{1} (both must be positive)")]
    InvalidTileSize(f32, f32),

    #[error("Invalid claim radius: {0} (must not be negative)")]
    InvalidRadius(i32),

    #[error("Capital out of bounds: {0:?} on a {1}x{2} map")]
    CapitalOutOfBounds(HexCoord, i32, i32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
