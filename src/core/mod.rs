pub mod config;
pub mod error;
pub mod types;

pub use config::MapConfig;
pub use error::{MapError, Result};
pub use types::{Faction, ScreenPoint};
