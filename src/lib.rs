//! Marchlands - procedural territory hex maps with stitched border outlines

pub mod border;
pub mod core;
pub mod grid;
pub mod territory;
pub mod viewport;
