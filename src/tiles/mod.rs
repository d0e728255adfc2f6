//! Tile vocabulary, adjacency rules, and preset tileset construction

/// Preset tileset factories for different terrain themes
pub mod biome;
/// Tile identifiers and display metadata
pub mod tile;
/// Adjacency constraint registry and builder
pub mod tileset;

pub use tile::{Tile, TileType};
pub use tileset::{TileSet, TileSetBuilder};
