//! Preset tilesets for common terrain themes
//!
//! Each factory returns a fresh, independent [`TileSet`]; nothing here is
//! shared or mutable, so callers may customize one instance without
//! affecting another. Tables are closed over their own keys and symmetric,
//! which keeps construction infallible.

use crate::tiles::tile::TileType;
use crate::tiles::tileset::TileSet;

/// RGB display color for each tile kind, shared by all presets
const fn color_of(tile: TileType) -> [u8; 3] {
    match tile {
        TileType::Grass => [34, 139, 34],
        TileType::Water => [0, 100, 200],
        TileType::Sand => [238, 203, 173],
        TileType::Forest => [0, 100, 0],
        TileType::Mountain => [139, 137, 137],
        TileType::Stone => [105, 105, 105],
        TileType::Snow => [255, 250, 250],
    }
}

/// Full seven-tile terrain set
///
/// Water only touches sand, snow only touches high ground, and the
/// remaining kinds blend through grass and stone.
pub fn terrain() -> TileSet {
    TileSet::from_table(&[
        (
            TileType::Grass,
            color_of(TileType::Grass),
            &[
                TileType::Grass,
                TileType::Forest,
                TileType::Mountain,
                TileType::Sand,
                TileType::Stone,
            ],
        ),
        (
            TileType::Water,
            color_of(TileType::Water),
            &[TileType::Water, TileType::Sand],
        ),
        (
            TileType::Sand,
            color_of(TileType::Sand),
            &[
                TileType::Sand,
                TileType::Water,
                TileType::Grass,
                TileType::Stone,
            ],
        ),
        (
            TileType::Forest,
            color_of(TileType::Forest),
            &[
                TileType::Forest,
                TileType::Grass,
                TileType::Mountain,
                TileType::Stone,
            ],
        ),
        (
            TileType::Mountain,
            color_of(TileType::Mountain),
            &[
                TileType::Mountain,
                TileType::Grass,
                TileType::Forest,
                TileType::Stone,
                TileType::Snow,
            ],
        ),
        (
            TileType::Stone,
            color_of(TileType::Stone),
            &[
                TileType::Stone,
                TileType::Mountain,
                TileType::Grass,
                TileType::Forest,
                TileType::Sand,
            ],
        ),
        (
            TileType::Snow,
            color_of(TileType::Snow),
            &[TileType::Snow, TileType::Mountain, TileType::Stone],
        ),
    ])
}

/// Coastal subset: water, sand, grass, and forest
pub fn ocean() -> TileSet {
    TileSet::from_table(&[
        (
            TileType::Water,
            color_of(TileType::Water),
            &[TileType::Water, TileType::Sand],
        ),
        (
            TileType::Sand,
            color_of(TileType::Sand),
            &[TileType::Sand, TileType::Water, TileType::Grass],
        ),
        (
            TileType::Grass,
            color_of(TileType::Grass),
            &[TileType::Grass, TileType::Sand, TileType::Forest],
        ),
        (
            TileType::Forest,
            color_of(TileType::Forest),
            &[TileType::Forest, TileType::Grass],
        ),
    ])
}

/// Highland subset: grass through forest and stone up to snow
pub fn mountain() -> TileSet {
    TileSet::from_table(&[
        (
            TileType::Grass,
            color_of(TileType::Grass),
            &[TileType::Grass, TileType::Forest, TileType::Stone],
        ),
        (
            TileType::Forest,
            color_of(TileType::Forest),
            &[TileType::Forest, TileType::Grass, TileType::Mountain],
        ),
        (
            TileType::Mountain,
            color_of(TileType::Mountain),
            &[
                TileType::Mountain,
                TileType::Forest,
                TileType::Stone,
                TileType::Snow,
            ],
        ),
        (
            TileType::Stone,
            color_of(TileType::Stone),
            &[TileType::Stone, TileType::Mountain, TileType::Grass],
        ),
        (
            TileType::Snow,
            color_of(TileType::Snow),
            &[TileType::Snow, TileType::Mountain],
        ),
    ])
}
