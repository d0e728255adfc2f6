//! Tests for tile kinds and their display metadata

use std::collections::HashSet;
use wavemap::tiles::{Tile, TileType};

#[test]
fn test_index_round_trips_for_every_kind() {
    for tile in TileType::ALL {
        assert_eq!(TileType::from_index(tile.index()), Some(tile));
    }
    assert_eq!(TileType::from_index(TileType::COUNT), None);
    assert_eq!(TileType::from_index(usize::MAX), None);
}

#[test]
fn test_all_lists_every_kind_once() {
    assert_eq!(TileType::ALL.len(), TileType::COUNT);
    let unique: HashSet<_> = TileType::ALL.iter().collect();
    assert_eq!(unique.len(), TileType::COUNT);
}

#[test]
fn test_symbols_are_unambiguous() {
    let symbols: HashSet<char> = TileType::ALL.iter().map(|t| t.symbol()).collect();
    assert_eq!(symbols.len(), TileType::COUNT);
}

#[test]
fn test_names_are_lowercase_and_match_display() {
    for tile in TileType::ALL {
        let name = tile.name();
        assert_eq!(name, name.to_lowercase());
        assert_eq!(tile.to_string(), name);
    }
    assert_eq!(TileType::Mountain.name(), "mountain");
}

#[test]
fn test_tile_carries_kind_and_color() {
    let tile = Tile::new(TileType::Water, [0, 100, 200]);
    assert_eq!(tile.tile_type, TileType::Water);
    assert_eq!(tile.color, [0, 100, 200]);
    assert_eq!(tile.name(), "water");
    assert_eq!(tile.to_string(), "water (#0064c8)");
}
