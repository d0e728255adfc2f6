//! Validates bitset operations backing possibility sets

use wavemap::algorithm::bitset::TileBitset;
use wavemap::tiles::TileType;

#[test]
fn test_insert_contains_remove() {
    let mut set = TileBitset::empty();
    assert!(set.is_empty());

    set.insert(TileType::Grass);
    set.insert(TileType::Snow);
    assert!(set.contains(TileType::Grass));
    assert!(set.contains(TileType::Snow));
    assert!(!set.contains(TileType::Water));
    assert_eq!(set.count(), 2);

    assert!(set.remove(TileType::Grass));
    assert!(!set.remove(TileType::Grass));
    assert_eq!(set.count(), 1);
}

#[test]
fn test_full_covers_every_tile_kind() {
    let set = TileBitset::full();
    assert_eq!(set.count(), TileType::COUNT);
    for tile in TileType::ALL {
        assert!(set.contains(tile));
    }
}

#[test]
fn test_intersection() {
    let a = TileBitset::from_tiles(&[TileType::Grass, TileType::Sand, TileType::Stone]);
    let b = TileBitset::from_tiles(&[TileType::Sand, TileType::Stone, TileType::Snow]);

    let both = a.intersection(&b);
    assert_eq!(both.to_vec(), vec![TileType::Sand, TileType::Stone]);

    let mut c = a.clone();
    assert!(c.intersect_with(&b));
    assert_eq!(c, both);
    // Intersecting again removes nothing
    assert!(!c.intersect_with(&b));
}

#[test]
fn test_empty_intersection() {
    let a = TileBitset::from_tiles(&[TileType::Grass]);
    let b = TileBitset::from_tiles(&[TileType::Water]);
    assert!(a.intersection(&b).is_empty());
}

#[test]
fn test_union_with() {
    let mut a = TileBitset::from_tiles(&[TileType::Grass]);
    a.union_with(&TileBitset::from_tiles(&[TileType::Water]));
    assert_eq!(a.to_vec(), vec![TileType::Grass, TileType::Water]);
}

#[test]
fn test_subset_relation() {
    let small = TileBitset::from_tiles(&[TileType::Sand]);
    let large = TileBitset::from_tiles(&[TileType::Sand, TileType::Water]);
    assert!(small.is_subset_of(&large));
    assert!(!large.is_subset_of(&small));
    assert!(large.is_subset_of(&large));
    assert!(TileBitset::empty().is_subset_of(&small));
}

#[test]
fn test_single_member() {
    let mut set = TileBitset::from_tiles(&[TileType::Forest]);
    assert_eq!(set.single(), Some(TileType::Forest));

    set.insert(TileType::Grass);
    assert_eq!(set.single(), None);
    assert_eq!(TileBitset::empty().single(), None);
}

#[test]
fn test_members_iterate_in_index_order() {
    let set: TileBitset = [TileType::Snow, TileType::Grass, TileType::Mountain]
        .into_iter()
        .collect();
    assert_eq!(
        set.to_vec(),
        vec![TileType::Grass, TileType::Mountain, TileType::Snow]
    );
}

#[test]
fn test_display_lists_member_names() {
    let set = TileBitset::from_tiles(&[TileType::Grass, TileType::Water]);
    assert_eq!(set.to_string(), "{grass, water}");
}
