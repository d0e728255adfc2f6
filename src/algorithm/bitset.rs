use crate::tiles::TileType;
use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size set of tile kinds backed by a bit vector
///
/// One bit per [`TileType`], indexed by [`TileType::index`]. Possibility
/// sets, constraint rows, and tileset universes all use this
/// representation so propagation reduces to bitwise intersection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileBitset {
    bits: BitVec,
}

impl TileBitset {
    /// Create a set with no tiles present
    pub fn empty() -> Self {
        Self {
            bits: bitvec![0; TileType::COUNT],
        }
    }

    /// Create a set containing every tile kind
    pub fn full() -> Self {
        Self {
            bits: bitvec![1; TileType::COUNT],
        }
    }

    /// Create a set from a slice of tile kinds
    pub fn from_tiles(tiles: &[TileType]) -> Self {
        let mut set = Self::empty();
        for &tile in tiles {
            set.insert(tile);
        }
        set
    }

    /// Add a tile to the set
    pub fn insert(&mut self, tile: TileType) {
        self.bits.set(tile.index(), true);
    }

    /// Remove a tile, returning whether it was present
    pub fn remove(&mut self, tile: TileType) -> bool {
        let was_present = self.contains(tile);
        self.bits.set(tile.index(), false);
        was_present
    }

    /// Test tile membership
    pub fn contains(&self, tile: TileType) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Intersect this set with another in place, returning whether it shrank
    pub fn intersect_with(&mut self, other: &Self) -> bool {
        let before = self.count();
        self.bits &= &other.bits;
        self.count() != before
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Merge another set into this one
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether every tile in this set is also in `other`
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.intersection(other) == *self
    }

    /// The single member, if the set has been narrowed to exactly one tile
    pub fn single(&self) -> Option<TileType> {
        if self.count() == 1 {
            self.members().next()
        } else {
            None
        }
    }

    /// Iterate members in index order
    pub fn members(&self) -> impl Iterator<Item = TileType> + '_ {
        self.bits.iter_ones().filter_map(TileType::from_index)
    }

    /// Extract all members as a vector in index order
    pub fn to_vec(&self) -> Vec<TileType> {
        self.members().collect()
    }
}

impl fmt::Display for TileBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.members().map(TileType::name).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

impl FromIterator<TileType> for TileBitset {
    fn from_iter<I: IntoIterator<Item = TileType>>(iter: I) -> Self {
        let mut set = Self::empty();
        for tile in iter {
            set.insert(tile);
        }
        set
    }
}
