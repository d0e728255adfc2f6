use crate::algorithm::bitset::TileBitset;
use crate::tiles::TileType;
use std::fmt;

/// A single grid position and its superposition of still-possible tiles
///
/// Within one generation attempt the possibility set only ever shrinks;
/// it grows back to the full universe only through a solver-driven reset.
/// Mutators are crate-private so every change flows through the solver's
/// collapse and propagation paths.
#[derive(Debug, Clone)]
pub struct Cell {
    x: usize,
    y: usize,
    possibilities: TileBitset,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize, universe: &TileBitset) -> Self {
        Self {
            x,
            y,
            possibilities: universe.clone(),
        }
    }

    /// Column coordinate
    pub const fn x(&self) -> usize {
        self.x
    }

    /// Row coordinate
    pub const fn y(&self) -> usize {
        self.y
    }

    /// The set of tiles still possible at this position
    pub const fn possibilities(&self) -> &TileBitset {
        &self.possibilities
    }

    /// Number of remaining possibilities
    ///
    /// This raw count is the entropy measure used for cell selection; it
    /// is only ever compared, never interpreted on an absolute scale.
    pub fn entropy(&self) -> usize {
        self.possibilities.count()
    }

    /// True once exactly one possibility remains
    pub fn is_collapsed(&self) -> bool {
        self.possibilities.count() == 1
    }

    /// True when no legal assignment remains
    pub fn is_contradicted(&self) -> bool {
        self.possibilities.is_empty()
    }

    /// The chosen tile, once collapsed
    pub fn collapsed_tile(&self) -> Option<TileType> {
        self.possibilities.single()
    }

    /// Force the cell to a single tile; fails if the tile is no longer
    /// possible here
    pub(crate) fn collapse_to(&mut self, tile: TileType) -> bool {
        if !self.possibilities.contains(tile) {
            return false;
        }
        self.possibilities = TileBitset::from_tiles(&[tile]);
        true
    }

    /// Intersect with an allowed set, returning whether anything was removed
    pub(crate) fn restrict_to(&mut self, allowed: &TileBitset) -> bool {
        self.possibilities.intersect_with(allowed)
    }

    /// Restore the full universe of possibilities
    pub(crate) fn reset(&mut self, universe: &TileBitset) {
        self.possibilities = universe.clone();
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.collapsed_tile() {
            Some(tile) => write!(f, "[{}]", tile.symbol()),
            None => write!(f, "({})", self.entropy()),
        }
    }
}
