//! Adjacency constraint registry for tile kinds
//!
//! A [`TileSet`] is immutable after construction. The adjacency relation is
//! stored symmetrically: builders and preset tables insert both directions
//! of every pair, and [`TileSet::can_be_adjacent`] canonically reads
//! `b ∈ constraints[a]`. Customization happens by building a new set, never
//! by mutating a shared default, so two solvers can hold independently
//! configured tilesets safely.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, WfcError};
use crate::tiles::tile::{Tile, TileType};
use std::collections::HashMap;

/// Immutable registry of tiles and their pairwise adjacency compatibility
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: HashMap<TileType, Tile>,
    compatibility: Vec<TileBitset>,
    universe: TileBitset,
}

impl TileSet {
    /// Start building a tileset from scratch
    pub fn builder() -> TileSetBuilder {
        TileSetBuilder::new()
    }

    /// Construct from a preset table of `(tile, color, neighbors)` rows
    ///
    /// Both directions of every listed pair are inserted, so the resulting
    /// relation is symmetric by construction. Only used by the biome
    /// presets, whose tables are closed over their own keys.
    pub(crate) fn from_table(entries: &[(TileType, [u8; 3], &[TileType])]) -> Self {
        let mut tiles = HashMap::new();
        let mut compatibility = vec![TileBitset::empty(); TileType::COUNT];

        for &(tile_type, color, _) in entries {
            tiles.insert(tile_type, Tile::new(tile_type, color));
        }

        for &(tile_type, _, neighbors) in entries {
            for &neighbor in neighbors {
                if let Some(row) = compatibility.get_mut(tile_type.index()) {
                    row.insert(neighbor);
                }
                if let Some(row) = compatibility.get_mut(neighbor.index()) {
                    row.insert(tile_type);
                }
            }
        }

        let universe = tiles.keys().copied().collect();
        Self {
            tiles,
            compatibility,
            universe,
        }
    }

    /// Test whether a tile kind belongs to this tileset's universe
    pub fn contains(&self, tile: TileType) -> bool {
        self.tiles.contains_key(&tile)
    }

    /// Look up a tile's display metadata
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::UnknownTile`] if the tile is not in this
    /// tileset's universe
    pub fn tile(&self, tile: TileType) -> Result<&Tile> {
        self.tiles
            .get(&tile)
            .ok_or(WfcError::UnknownTile { tile })
    }

    /// Number of tile kinds in the universe
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The set of all tile kinds this tileset defines
    pub const fn universe(&self) -> &TileBitset {
        &self.universe
    }

    /// Test whether two tiles may occupy neighboring cells
    ///
    /// The relation is symmetric, so the argument order does not matter;
    /// the implementation reads the constraint row of `a`.
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::UnknownTile`] if either tile is outside the
    /// universe
    pub fn can_be_adjacent(&self, a: TileType, b: TileType) -> Result<bool> {
        self.ensure_known(a)?;
        self.ensure_known(b)?;
        Ok(self
            .compatibility
            .get(a.index())
            .is_some_and(|row| row.contains(b)))
    }

    /// All tiles allowed next to the given tile
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::UnknownTile`] if the tile is outside the
    /// universe
    pub fn valid_neighbors(&self, tile: TileType) -> Result<&TileBitset> {
        self.ensure_known(tile)?;
        self.compatibility
            .get(tile.index())
            .ok_or(WfcError::UnknownTile { tile })
    }

    /// Union of allowed neighbors over every member of a possibility set
    ///
    /// This is the support computed during propagation: a neighboring cell
    /// may keep exactly the tiles in this union. Tiles outside the universe
    /// contribute nothing.
    pub fn allowed_neighbors_of_set(&self, possibilities: &TileBitset) -> TileBitset {
        let mut allowed = TileBitset::empty();
        for tile in possibilities.members() {
            if let Some(row) = self.compatibility.get(tile.index()) {
                allowed.union_with(row);
            }
        }
        allowed
    }

    fn ensure_known(&self, tile: TileType) -> Result<()> {
        if self.contains(tile) {
            Ok(())
        } else {
            Err(WfcError::UnknownTile { tile })
        }
    }
}

/// Composable constructor for [`TileSet`] values
///
/// Collects tiles and symmetric adjacency pairs, then validates that every
/// constrained tile was actually registered.
#[derive(Debug, Default)]
pub struct TileSetBuilder {
    tiles: Vec<Tile>,
    pairs: Vec<(TileType, TileType)>,
}

impl TileSetBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tile with its display color
    #[must_use]
    pub fn tile(mut self, tile_type: TileType, color: [u8; 3]) -> Self {
        self.tiles.push(Tile::new(tile_type, color));
        self
    }

    /// Allow `a` and `b` to be adjacent (both directions)
    #[must_use]
    pub fn allow(mut self, a: TileType, b: TileType) -> Self {
        self.pairs.push((a, b));
        self
    }

    /// Allow `tile` to sit next to each listed neighbor
    #[must_use]
    pub fn allow_each(mut self, tile: TileType, neighbors: &[TileType]) -> Self {
        for &neighbor in neighbors {
            self.pairs.push((tile, neighbor));
        }
        self
    }

    /// Finalize the tileset
    ///
    /// # Errors
    ///
    /// Returns [`WfcError::InvalidTileSet`] if no tiles were registered or
    /// an adjacency pair references an unregistered tile
    pub fn build(self) -> Result<TileSet> {
        if self.tiles.is_empty() {
            return Err(WfcError::InvalidTileSet {
                reason: "tileset must register at least one tile".to_string(),
            });
        }

        let mut tiles = HashMap::new();
        for tile in self.tiles {
            tiles.insert(tile.tile_type, tile);
        }

        let mut compatibility = vec![TileBitset::empty(); TileType::COUNT];
        for (a, b) in self.pairs {
            for tile in [a, b] {
                if !tiles.contains_key(&tile) {
                    return Err(WfcError::InvalidTileSet {
                        reason: format!("adjacency pair references unregistered tile '{tile}'"),
                    });
                }
            }
            if let Some(row) = compatibility.get_mut(a.index()) {
                row.insert(b);
            }
            if let Some(row) = compatibility.get_mut(b.index()) {
                row.insert(a);
            }
        }

        let universe = tiles.keys().copied().collect();
        Ok(TileSet {
            tiles,
            compatibility,
            universe,
        })
    }
}
