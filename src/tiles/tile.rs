//! Tile identifiers and per-tile display metadata
//!
//! The identifier space is a closed enum: every grid and tileset in the
//! system draws from the same seven terrain kinds, so possibility sets can
//! be packed into fixed-width bitsets indexed by [`TileType::index`].

use std::fmt;

/// Identifier for a terrain tile kind
///
/// Totally ordered and hashable so it can key constraint tables and sort
/// deterministically in debug output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileType {
    /// Open grassland
    Grass,
    /// Deep water
    Water,
    /// Beach and riverbank sand
    Sand,
    /// Dense forest
    Forest,
    /// High mountain
    Mountain,
    /// Exposed stone
    Stone,
    /// Snow cover
    Snow,
}

impl TileType {
    /// Number of distinct tile kinds
    pub const COUNT: usize = 7;

    /// All tile kinds in index order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Grass,
        Self::Water,
        Self::Sand,
        Self::Forest,
        Self::Mountain,
        Self::Stone,
        Self::Snow,
    ];

    /// Stable zero-based index used by bitsets and weight tables
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Reverse of [`Self::index`], `None` for out-of-range values
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Grass),
            1 => Some(Self::Water),
            2 => Some(Self::Sand),
            3 => Some(Self::Forest),
            4 => Some(Self::Mountain),
            5 => Some(Self::Stone),
            6 => Some(Self::Snow),
            _ => None,
        }
    }

    /// Human-readable lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Water => "water",
            Self::Sand => "sand",
            Self::Forest => "forest",
            Self::Mountain => "mountain",
            Self::Stone => "stone",
            Self::Snow => "snow",
        }
    }

    /// Single-character symbol for text grid dumps
    ///
    /// Symbols are distinct across all kinds so a dump is unambiguous
    /// (`T` for stone and `N` for snow avoid colliding with sand).
    pub const fn symbol(self) -> char {
        match self {
            Self::Grass => 'G',
            Self::Water => 'W',
            Self::Sand => 'S',
            Self::Forest => 'F',
            Self::Mountain => 'M',
            Self::Stone => 'T',
            Self::Snow => 'N',
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A tile kind paired with its display metadata
///
/// The color is opaque to the solver and only consumed by image export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Identifier of this tile
    pub tile_type: TileType,
    /// RGB color used when rendering the finished grid
    pub color: [u8; 3],
}

impl Tile {
    /// Create a tile with the given display color
    pub const fn new(tile_type: TileType, color: [u8; 3]) -> Self {
        Self { tile_type, color }
    }

    /// Human-readable name, delegated to the tile kind
    pub const fn name(self) -> &'static str {
        self.tile_type.name()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (#{:02x}{:02x}{:02x})",
            self.name(),
            self.color[0],
            self.color[1],
            self.color[2]
        )
    }
}
