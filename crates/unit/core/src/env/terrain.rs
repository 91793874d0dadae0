use std::fmt;

/// Board query consulted by placement predicates.
///
/// The board itself lives outside this crate; units only ask whether a hex
/// carries a given terrain.
pub trait TerrainOracle: Send + Sync {
    /// Returns true when the hex at `coords` exists and contains `terrain`.
    fn contains_terrain(&self, coords: Coords, terrain: TerrainKind) -> bool;
}

/// Hex coordinates on the game board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coords {
    pub x: i32,
    pub y: i32,
}

impl Coords {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Terrain classes the construction rules care about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TerrainKind {
    Clear,
    Woods,
    Water,
    Building,
    /// Vacuum; lethal to units not rated for space operation.
    Space,
}
