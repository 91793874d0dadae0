//! Placement predicates consumed by movement and deployment code.

use crate::env::{Coords, TerrainKind, TerrainOracle};
use crate::state::Unit;

/// Returns true when `unit` may not occupy the hex at `coords`.
///
/// A hex is prohibited when it is open space and the unit type is not rated
/// for space operation. Vacuum is hostile at every elevation, so `elevation`
/// does not change the outcome.
pub fn is_location_prohibited(
    unit: &Unit,
    board: &dyn TerrainOracle,
    coords: Coords,
    _elevation: i32,
) -> bool {
    board.contains_terrain(coords, TerrainKind::Space) && unit.layout().doomed_in_space()
}
