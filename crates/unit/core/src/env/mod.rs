//! Traits describing read-only data the engine consumes.
//!
//! Oracles expose the equipment catalog and the board's terrain. Both are
//! injected explicitly; the engine never reaches for ambient global state.
mod catalog;
mod equipment;
mod terrain;

pub use catalog::{CatalogError, EquipmentCatalog};
pub use equipment::{EquipmentFlags, EquipmentKind, EquipmentOracle, EquipmentType};
pub use terrain::{Coords, TerrainKind, TerrainOracle};
