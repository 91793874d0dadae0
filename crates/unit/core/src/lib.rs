//! Unit construction and equipment allocation rules.
//!
//! `unit-core` defines how combat units are built: their locations and
//! critical slots, the rules that decide where equipment may be mounted, and
//! the formulas that roll mounted equipment up into weight, cost and battle
//! value. All equipment enters a [`Unit`] through the allocation engine
//! ([`Unit::mount`]); the equipment catalog is injected through
//! [`EquipmentOracle`] and never held as global state.
pub mod allocation;
pub mod config;
pub mod env;
pub mod error;
pub mod loader;
pub mod placement;
pub mod state;
pub mod stats;

pub use allocation::{AllocationError, MountRequest, requires_slot};
pub use config::{LoadPolicy, LocationFullPolicy, UnitConfig};
pub use env::{
    CatalogError, Coords, EquipmentCatalog, EquipmentFlags, EquipmentKind, EquipmentOracle,
    EquipmentType, TerrainKind, TerrainOracle,
};
pub use error::{ConstructionError, ErrorSeverity};
pub use loader::{BuildingBlock, EquipmentEntry, LoadError, UnitLoader};
pub use placement::is_location_prohibited;
pub use state::{
    ArmorMeter, ChassisLayout, CriticalSlot, Fluff, Location, LocationId, LocationSpec, Mount,
    MountId, MountLocation, RulesLevel, SlotArray, StateError, TechBase, TechLevel, Unit,
    UnitTypeFlags,
};
pub use stats::{MountReport, UnitReport, battle_value, effective_battle_value, total_cost, total_weight};
