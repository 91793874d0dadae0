//! Derived statistics.
//!
//! Weight, cost and battle value are pure functions of a [`Unit`]. They are
//! NOT stored - always recomputed from the current mounts, so they stay
//! correct after any mutation.

mod battle_value;
mod cost;
mod weight;

pub use battle_value::{battle_value, effective_battle_value, linker_multiplier};
pub use cost::total_cost;
pub use weight::{ceil_half_ton, total_weight};

use crate::env::{EquipmentKind, EquipmentOracle};
use crate::state::{Mount, MountId, Unit};

/// One mounted item as it appears in a [`UnitReport`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MountReport {
    pub id: MountId,
    pub name: String,
    pub kind: EquipmentKind,
    /// Location name, `None` for mounts kept in the unassigned pool.
    pub location: Option<String>,
    pub rear_mounted: bool,
    pub shots_left: u32,
    pub original_shots: u32,
    pub destroyed: bool,
    pub linked: Option<MountId>,
}

impl MountReport {
    fn new(unit: &Unit, mount: &Mount) -> Self {
        Self {
            id: mount.id,
            name: mount.name().to_string(),
            kind: mount.kind(),
            location: mount
                .location
                .location()
                .and_then(|id| unit.location(id))
                .map(|location| location.name.clone()),
            rear_mounted: mount.rear_mounted,
            shots_left: mount.shots_left,
            original_shots: mount.original_shots,
            destroyed: mount.destroyed,
            linked: mount.linked,
        }
    }
}

/// One-shot snapshot of a unit's derived statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitReport {
    pub name: String,
    pub weight: f64,
    pub cost: f64,
    pub cost_without_ammo: f64,
    pub battle_value: i64,
    pub heat_sinks: u32,
    pub armor: u32,
    pub mounts: usize,
    pub equipment: Vec<MountReport>,
    pub failed_equipment: Vec<String>,
}

impl UnitReport {
    pub fn compute(unit: &Unit, catalog: &dyn EquipmentOracle) -> Self {
        Self {
            name: unit.display_name(),
            weight: total_weight(unit),
            cost: total_cost(unit, catalog, false),
            cost_without_ammo: total_cost(unit, catalog, true),
            battle_value: effective_battle_value(unit),
            heat_sinks: unit.heat_sinks(),
            armor: unit.total_original_armor(),
            mounts: unit.mounts().len(),
            equipment: unit
                .mounts()
                .iter()
                .map(|mount| MountReport::new(unit, mount))
                .collect(),
            failed_equipment: unit.failed_equipment().to_vec(),
        }
    }
}
