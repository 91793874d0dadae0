//! Unit C-bill cost.

use crate::env::{EquipmentKind, EquipmentOracle};
use crate::state::Unit;

/// Total cost of `unit` in C-bills.
///
/// Ammunition costs the loaded fraction of its per-ton price, or nothing
/// when `ignore_ammo` is set. Heat sinks on the counter are priced by the
/// catalog. The sum is multiplied once by the layout's cost multiplier.
pub fn total_cost(unit: &Unit, catalog: &dyn EquipmentOracle, ignore_ammo: bool) -> f64 {
    let equipment: f64 = unit
        .mounts()
        .iter()
        .filter(|mount| !mount.is_counted_heat_sink())
        .map(|mount| match mount.kind() {
            EquipmentKind::Ammunition if ignore_ammo => 0.0,
            EquipmentKind::Ammunition => mount.equipment.cost * mount.ammo_fraction(),
            EquipmentKind::Weapon | EquipmentKind::Miscellaneous => mount.equipment.cost,
        })
        .sum();

    let heat_sinks = catalog.heat_sink_cost() * f64::from(unit.heat_sinks());

    (equipment + heat_sinks) * unit.layout().cost_multiplier
}
