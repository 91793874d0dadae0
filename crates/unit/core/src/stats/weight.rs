//! Unit tonnage.

use crate::config::UnitConfig;
use crate::env::EquipmentKind;
use crate::state::Unit;

/// Slack absorbed before rounding so accumulated float error on an exact
/// half-ton total does not push it into the next half ton.
const ROUNDING_SLACK: f64 = 1e-9;

/// Rounds `tons` up to the next half ton.
pub fn ceil_half_ton(tons: f64) -> f64 {
    ((tons * 2.0) - ROUNDING_SLACK).ceil() / 2.0
}

/// Total tonnage of `unit`, rounded up to the half ton.
///
/// Ammunition weighs its remaining shots over its shots per ton, whatever
/// the descriptor's tonnage; every other mount
/// weighs its flat tonnage. Heat sinks are counted through the unit's
/// heat-sink counter instead of per mount.
pub fn total_weight(unit: &Unit) -> f64 {
    let equipment: f64 = unit
        .mounts()
        .iter()
        .filter(|mount| !mount.is_counted_heat_sink())
        .map(|mount| match mount.kind() {
            EquipmentKind::Ammunition => mount.ammo_fraction(),
            EquipmentKind::Weapon | EquipmentKind::Miscellaneous => mount.equipment.tonnage,
        })
        .sum();

    let armor = f64::from(unit.total_original_armor()) / unit.layout().armor_points_per_ton;
    let heat_sinks = f64::from(unit.heat_sinks()) * UnitConfig::HEAT_SINK_TONNAGE;

    ceil_half_ton(equipment + armor + heat_sinks)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::EquipmentType;
    use crate::state::{ChassisLayout, LocationId};

    const GUNS: LocationId = LocationId(0);

    #[test]
    fn rounds_up_to_half_ton() {
        assert_eq!(ceil_half_ton(4.0), 4.0);
        assert_eq!(ceil_half_ton(4.01), 4.5);
        assert_eq!(ceil_half_ton(4.5), 4.5);
        assert_eq!(ceil_half_ton(4.51), 5.0);
        assert_eq!(ceil_half_ton(0.0), 0.0);
    }

    #[test]
    fn ammunition_weight_ignores_descriptor_tonnage() {
        let mut unit = Unit::new(&ChassisLayout::HANDHELD_WEAPON);
        let ammo = Arc::new(EquipmentType::ammunition("Half-ton Ammo", 0.5, 10000.0, 2.0, 100));
        unit.mount(ammo, GUNS, false).unwrap();

        // 100 shots / 100 per ton
        assert_eq!(total_weight(&unit), 1.0);
    }

    #[test]
    fn exact_half_ton_sum_is_not_rounded_further() {
        let mut unit = Unit::new(&ChassisLayout::HANDHELD_WEAPON);
        for (left, per_ton) in [(2, 3), (8, 10), (1, 30)] {
            let ammo = Arc::new(EquipmentType::ammunition("Ammo", 1.0, 1.0, 1.0, per_ton));
            let id = unit.mount(ammo, GUNS, false).unwrap();
            unit.set_shots(id, left, per_ton).unwrap();
        }

        // 2/3 + 8/10 + 1/30 = 1.5
        assert_eq!(total_weight(&unit), 1.5);
    }

    #[test]
    fn empty_unit_weighs_armor_only() {
        let mut unit = Unit::new(&ChassisLayout::HANDHELD_WEAPON);
        unit.initialize_armor(8, GUNS).unwrap();
        assert_eq!(total_weight(&unit), 0.5);
    }

    #[test]
    fn ammunition_weight_tracks_shots_and_is_monotone() {
        let mut unit = Unit::new(&ChassisLayout::HANDHELD_WEAPON);
        let ammo = Arc::new(EquipmentType::ammunition("AC/20 Ammo", 1.0, 20000.0, 20.0, 5));
        let id = unit.mount(ammo, GUNS, false).unwrap();

        let mut previous = 0.0;
        for shots in 0..=5 {
            unit.set_shots(id, shots, 5).unwrap();
            let weight = total_weight(&unit);
            assert!(weight >= previous);
            assert_eq!((weight * 2.0).fract(), 0.0);
            previous = weight;
        }
        assert_eq!(previous, 1.0);

        unit.set_shots(id, 0, 5).unwrap();
        assert_eq!(total_weight(&unit), 0.0);
    }

    #[test]
    fn heat_sink_mounts_are_not_double_counted() {
        let mut unit = Unit::new(&ChassisLayout::HANDHELD_WEAPON);
        unit.mount(Arc::new(EquipmentType::heat_sink()), GUNS, false).unwrap();
        unit.add_heat_sinks(1);
        assert_eq!(unit.heat_sinks(), 2);
        assert_eq!(total_weight(&unit), 2.0);
    }
}
