//! Battle value.

use crate::config::UnitConfig;
use crate::env::{EquipmentFlags, EquipmentKind};
use crate::state::{Mount, Unit};

/// Battle value of `unit`, rounded half up.
///
/// Destroyed mounts contribute nothing. Weapons add their base value,
/// boosted by a linked fire-control system; ammunition adds the loaded
/// fraction of its value; mine dispensers add their full value; other
/// miscellaneous equipment adds nothing. Original armor adds two points each.
pub fn battle_value(unit: &Unit) -> i64 {
    let equipment: f64 = unit
        .mounts()
        .iter()
        .filter(|mount| !mount.destroyed)
        .map(|mount| mount_battle_value(unit, mount))
        .sum();

    let armor = f64::from(unit.total_original_armor()) * UnitConfig::BV_PER_ARMOR_POINT;

    round_half_up(equipment + armor)
}

/// The manual battle value when the unit declares one, otherwise [`battle_value`].
pub fn effective_battle_value(unit: &Unit) -> i64 {
    unit.manual_bv.unwrap_or_else(|| battle_value(unit))
}

fn mount_battle_value(unit: &Unit, mount: &Mount) -> f64 {
    let base = mount.equipment.battle_value;
    match mount.kind() {
        EquipmentKind::Weapon => base * linker_multiplier(unit, mount),
        EquipmentKind::Ammunition => base * mount.ammo_fraction(),
        EquipmentKind::Miscellaneous if mount.equipment.is_mine_dispenser() => base,
        EquipmentKind::Miscellaneous => 0.0,
    }
}

/// Multiplier granted to `weapon` by its linked mount.
///
/// Only an intact miscellaneous linker counts; each linker flag it carries
/// compounds in table order.
pub fn linker_multiplier(unit: &Unit, weapon: &Mount) -> f64 {
    let Some(linker) = weapon.linked.and_then(|id| unit.mount_by_id(id)) else {
        return 1.0;
    };
    if linker.destroyed || linker.kind() != EquipmentKind::Miscellaneous {
        return 1.0;
    }

    EquipmentFlags::LINKER_BONUSES
        .iter()
        .filter(|(flag, _)| linker.equipment.has_flag(*flag))
        .fold(1.0, |multiplier, (_, bonus)| multiplier * bonus)
}

/// Slack absorbed before rounding so a sum that should land on x.5 still
/// rounds up despite accumulated float error.
const ROUNDING_SLACK: f64 = 1e-9;

fn round_half_up(value: f64) -> i64 {
    (value + 0.5 + ROUNDING_SLACK).floor() as i64
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::env::EquipmentType;
    use crate::state::{ChassisLayout, LocationId, MountId};

    const GUNS: LocationId = LocationId(0);

    fn unit() -> Unit {
        Unit::new(&ChassisLayout::HANDHELD_WEAPON)
    }

    fn weapon(bv: f64) -> Arc<EquipmentType> {
        Arc::new(EquipmentType::weapon("LRM 10", 5.0, 100000.0, bv))
    }

    fn linker(flags: EquipmentFlags) -> Arc<EquipmentType> {
        Arc::new(EquipmentType::misc("FCS", 1.0, 100000.0, 0.0, flags))
    }

    fn linked_pair(unit: &mut Unit, bv: f64, flags: EquipmentFlags) -> (MountId, MountId) {
        let w = unit.mount(weapon(bv), GUNS, false).unwrap();
        let l = unit.mount(linker(flags), GUNS, false).unwrap();
        unit.link(w, l).unwrap();
        (w, l)
    }

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_half_up(91.5), 92);
        assert_eq!(round_half_up(91.49), 91);
        assert_eq!(round_half_up(92.0), 92);
    }

    #[test]
    fn fractional_ammo_sum_on_half_rounds_up() {
        let mut unit = unit();
        for (left, per_ton) in [(2, 3), (8, 10), (1, 30)] {
            let ammo = Arc::new(EquipmentType::ammunition("Ammo", 1.0, 1.0, 1.0, per_ton));
            let id = unit.mount(ammo, GUNS, false).unwrap();
            unit.set_shots(id, left, per_ton).unwrap();
        }

        // 2/3 + 8/10 + 1/30 = 1.5
        assert_eq!(battle_value(&unit), 2);
    }

    #[test]
    fn each_linker_flag_has_its_own_bonus() {
        for (flag, expected) in [
            (EquipmentFlags::ARTEMIS_IV, 120),
            (EquipmentFlags::ARTEMIS_V, 130),
            (EquipmentFlags::APOLLO, 115),
            (EquipmentFlags::PROTO_ARTEMIS, 125),
        ] {
            let mut u = unit();
            linked_pair(&mut u, 100.0, flag);
            assert_eq!(battle_value(&u), expected, "{flag:?}");
        }
    }

    #[test]
    fn flags_on_one_linker_compound_in_order() {
        let mut u = unit();
        linked_pair(
            &mut u,
            100.0,
            EquipmentFlags::ARTEMIS_IV | EquipmentFlags::APOLLO,
        );
        // 100 × 1.2 × 1.15 = 138
        assert_eq!(battle_value(&u), 138);
    }

    #[test]
    fn destroyed_linker_gives_no_bonus() {
        let mut u = unit();
        let (_, l) = linked_pair(&mut u, 100.0, EquipmentFlags::ARTEMIS_V);
        u.set_destroyed(l, true).unwrap();
        assert_eq!(battle_value(&u), 100);
    }

    #[test]
    fn destroyed_mounts_contribute_nothing_and_toggle_back() {
        let mut u = unit();
        u.initialize_armor(10, GUNS).unwrap();
        let w = u.mount(weapon(28.0), GUNS, false).unwrap();
        let a = u
            .mount(
                Arc::new(EquipmentType::ammunition("LRM 10 Ammo", 1.0, 30000.0, 11.0, 12)),
                GUNS,
                false,
            )
            .unwrap();

        let intact = battle_value(&u);
        assert_eq!(intact, 28 + 11 + 20);

        u.set_destroyed(w, true).unwrap();
        u.set_destroyed(a, true).unwrap();
        assert_eq!(battle_value(&u), 20);

        u.set_destroyed(w, false).unwrap();
        u.set_destroyed(a, false).unwrap();
        assert_eq!(battle_value(&u), intact);
    }

    #[test]
    fn ammunition_and_misc_contributions() {
        let mut u = unit();
        let ammo = u
            .mount(
                Arc::new(EquipmentType::ammunition("AC/5 Ammo", 1.0, 4500.0, 9.0, 20)),
                GUNS,
                false,
            )
            .unwrap();
        u.set_shots(ammo, 10, 20).unwrap();
        u.mount(
            Arc::new(EquipmentType::misc(
                "Mine Dispenser",
                0.5,
                20000.0,
                8.0,
                EquipmentFlags::MINE_DISPENSER,
            )),
            GUNS,
            false,
        )
        .unwrap();
        u.mount(Arc::new(EquipmentType::heat_sink()), GUNS, false).unwrap();
        u.mount(linker(EquipmentFlags::empty()), GUNS, false).unwrap();

        // 9 × 0.5 + 8 = 12.5 -> 13
        assert_eq!(battle_value(&u), 13);
    }

    #[test]
    fn manual_value_overrides_computed() {
        let mut u = unit();
        u.initialize_armor(10, GUNS).unwrap();
        assert_eq!(effective_battle_value(&u), 20);
        u.manual_bv = Some(150);
        assert_eq!(effective_battle_value(&u), 150);
        assert_eq!(battle_value(&u), 20);
    }
}
