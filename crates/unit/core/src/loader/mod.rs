//! Unit definition loader.
//!
//! Turns a parsed [`BuildingBlock`] into a fully constructed [`Unit`]:
//! metadata blocks are copied over, armor is initialized, and every
//! equipment entry is resolved against the catalog and handed to the
//! allocation engine.
//!
//! Unknown equipment names are not errors; they are recorded on the unit as
//! failed equipment. Slot overflow follows [`LoadPolicy`].

mod block;
mod directive;
mod error;

pub use block::BuildingBlock;
pub use directive::EquipmentEntry;
pub use error::LoadError;

use crate::allocation::AllocationError;
use crate::config::{LoadPolicy, LocationFullPolicy};
use crate::env::{EquipmentKind, EquipmentOracle};
use crate::state::{ChassisLayout, Fluff, LocationId, MountId, TechLevel, Unit};

/// Builds units from definition records against an injected catalog.
#[derive(Clone, Copy)]
pub struct UnitLoader<'a> {
    catalog: &'a dyn EquipmentOracle,
    layout: &'static ChassisLayout,
    policy: LoadPolicy,
}

impl<'a> UnitLoader<'a> {
    /// Creates a loader for handheld weapons with the strict policy.
    pub fn new(catalog: &'a dyn EquipmentOracle) -> Self {
        Self {
            catalog,
            layout: &ChassisLayout::HANDHELD_WEAPON,
            policy: LoadPolicy::default(),
        }
    }

    pub fn with_layout(mut self, layout: &'static ChassisLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parses `text` and loads the unit it describes.
    pub fn load_str(&self, text: &str) -> Result<Unit, LoadError> {
        self.load(&BuildingBlock::parse(text)?)
    }

    /// Loads the unit described by `record`.
    ///
    /// # Errors
    ///
    /// - `MissingBlock("name")` / `MissingBlock("armor")` for absent required blocks
    /// - `IncorrectArmorLength` when the armor block does not match the layout
    /// - `Allocation` when a location overflows under the strict policy
    pub fn load(&self, record: &BuildingBlock) -> Result<Unit, LoadError> {
        let mut unit = Unit::new(self.layout);

        unit.chassis = record
            .first_string("Name")
            .ok_or(LoadError::MissingBlock("name"))?
            .to_string();
        unit.model = record.first_string("Model").unwrap_or_default().to_string();

        self.read_metadata(record, &mut unit)?;

        if let Some(turret) = record.first_int("Turret")? {
            if turret != 1 {
                unit.has_turret = false;
            }
        }

        let armor = record
            .ints("armor")?
            .ok_or(LoadError::MissingBlock("armor"))?;
        let [points] = armor.as_slice() else {
            return Err(LoadError::IncorrectArmorLength {
                expected: 1,
                found: armor.len(),
            });
        };
        let points = u32::try_from(*points).map_err(|_| LoadError::NegativeArmor(*points))?;
        unit.initialize_armor(points, self.layout.armored_location)?;
        unit.auto_set_internal();

        unit.armor_type = record.first_int("armor_type")?;
        unit.armor_tech = record.first_int("armor_tech")?;

        if let Some(sinks) = record.first_int("heatsinks")? {
            let sinks = u32::try_from(sinks).map_err(|_| LoadError::InvalidInteger {
                block: "heatsinks".into(),
                value: sinks.to_string(),
            })?;
            unit.add_heat_sinks(sinks);
        }

        for (index, spec) in self.layout.locations.iter().enumerate() {
            let Ok(index) = u8::try_from(index) else {
                break;
            };
            self.load_equipment(record, &mut unit, spec.name, LocationId(index))?;
        }

        let armor_weight = unit.armor_weight();
        unit.set_armor_tonnage(armor_weight);

        tracing::debug!(
            unit = %unit.display_name(),
            mounts = unit.mounts().len(),
            failed = unit.failed_equipment().len(),
            "loaded unit"
        );
        Ok(unit)
    }

    fn read_metadata(&self, record: &BuildingBlock, unit: &mut Unit) -> Result<(), LoadError> {
        unit.source = record.first_string("source").map(str::to_string);
        unit.year = record.first_int("year")?;

        if let Some(text) = record.first_string("type") {
            match text.parse::<TechLevel>() {
                Ok(level) => unit.tech_level = Some(level),
                Err(err) => tracing::warn!(unit = %unit.chassis, "{err}"),
            }
        }

        if let Some(bv) = record.first_int("bv")? {
            unit.manual_bv = Some(i64::from(bv));
        }

        let text = |tag: &str| record.strings(tag).map(|lines| lines.join("\n"));
        unit.fluff = Fluff {
            overview: text("overview"),
            capabilities: text("capabilities"),
            deployment: text("deployment"),
            history: text("history"),
            manufacturer: text("manufacturer"),
            primary_factory: text("primaryFactory"),
        };
        Ok(())
    }

    fn load_equipment(
        &self,
        record: &BuildingBlock,
        unit: &mut Unit,
        location_name: &str,
        location: LocationId,
    ) -> Result<(), LoadError> {
        let Some(entries) = record.strings(&format!("{location_name} Equipment")) else {
            return Ok(());
        };

        for raw in entries {
            let entry = EquipmentEntry::parse(raw)?;
            let Some(equipment) = self.catalog.get(&entry.name) else {
                if !entry.name.is_empty() {
                    tracing::warn!(
                        unit = %unit.chassis,
                        location = location_name,
                        equipment = %entry.name,
                        "equipment not found in catalog"
                    );
                    unit.add_failed_equipment(entry.name);
                }
                continue;
            };

            let is_ammunition = equipment.is_ammunition();
            let is_linker = equipment.is_linker();
            match unit.mount(equipment, location, false) {
                Ok(id) => {
                    if let Some(shots) = entry.shots.filter(|&n| n != 0 && is_ammunition) {
                        unit.set_shots(id, shots, shots)?;
                    }
                    if is_linker {
                        link_to_preceding_weapon(unit, location, id)?;
                    }
                }
                Err(err @ AllocationError::LocationFull { .. }) => match self.policy.location_full {
                    LocationFullPolicy::Abort => return Err(err.into()),
                    LocationFullPolicy::RecordFailed => {
                        tracing::warn!(
                            unit = %unit.chassis,
                            equipment = %entry.name,
                            "{err}"
                        );
                        unit.add_failed_equipment(entry.name);
                    }
                },
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

/// Links a fire-control mount to the closest earlier weapon in the same
/// location that is not linked yet.
fn link_to_preceding_weapon(
    unit: &mut Unit,
    location: LocationId,
    linker: MountId,
) -> Result<(), LoadError> {
    let weapon = unit
        .mounts_at(location)
        .take_while(|mount| mount.id != linker)
        .filter(|mount| mount.kind() == EquipmentKind::Weapon && mount.linked.is_none())
        .map(|mount| mount.id)
        .last();

    match weapon {
        Some(weapon) => unit.link(weapon, linker)?,
        None => tracing::warn!(
            unit = %unit.chassis,
            linker = %linker,
            "fire-control equipment has no preceding weapon to link"
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EquipmentCatalog, EquipmentFlags, EquipmentType};
    use crate::state::MountLocation;
    use crate::stats;

    const GUNS: LocationId = LocationId(0);

    fn catalog() -> EquipmentCatalog {
        EquipmentCatalog::from_definitions([
            EquipmentType::weapon("Improved SRM 2", 1.0, 10000.0, 28.0).with_alias("CLImprovedSRM2"),
            EquipmentType::misc("Artemis IV FCS", 1.0, 100000.0, 0.0, EquipmentFlags::ARTEMIS_IV),
            EquipmentType::ammunition("Improved SRM 2 Ammo", 1.0, 27000.0, 3.0, 50),
            EquipmentType::heat_sink(),
        ])
        .unwrap()
    }

    fn record() -> BuildingBlock {
        BuildingBlock::new()
            .with("Name", ["Rifle"])
            .with("armor", ["32"])
    }

    #[test]
    fn loads_minimal_record() {
        let catalog = catalog();
        let unit = UnitLoader::new(&catalog).load(&record()).unwrap();

        assert_eq!(unit.chassis, "Rifle");
        assert_eq!(unit.model, "");
        assert_eq!(unit.total_original_armor(), 32);
        assert_eq!(unit.armor_tonnage(), 2.0);
        assert!(unit.mounts().is_empty());
    }

    #[test]
    fn missing_name_is_fatal() {
        let catalog = catalog();
        let record = BuildingBlock::new().with("armor", ["32"]);
        let err = UnitLoader::new(&catalog).load(&record).unwrap_err();
        assert_eq!(err, LoadError::MissingBlock("name"));
        assert_eq!(err.to_string(), "Could not find name block.");
    }

    #[test]
    fn missing_or_malformed_armor_is_fatal() {
        let catalog = catalog();
        let loader = UnitLoader::new(&catalog);

        let no_armor = BuildingBlock::new().with("Name", ["Rifle"]);
        assert_eq!(
            loader.load(&no_armor).unwrap_err(),
            LoadError::MissingBlock("armor")
        );

        let two = record().with("armor", ["10 12"]);
        let err = loader.load(&two).unwrap_err();
        assert_eq!(err, LoadError::IncorrectArmorLength { expected: 1, found: 2 });
        assert!(err.to_string().starts_with("Incorrect armor array length"));

        let negative = record().with("armor", ["-4"]);
        assert_eq!(loader.load(&negative).unwrap_err(), LoadError::NegativeArmor(-4));
    }

    #[test]
    fn shot_directive_sets_current_and_original_shots() {
        let catalog = catalog();
        let record = record().with("Guns Equipment", ["Improved SRM 2 Ammo:Shots5#"]);
        let unit = UnitLoader::new(&catalog).load(&record).unwrap();

        let ammo = &unit.mounts()[0];
        assert_eq!(ammo.name(), "Improved SRM 2 Ammo");
        assert_eq!(ammo.shots_left, 5);
        assert_eq!(ammo.original_shots, 5);
        assert_eq!(ammo.location, MountLocation::At(GUNS));
    }

    #[test]
    fn shot_directive_ignored_for_weapons_and_zero() {
        let catalog = catalog();
        let record = record().with(
            "Guns Equipment",
            ["Improved SRM 2:Shots5#", "Improved SRM 2 Ammo:Shots0#"],
        );
        let unit = UnitLoader::new(&catalog).load(&record).unwrap();

        assert_eq!(unit.mounts()[0].shots_left, 0);
        assert_eq!(unit.mounts()[1].shots_left, 50);
    }

    #[test]
    fn unknown_equipment_is_recorded_and_loading_continues() {
        let catalog = catalog();
        let record = record().with(
            "Guns Equipment",
            ["Gauss Rifle", "", "CLImprovedSRM2", "   "],
        );
        let unit = UnitLoader::new(&catalog).load(&record).unwrap();

        assert_eq!(unit.failed_equipment(), ["Gauss Rifle".to_string()]);
        assert_eq!(unit.mounts().len(), 1);
        assert_eq!(unit.mounts()[0].name(), "Improved SRM 2");
    }

    #[test]
    fn overflow_aborts_under_strict_policy() {
        let catalog = catalog();
        let record = record().with("Guns Equipment", vec!["Improved SRM 2"; 7]);
        let err = UnitLoader::new(&catalog).load(&record).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Allocation(AllocationError::LocationFull { capacity: 6, .. })
        ));
        assert!(err.to_string().contains("6 slots"));
    }

    #[test]
    fn overflow_is_recorded_under_lenient_policy() {
        let catalog = catalog();
        let record = record().with("Guns Equipment", vec!["Improved SRM 2"; 7]);
        let unit = UnitLoader::new(&catalog)
            .with_policy(LoadPolicy::LENIENT)
            .load(&record)
            .unwrap();

        assert_eq!(unit.occupied_slots(GUNS), 6);
        assert_eq!(unit.failed_equipment(), ["Improved SRM 2".to_string()]);
    }

    #[test]
    fn metadata_blocks_are_copied() {
        let catalog = catalog();
        let record = record()
            .with("Model", ["(Cannon)"])
            .with("source", ["TacOps"])
            .with("type", ["IS Level 3"])
            .with("year", ["3075"])
            .with("Turret", ["0"])
            .with("armor_type", ["0"])
            .with("armor_tech", ["1"])
            .with("bv", ["120"])
            .with("heatsinks", ["2"])
            .with("history", ["First line", "Second line"]);
        let unit = UnitLoader::new(&catalog).load(&record).unwrap();

        assert_eq!(unit.display_name(), "Rifle (Cannon)");
        assert_eq!(unit.source.as_deref(), Some("TacOps"));
        assert_eq!(unit.year, Some(3075));
        assert_eq!(
            unit.tech_level.map(|level| level.rules),
            Some(crate::state::RulesLevel::Advanced)
        );
        assert!(!unit.has_turret);
        assert_eq!(unit.armor_type, Some(0));
        assert_eq!(unit.armor_tech, Some(1));
        assert_eq!(unit.heat_sinks(), 2);
        assert_eq!(unit.fluff.history.as_deref(), Some("First line\nSecond line"));
        assert_eq!(stats::effective_battle_value(&unit), 120);
    }

    #[test]
    fn fire_control_links_to_preceding_weapon() {
        let catalog = catalog();
        let record = record().with(
            "Guns Equipment",
            ["Improved SRM 2", "Improved SRM 2", "Artemis IV FCS", "Artemis IV FCS"],
        );
        let unit = UnitLoader::new(&catalog).load(&record).unwrap();

        let mounts = unit.mounts();
        assert_eq!(mounts[1].linked, Some(mounts[2].id));
        assert_eq!(mounts[0].linked, Some(mounts[3].id));
        // (28 × 1.2) × 2 + 32 × 2
        assert_eq!(stats::battle_value(&unit), 131);
    }

    #[test]
    fn fire_control_without_weapon_stays_unlinked() {
        let catalog = catalog();
        let record = record().with("Guns Equipment", ["Artemis IV FCS", "Improved SRM 2"]);
        let unit = UnitLoader::new(&catalog).load(&record).unwrap();

        assert!(unit.mounts().iter().all(|mount| mount.linked.is_none()));
        assert_eq!(stats::battle_value(&unit), 28 + 64);
    }

    #[test]
    fn negative_heat_sink_count_is_rejected() {
        let catalog = catalog();
        let record = record().with("heatsinks", ["-2"]);
        let err = UnitLoader::new(&catalog).load(&record).unwrap_err();
        assert_eq!(
            err,
            LoadError::InvalidInteger {
                block: "heatsinks".into(),
                value: "-2".into()
            }
        );
    }

    #[test]
    fn heat_sink_entries_feed_the_counter() {
        let catalog = catalog();
        let record = record().with("Guns Equipment", ["Heat Sink", "Heat Sink", "Improved SRM 2"]);
        let unit = UnitLoader::new(&catalog).load(&record).unwrap();

        assert_eq!(unit.heat_sinks(), 2);
        assert_eq!(unit.occupied_slots(GUNS), 1);
        // 1 + 32/16 + 2
        assert_eq!(stats::total_weight(&unit), 5.0);
        assert_eq!(stats::battle_value(&unit), 92);
    }

    #[test]
    fn load_str_parses_text() {
        let catalog = catalog();
        let unit = UnitLoader::new(&catalog)
            .load_str("<Name>\nRifle\n</Name>\n<armor>\n16\n</armor>\n")
            .unwrap();
        assert_eq!(unit.total_original_armor(), 16);
    }
}
