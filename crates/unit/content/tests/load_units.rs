//! Loads unit definition files from disk through the content loaders.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unit_content::{ContentFactory, UnitFileLoader};
use unit_core::{
    AllocationError, EquipmentCatalog, LoadError, LocationId, UnitLoader, UnitReport,
};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn shipped_catalog() -> EquipmentCatalog {
    ContentFactory::new(data_dir()).load_catalog().unwrap()
}

fn write_unit(dir: &Path, file: &str, equipment: &[&str]) -> PathBuf {
    let path = dir.join(file);
    let body = format!(
        "<Name>\nTest Rifle\n</Name>\n<armor>\n32\n</armor>\n<Guns Equipment>\n{}\n</Guns Equipment>\n",
        equipment.join("\n")
    );
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn reference_rifle_report() {
    let factory = ContentFactory::new(data_dir());
    let catalog = factory.load_catalog().unwrap();
    let loader = UnitLoader::new(&catalog).with_policy(factory.load_config().unwrap().load);

    let unit = factory.load_unit("rifle", &loader).unwrap();
    let report = UnitReport::compute(&unit, &catalog);

    assert_eq!(report.name, "Rifle (Improved SRM)");
    assert_eq!(report.weight, 5.0);
    assert_eq!(report.cost, (10000.0 + 2.0 * 2000.0) * 2.0);
    assert_eq!(report.battle_value, 92);
    assert_eq!(report.heat_sinks, 2);
    assert!(report.failed_equipment.is_empty());
    assert_eq!(unit.occupied_slots(LocationId(0)), 1);
    assert_eq!(report.equipment.len(), 3);
    assert_eq!(report.equipment[0].location.as_deref(), Some("Guns"));
}

#[test]
fn fire_control_in_file_boosts_weapon() {
    let dir = TempDir::new().unwrap();
    let plain = write_unit(dir.path(), "plain.blk", &["ISSRM6"]);
    let linked = write_unit(dir.path(), "linked.blk", &["ISSRM6", "ISArtemisIV"]);
    let catalog = shipped_catalog();
    let loader = UnitLoader::new(&catalog);

    let plain = UnitReport::compute(&UnitFileLoader::load(&plain, &loader).unwrap(), &catalog);
    let linked = UnitReport::compute(&UnitFileLoader::load(&linked, &loader).unwrap(), &catalog);

    assert_eq!(linked.equipment[0].linked, Some(linked.equipment[1].id));
    // 59 + 64 vs 59 × 1.2 + 64
    assert_eq!(plain.battle_value, 123);
    assert_eq!(linked.battle_value, 135);
}

#[test]
fn every_shipped_unit_loads_cleanly() {
    let catalog = shipped_catalog();
    let loader = UnitLoader::new(&catalog);

    let results = UnitFileLoader::load_dir(&data_dir().join("units"), &loader).unwrap();
    assert!(!results.is_empty());
    for (path, unit) in results {
        let unit = unit.unwrap_or_else(|e| panic!("{}: {e:#}", path.display()));
        assert!(unit.failed_equipment().is_empty(), "{}", path.display());
        let weight = unit_core::total_weight(&unit);
        assert_eq!(weight * 2.0, (weight * 2.0).round());
    }
}

#[test]
fn seventh_weapon_fails_citing_capacity() {
    let dir = TempDir::new().unwrap();
    let path = write_unit(dir.path(), "overloaded.blk", &["ISMediumLaser"; 7]);
    let catalog = shipped_catalog();

    let err = UnitFileLoader::load(&path, &UnitLoader::new(&catalog)).unwrap_err();

    assert!(format!("{err:#}").contains("6 slots"));
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::Allocation(AllocationError::LocationFull { capacity: 6, .. }))
    ));
}

#[test]
fn lenient_config_records_overflow() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[load]\nlocation_full = \"record_failed\"\n",
    )
    .unwrap();
    fs::create_dir(dir.path().join("units")).unwrap();
    fs::copy(data_dir().join("equipment.ron"), dir.path().join("equipment.ron")).unwrap();
    write_unit(&dir.path().join("units"), "overloaded.blk", &["ISMediumLaser"; 7]);

    let factory = ContentFactory::new(dir.path());
    let catalog = factory.load_catalog().unwrap();
    let loader = UnitLoader::new(&catalog).with_policy(factory.load_config().unwrap().load);
    let unit = factory.load_unit("overloaded", &loader).unwrap();

    assert_eq!(unit.mounts().len(), 6);
    assert_eq!(unit.failed_equipment(), ["ISMediumLaser".to_string()]);
}

#[test]
fn unknown_equipment_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let path = write_unit(dir.path(), "gauss.blk", &["Gauss Rifle", "ISMediumLaser"]);
    let catalog = shipped_catalog();

    let unit = UnitFileLoader::load(&path, &UnitLoader::new(&catalog)).unwrap();
    let report = UnitReport::compute(&unit, &catalog);

    assert_eq!(report.failed_equipment, ["Gauss Rifle".to_string()]);
    assert_eq!(report.mounts, 1);
}

#[test]
fn shot_directive_reduces_ammo_weight_and_cost() {
    let dir = TempDir::new().unwrap();
    let full = write_unit(dir.path(), "full.blk", &["ISSRM6", "ISSRM6Ammo"]);
    let partial = write_unit(dir.path(), "partial.blk", &["ISSRM6", "ISSRM6Ammo:Shots5#"]);
    let catalog = shipped_catalog();
    let loader = UnitLoader::new(&catalog);

    let full = UnitFileLoader::load(&full, &loader).unwrap();
    let partial = UnitFileLoader::load(&partial, &loader).unwrap();

    let ammo = &partial.mounts()[1];
    assert_eq!(ammo.name(), "SRM 6 Ammo");
    assert_eq!((ammo.shots_left, ammo.original_shots), (5, 5));

    let full = UnitReport::compute(&full, &catalog);
    let partial = UnitReport::compute(&partial, &catalog);
    assert!(partial.weight <= full.weight);
    assert!(partial.cost < full.cost);
    assert_eq!(partial.cost_without_ammo, full.cost_without_ammo);
}

#[test]
fn load_dir_keeps_going_past_bad_files() {
    let dir = TempDir::new().unwrap();
    write_unit(dir.path(), "b_good.blk", &["ISMediumLaser"]);
    fs::write(dir.path().join("a_broken.blk"), "<Name>\nBroken\n</Name>\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "not a unit").unwrap();
    let catalog = shipped_catalog();

    let results = UnitFileLoader::load_dir(dir.path(), &UnitLoader::new(&catalog)).unwrap();

    let names: Vec<_> = results
        .iter()
        .map(|(path, _)| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a_broken.blk", "b_good.blk"]);

    let broken = results[0].1.as_ref().unwrap_err();
    assert_eq!(
        broken.downcast_ref::<LoadError>(),
        Some(&LoadError::MissingBlock("armor"))
    );
    assert!(results[1].1.is_ok());
}

#[test]
fn missing_unit_file_is_an_error() {
    let catalog = shipped_catalog();
    let factory = ContentFactory::new(data_dir());
    let err = factory
        .load_unit("does_not_exist", &UnitLoader::new(&catalog))
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read file"));
}
