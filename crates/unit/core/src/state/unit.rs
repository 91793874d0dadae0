//! The unit aggregate.
//!
//! A [`Unit`] owns its locations and the ordered list of mounts and is the
//! single source of truth for structural invariants. Equipment enters a unit
//! only through the allocation engine (see [`crate::allocation`]); weight,
//! cost and battle value are never stored and are recomputed by
//! [`crate::stats`] on demand.

use arrayvec::ArrayVec;

use super::common::{LocationId, MountId};
use super::error::StateError;
use super::layout::ChassisLayout;
use super::location::Location;
use super::mount::Mount;
use super::tech::TechLevel;
use crate::config::UnitConfig;

/// Descriptive text carried along with a unit definition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fluff {
    pub overview: Option<String>,
    pub capabilities: Option<String>,
    pub deployment: Option<String>,
    pub history: Option<String>,
    pub manufacturer: Option<String>,
    pub primary_factory: Option<String>,
}

/// A combat unit under construction or in play.
#[derive(Clone, Debug)]
pub struct Unit {
    layout: &'static ChassisLayout,
    pub chassis: String,
    pub model: String,
    pub source: Option<String>,
    pub tech_level: Option<TechLevel>,
    pub year: Option<i32>,
    pub fluff: Fluff,
    pub armor_type: Option<i32>,
    pub armor_tech: Option<i32>,
    pub has_turret: bool,
    /// Battle value declared by the definition record, overriding the computed one.
    pub manual_bv: Option<i64>,
    pub(crate) locations: ArrayVec<Location, { UnitConfig::MAX_LOCATIONS }>,
    pub(crate) mounts: Vec<Mount>,
    pub(crate) heat_sinks: u32,
    failed_equipment: Vec<String>,
    armor_tonnage: f64,
}

impl Unit {
    /// Creates an empty unit with the layout's locations and no equipment.
    pub fn new(layout: &'static ChassisLayout) -> Self {
        let locations = layout
            .locations
            .iter()
            .take(UnitConfig::MAX_LOCATIONS)
            .enumerate()
            .map(|(index, spec)| Location::new(LocationId(index as u8), spec.name, spec.slots))
            .collect();

        Self {
            layout,
            chassis: String::new(),
            model: String::new(),
            source: None,
            tech_level: None,
            year: None,
            fluff: Fluff::default(),
            armor_type: None,
            armor_tech: None,
            has_turret: layout.has_turret,
            manual_bv: None,
            locations,
            mounts: Vec::new(),
            heat_sinks: 0,
            failed_equipment: Vec::new(),
            armor_tonnage: 0.0,
        }
    }

    pub fn layout(&self) -> &'static ChassisLayout {
        self.layout
    }

    /// "Chassis Model", or just the chassis when the model is empty.
    pub fn display_name(&self) -> String {
        if self.model.is_empty() {
            self.chassis.clone()
        } else {
            format!("{} {}", self.chassis, self.model)
        }
    }

    // ------------------------------------------------------------------
    // Locations
    // ------------------------------------------------------------------

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.layout.location_id(name).and_then(|id| self.location(id))
    }

    fn location_mut(&mut self, id: LocationId) -> Result<&mut Location, StateError> {
        self.locations
            .get_mut(id.index())
            .ok_or(StateError::UnknownLocation(id))
    }

    /// Number of occupied critical slots in `id`, 0 for unknown locations.
    pub fn occupied_slots(&self, id: LocationId) -> usize {
        self.location(id).map_or(0, |loc| loc.slots.occupied())
    }

    // ------------------------------------------------------------------
    // Armor and structure
    // ------------------------------------------------------------------

    /// Sets current and original armor of one location.
    pub fn initialize_armor(&mut self, points: u32, id: LocationId) -> Result<(), StateError> {
        self.location_mut(id)?.initialize_armor(points);
        Ok(())
    }

    /// Reduces (or restores) current armor without touching the original value.
    pub fn set_armor(&mut self, points: u32, id: LocationId) -> Result<(), StateError> {
        self.location_mut(id)?.set_armor(points)
    }

    /// Initializes internal structure from the chassis layout.
    pub fn auto_set_internal(&mut self) {
        for (location, spec) in self.locations.iter_mut().zip(self.layout.locations) {
            location.initialize_internal(spec.internal);
        }
    }

    pub fn total_original_armor(&self) -> u32 {
        self.locations.iter().map(|loc| loc.armor.original).sum()
    }

    pub fn total_armor(&self) -> u32 {
        self.locations.iter().map(|loc| loc.armor.current).sum()
    }

    /// Tonnage required by the original armor, rounded up to the half ton.
    pub fn armor_weight(&self) -> f64 {
        let raw = f64::from(self.total_original_armor()) / self.layout.armor_points_per_ton;
        (raw * 2.0).ceil() / 2.0
    }

    pub fn armor_tonnage(&self) -> f64 {
        self.armor_tonnage
    }

    pub fn set_armor_tonnage(&mut self, tons: f64) {
        self.armor_tonnage = tons;
    }

    // ------------------------------------------------------------------
    // Mounts
    // ------------------------------------------------------------------

    /// Mounts in insertion order.
    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    pub fn mount_by_id(&self, id: MountId) -> Option<&Mount> {
        self.mounts.get(id.index())
    }

    fn mount_mut(&mut self, id: MountId) -> Result<&mut Mount, StateError> {
        self.mounts
            .get_mut(id.index())
            .ok_or(StateError::UnknownMount(id))
    }

    /// Mounts placed in `id`, in insertion order.
    pub fn mounts_at(&self, id: LocationId) -> impl Iterator<Item = &Mount> {
        self.mounts
            .iter()
            .filter(move |mount| mount.location.location() == Some(id))
    }

    /// Flags a mount destroyed or repaired. Used by game-state collaborators.
    pub fn set_destroyed(&mut self, id: MountId, destroyed: bool) -> Result<(), StateError> {
        self.mount_mut(id)?.destroyed = destroyed;
        Ok(())
    }

    /// Overrides the loaded and original shot counts of an ammunition mount.
    pub fn set_shots(&mut self, id: MountId, shots: u32, original: u32) -> Result<(), StateError> {
        let mount = self.mount_mut(id)?;
        if !mount.equipment.is_ammunition() {
            return Err(StateError::NotAmmunition(id));
        }
        mount.shots_left = shots;
        mount.original_shots = original;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Heat sinks and load diagnostics
    // ------------------------------------------------------------------

    pub fn heat_sinks(&self) -> u32 {
        self.heat_sinks
    }

    /// Adds heat sinks that exist without a mount (engine-integral sinks).
    pub fn add_heat_sinks(&mut self, count: u32) {
        self.heat_sinks = self.heat_sinks.saturating_add(count);
    }

    pub fn set_heat_sinks(&mut self, count: u32) {
        self.heat_sinks = count;
    }

    /// Equipment names that could not be loaded, in the order encountered.
    pub fn failed_equipment(&self) -> &[String] {
        &self.failed_equipment
    }

    pub fn add_failed_equipment(&mut self, name: impl Into<String>) {
        self.failed_equipment.push(name.into());
    }
}
