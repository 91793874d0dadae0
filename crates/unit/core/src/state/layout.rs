//! Static chassis descriptions.

use bitflags::bitflags;

use super::common::LocationId;

bitflags! {
    /// Unit type lineage, most general family first.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct UnitTypeFlags: u32 {
        const TANK            = 1 << 0;
        const GUN_EMPLACEMENT = 1 << 1;
        const HANDHELD_WEAPON = 1 << 2;
        const AEROSPACE       = 1 << 3;
    }
}

/// One location of a chassis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocationSpec {
    pub name: &'static str,
    pub slots: usize,
    /// Internal structure points, `None` when the type has none.
    pub internal: Option<u32>,
}

/// Everything that differs between unit types for construction purposes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChassisLayout {
    pub name: &'static str,
    pub unit_type: UnitTypeFlags,
    pub locations: &'static [LocationSpec],
    /// Location that carries the armor declared by a definition record.
    pub armored_location: LocationId,
    pub armor_points_per_ton: f64,
    /// Applied once to the summed equipment cost.
    pub cost_multiplier: f64,
    pub has_turret: bool,
}

impl ChassisLayout {
    /// Weapon carried by a mech's hand actuators: a single six-slot "Guns"
    /// location with armor but no internal structure.
    pub const HANDHELD_WEAPON: Self = Self {
        name: "Handheld Weapon",
        unit_type: UnitTypeFlags::TANK
            .union(UnitTypeFlags::GUN_EMPLACEMENT)
            .union(UnitTypeFlags::HANDHELD_WEAPON),
        locations: &[LocationSpec {
            name: "Guns",
            slots: 6,
            internal: None,
        }],
        armored_location: LocationId(0),
        armor_points_per_ton: 16.0,
        cost_multiplier: 2.0,
        has_turret: false,
    };

    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|spec| spec.name.eq_ignore_ascii_case(name))
            .and_then(|index| u8::try_from(index).ok())
            .map(LocationId)
    }

    /// Every unit type except aerospace craft dies in vacuum.
    pub fn doomed_in_space(&self) -> bool {
        !self.unit_type.contains(UnitTypeFlags::AEROSPACE)
    }
}
