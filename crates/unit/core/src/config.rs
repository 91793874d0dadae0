/// Construction constants and tunable load parameters.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UnitConfig {
    /// Policy applied by the record loader while mounting equipment lists.
    pub load: LoadPolicy,
}

impl UnitConfig {
    // ===== compile-time constants used as type parameters =====
    /// Largest slot array any location may declare.
    pub const MAX_CRITICAL_SLOTS: usize = 12;
    /// Largest number of locations a chassis layout may declare.
    pub const MAX_LOCATIONS: usize = 8;

    // ===== rules constants =====
    /// Battle value granted per original armor point.
    pub const BV_PER_ARMOR_POINT: f64 = 2.0;
    /// Tonnage of a single heat sink tracked by the counter.
    pub const HEAT_SINK_TONNAGE: f64 = 1.0;
    /// Default C-bill cost of one heat sink when the catalog does not override it.
    pub const DEFAULT_HEAT_SINK_COST: f64 = 2000.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_policy(load: LoadPolicy) -> Self {
        Self { load }
    }
}

/// How the record loader reacts to failures while mounting equipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoadPolicy {
    pub location_full: LocationFullPolicy,
}

impl LoadPolicy {
    /// Aborts the whole load on the first slot overflow.
    pub const STRICT: Self = Self {
        location_full: LocationFullPolicy::Abort,
    };

    /// Records overflowing equipment as failed and keeps loading.
    pub const LENIENT: Self = Self {
        location_full: LocationFullPolicy::RecordFailed,
    };
}

/// Reaction to a location running out of critical slots during a load.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LocationFullPolicy {
    /// Rethrow as a load failure carrying the allocation message.
    #[default]
    Abort,
    /// Downgrade to a failed-equipment entry on the unit.
    RecordFailed,
}
