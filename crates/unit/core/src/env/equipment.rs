use std::sync::Arc;

use bitflags::bitflags;

use crate::config::UnitConfig;

/// Read-only equipment registry consulted while constructing units.
///
/// Lookups resolve either the canonical name or any registered alias.
pub trait EquipmentOracle: Send + Sync {
    fn get(&self, name: &str) -> Option<Arc<EquipmentType>>;

    /// C-bill cost of one heat sink tracked by a unit's heat-sink counter.
    fn heat_sink_cost(&self) -> f64 {
        UnitConfig::DEFAULT_HEAT_SINK_COST
    }

    /// Returns every descriptor held by this oracle, in registration order.
    fn all_definitions(&self) -> Vec<Arc<EquipmentType>>;
}

/// Closed set of equipment families the calculators dispatch on.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentKind {
    Weapon,
    Ammunition,
    Miscellaneous,
}

bitflags! {
    /// Feature flags carried by an equipment descriptor.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
    pub struct EquipmentFlags: u32 {
        const HEAT_SINK      = 1 << 0;
        const MINE_DISPENSER = 1 << 1;
        /// Weapon cannot start fires.
        const NO_FIRES       = 1 << 2;
        const ARTEMIS_IV     = 1 << 3;
        const ARTEMIS_V      = 1 << 4;
        const APOLLO         = 1 << 5;
        const PROTO_ARTEMIS  = 1 << 6;
    }
}

impl EquipmentFlags {
    /// Fire-control flags that boost a linked weapon, in evaluation order,
    /// paired with their battle-value multipliers.
    pub const LINKER_BONUSES: [(EquipmentFlags, f64); 4] = [
        (EquipmentFlags::ARTEMIS_IV, 1.2),
        (EquipmentFlags::ARTEMIS_V, 1.3),
        (EquipmentFlags::APOLLO, 1.15),
        (EquipmentFlags::PROTO_ARTEMIS, 1.25),
    ];

    /// Union of every linker flag.
    pub const LINKERS: EquipmentFlags = EquipmentFlags::ARTEMIS_IV
        .union(EquipmentFlags::ARTEMIS_V)
        .union(EquipmentFlags::APOLLO)
        .union(EquipmentFlags::PROTO_ARTEMIS);
}

/// Immutable equipment descriptor shared by every mount of the same item.
///
/// Ammunition measures its supply in `shots_per_ton`; weight, cost and
/// battle value of an ammunition mount scale with the fraction of that
/// supply still loaded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentType {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub aliases: Vec<String>,
    pub kind: EquipmentKind,
    pub tonnage: f64,
    pub cost: f64,
    pub battle_value: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub shots_per_ton: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: EquipmentFlags,
    #[cfg_attr(feature = "serde", serde(default))]
    pub heat: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_criticals"))]
    pub criticals: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rules_refs: Option<String>,
}

#[cfg(feature = "serde")]
fn default_criticals() -> u32 {
    1
}

impl EquipmentType {
    fn base(name: impl Into<String>, kind: EquipmentKind, tonnage: f64, cost: f64, bv: f64) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            kind,
            tonnage,
            cost,
            battle_value: bv,
            shots_per_ton: 0,
            flags: EquipmentFlags::empty(),
            heat: 0,
            criticals: 1,
            rules_refs: None,
        }
    }

    pub fn weapon(name: impl Into<String>, tonnage: f64, cost: f64, battle_value: f64) -> Self {
        Self::base(name, EquipmentKind::Weapon, tonnage, cost, battle_value)
    }

    pub fn ammunition(
        name: impl Into<String>,
        tonnage: f64,
        cost: f64,
        battle_value: f64,
        shots_per_ton: u32,
    ) -> Self {
        Self {
            shots_per_ton,
            ..Self::base(name, EquipmentKind::Ammunition, tonnage, cost, battle_value)
        }
    }

    pub fn misc(
        name: impl Into<String>,
        tonnage: f64,
        cost: f64,
        battle_value: f64,
        flags: EquipmentFlags,
    ) -> Self {
        Self {
            flags,
            ..Self::base(name, EquipmentKind::Miscellaneous, tonnage, cost, battle_value)
        }
    }

    /// A standard single heat sink.
    pub fn heat_sink() -> Self {
        Self::misc(
            "Heat Sink",
            UnitConfig::HEAT_SINK_TONNAGE,
            UnitConfig::DEFAULT_HEAT_SINK_COST,
            0.0,
            EquipmentFlags::HEAT_SINK,
        )
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_flags(mut self, flags: EquipmentFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_heat(mut self, heat: u32) -> Self {
        self.heat = heat;
        self
    }

    pub fn with_criticals(mut self, criticals: u32) -> Self {
        self.criticals = criticals;
        self
    }

    pub fn with_rules_refs(mut self, refs: impl Into<String>) -> Self {
        self.rules_refs = Some(refs.into());
        self
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == EquipmentKind::Weapon
    }

    pub fn is_ammunition(&self) -> bool {
        self.kind == EquipmentKind::Ammunition
    }

    pub fn is_heat_sink(&self) -> bool {
        self.kind == EquipmentKind::Miscellaneous && self.flags.contains(EquipmentFlags::HEAT_SINK)
    }

    pub fn is_mine_dispenser(&self) -> bool {
        self.kind == EquipmentKind::Miscellaneous
            && self.flags.contains(EquipmentFlags::MINE_DISPENSER)
    }

    /// Fire-control equipment that boosts a linked weapon.
    pub fn is_linker(&self) -> bool {
        self.kind == EquipmentKind::Miscellaneous && self.flags.intersects(EquipmentFlags::LINKERS)
    }

    pub fn has_flag(&self, flag: EquipmentFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Every name this descriptor answers to, canonical name first.
    pub fn lookup_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    /// Fraction of a full ton of ammunition that `shots` represents.
    ///
    /// Returns 0.0 for descriptors without a shot supply.
    pub fn ammo_fraction(&self, shots: u32) -> f64 {
        if self.shots_per_ton == 0 {
            return 0.0;
        }
        f64::from(shots) / f64::from(self.shots_per_ton)
    }
}
