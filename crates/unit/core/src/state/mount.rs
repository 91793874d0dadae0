//! Runtime binding of one equipment descriptor to a unit.

use std::sync::Arc;

use super::common::{MountId, MountLocation};
use crate::env::{EquipmentKind, EquipmentType};

/// Equipment mounted on a unit.
///
/// The descriptor is shared with the catalog and every other mount of the
/// same item. `linked` is a non-owning reference to another mount of the
/// same unit (e.g. a fire-control system boosting this weapon).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mount {
    pub id: MountId,
    pub equipment: Arc<EquipmentType>,
    pub location: MountLocation,
    pub rear_mounted: bool,
    pub shots_left: u32,
    pub original_shots: u32,
    pub destroyed: bool,
    pub linked: Option<MountId>,
}

impl Mount {
    /// Creates a staged mount in the unassigned pool.
    ///
    /// Ammunition starts with `shots_per_ton × stack` shots.
    pub(crate) fn staged(id: MountId, equipment: Arc<EquipmentType>, rear_mounted: bool, stack: u32) -> Self {
        let shots = if equipment.is_ammunition() {
            equipment.shots_per_ton.saturating_mul(stack)
        } else {
            0
        };
        Self {
            id,
            equipment,
            location: MountLocation::Unassigned,
            rear_mounted,
            shots_left: shots,
            original_shots: shots,
            destroyed: false,
            linked: None,
        }
    }

    pub fn kind(&self) -> EquipmentKind {
        self.equipment.kind
    }

    pub fn name(&self) -> &str {
        &self.equipment.name
    }

    /// Heat sinks are tracked by the unit's counter rather than per mount.
    pub fn is_counted_heat_sink(&self) -> bool {
        self.equipment.is_heat_sink() && self.location.is_unassigned()
    }

    /// Fraction of a full ton of ammunition still loaded.
    pub fn ammo_fraction(&self) -> f64 {
        self.equipment.ammo_fraction(self.shots_left)
    }
}
