//! Allocation engine: the rules for placing equipment into a unit.
//!
//! Mounting runs in two phases inside a single call. The first phase checks
//! whether the item fits (slot requirement and free capacity) and stages the
//! mount in the unassigned pool; the second commits the final location and
//! the slot record. Nothing is written to the unit until the first phase has
//! succeeded, so a rejected request has no observable effect.

mod error;

pub use error::AllocationError;

use std::sync::Arc;

use crate::env::{EquipmentKind, EquipmentType};
use crate::state::{CriticalSlot, LocationId, Mount, MountId, MountLocation, Unit};

/// Returns true when `equipment` consumes a critical slot where it is placed.
///
/// Weapons always do; miscellaneous equipment only when it is a mine
/// dispenser. Heat sinks and ammunition never take a slot.
pub fn requires_slot(equipment: &EquipmentType) -> bool {
    match equipment.kind {
        EquipmentKind::Weapon => true,
        EquipmentKind::Miscellaneous => equipment.is_mine_dispenser(),
        EquipmentKind::Ammunition => false,
    }
}

/// Placement parameters for [`Unit::mount_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountRequest {
    pub location: LocationId,
    pub rear_mounted: bool,
    /// Number of ammunition tons merged into this mount.
    pub stack: u32,
}

impl MountRequest {
    pub fn new(location: LocationId) -> Self {
        Self {
            location,
            rear_mounted: false,
            stack: 1,
        }
    }

    pub fn rear_mounted(mut self, rear: bool) -> Self {
        self.rear_mounted = rear;
        self
    }

    pub fn stack(mut self, stack: u32) -> Self {
        self.stack = stack.max(1);
        self
    }
}

/// Validated mount waiting to be committed.
struct StagedMount {
    mount: Mount,
    target: LocationId,
    slot: Option<usize>,
}

impl Unit {
    /// Mounts `equipment` into `location`.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::LocationFull` when the item needs a critical
    /// slot and none is free, or `UnknownLocation` for ids outside the layout.
    pub fn mount(
        &mut self,
        equipment: Arc<EquipmentType>,
        location: LocationId,
        rear_mounted: bool,
    ) -> Result<MountId, AllocationError> {
        self.mount_with(equipment, MountRequest::new(location).rear_mounted(rear_mounted))
    }

    /// Mounts `equipment` according to `request`.
    pub fn mount_with(
        &mut self,
        equipment: Arc<EquipmentType>,
        request: MountRequest,
    ) -> Result<MountId, AllocationError> {
        let staged = self.stage(equipment, request)?;
        Ok(self.commit(staged))
    }

    fn stage(
        &self,
        equipment: Arc<EquipmentType>,
        request: MountRequest,
    ) -> Result<StagedMount, AllocationError> {
        let location = self
            .location(request.location)
            .ok_or(AllocationError::UnknownLocation(request.location))?;

        let slot = if requires_slot(&equipment) {
            let index = location.slots.first_free().ok_or_else(|| AllocationError::LocationFull {
                location: location.name.clone(),
                capacity: location.slots.capacity(),
            })?;
            Some(index)
        } else {
            None
        };

        let id = u32::try_from(self.mounts.len())
            .map(MountId)
            .map_err(|_| AllocationError::TooManyMounts)?;

        Ok(StagedMount {
            mount: Mount::staged(id, equipment, request.rear_mounted, request.stack),
            target: request.location,
            slot,
        })
    }

    fn commit(&mut self, staged: StagedMount) -> MountId {
        let StagedMount {
            mut mount,
            target,
            slot,
        } = staged;
        let id = mount.id;

        if mount.equipment.is_heat_sink() {
            self.heat_sinks = self.heat_sinks.saturating_add(1);
        } else {
            mount.location = MountLocation::At(target);
        }

        if slot.is_some() {
            let placed = self.locations[target.index()].slots.insert(CriticalSlot::new(id));
            debug_assert_eq!(placed, slot);
        }

        tracing::debug!(
            mount = %id,
            equipment = %mount.equipment.name,
            location = ?mount.location,
            slot = ?slot,
            "mounted equipment"
        );
        self.mounts.push(mount);
        id
    }

    /// Links a fire-control item to a weapon so the weapon gains its bonus.
    ///
    /// A weapon holds at most one linked mount; relinking the same pair is a
    /// no-op.
    pub fn link(&mut self, weapon: MountId, linker: MountId) -> Result<(), AllocationError> {
        let invalid = |reason| AllocationError::InvalidLink {
            weapon,
            linker,
            reason,
        };

        if weapon == linker {
            return Err(invalid("a mount cannot link to itself"));
        }
        let target = self
            .mount_by_id(weapon)
            .ok_or(AllocationError::UnknownMount(weapon))?;
        let source = self
            .mount_by_id(linker)
            .ok_or(AllocationError::UnknownMount(linker))?;

        if target.kind() != EquipmentKind::Weapon {
            return Err(invalid("target is not a weapon"));
        }
        if source.kind() != EquipmentKind::Miscellaneous {
            return Err(invalid("linker is not miscellaneous equipment"));
        }
        match target.linked {
            Some(existing) if existing != linker => {
                return Err(AllocationError::AlreadyLinked { weapon, existing });
            }
            _ => {}
        }

        self.mounts[weapon.index()].linked = Some(linker);
        Ok(())
    }
}
