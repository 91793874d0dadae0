//! Locations, their armor and their critical slot arrays.

use arrayvec::ArrayVec;

use super::common::{LocationId, MountId};
use super::error::StateError;
use crate::config::UnitConfig;

/// One occupied critical slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CriticalSlot {
    pub mount: MountId,
    pub hit: bool,
}

impl CriticalSlot {
    pub fn new(mount: MountId) -> Self {
        Self { mount, hit: false }
    }
}

/// Fixed-length slot array; its length is the location's capacity.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotArray {
    slots: ArrayVec<Option<CriticalSlot>, { UnitConfig::MAX_CRITICAL_SLOTS }>,
}

impl SlotArray {
    /// Creates an empty array. Capacities above the slot maximum are clamped.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = ArrayVec::new();
        for _ in 0..capacity.min(UnitConfig::MAX_CRITICAL_SLOTS) {
            slots.push(None);
        }
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn free(&self) -> usize {
        self.capacity() - self.occupied()
    }

    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn get(&self, index: usize) -> Option<&CriticalSlot> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriticalSlot> {
        self.slots.iter().flatten()
    }

    /// Writes `slot` at the first free index, returning that index.
    pub(crate) fn insert(&mut self, slot: CriticalSlot) -> Option<usize> {
        let index = self.first_free()?;
        self.slots[index] = Some(slot);
        Some(index)
    }
}

/// Current and original point values of armor or internal structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorMeter {
    pub current: u32,
    pub original: u32,
}

impl ArmorMeter {
    pub const fn full(points: u32) -> Self {
        Self {
            current: points,
            original: points,
        }
    }
}

/// A physical section of a unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub armor: ArmorMeter,
    /// `None` when the unit type carries no internal structure here.
    pub internal: Option<ArmorMeter>,
    pub slots: SlotArray,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, capacity: usize) -> Self {
        Self {
            id,
            name: name.into(),
            armor: ArmorMeter::default(),
            internal: None,
            slots: SlotArray::with_capacity(capacity),
        }
    }

    /// Sets both current and original armor.
    pub fn initialize_armor(&mut self, points: u32) {
        self.armor = ArmorMeter::full(points);
    }

    /// Sets current armor; it may never exceed the original allotment.
    pub fn set_armor(&mut self, points: u32) -> Result<(), StateError> {
        if points > self.armor.original {
            return Err(StateError::ArmorExceedsOriginal {
                location: self.id,
                requested: points,
                original: self.armor.original,
            });
        }
        self.armor.current = points;
        Ok(())
    }

    pub fn initialize_internal(&mut self, points: Option<u32>) {
        self.internal = points.map(ArmorMeter::full);
    }
}
