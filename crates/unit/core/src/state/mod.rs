//! Unit state: locations, critical slots, mounts and the unit aggregate.
mod common;
mod error;
mod layout;
mod location;
mod mount;
mod tech;
mod unit;

pub use common::{LocationId, MountId, MountLocation};
pub use error::StateError;
pub use layout::{ChassisLayout, LocationSpec, UnitTypeFlags};
pub use location::{ArmorMeter, CriticalSlot, Location, SlotArray};
pub use mount::Mount;
pub use tech::{RulesLevel, TechBase, TechLevel, TechLevelParseError};
pub use unit::{Fluff, Unit};
