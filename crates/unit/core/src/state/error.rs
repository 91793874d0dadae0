//! Unit state errors.
//!
//! Errors related to direct mutation of an already constructed unit.

use super::common::{LocationId, MountId};
use crate::error::{ConstructionError, ErrorSeverity};

/// Errors that occur when mutating unit state outside the allocation engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Location id is not part of the chassis layout.
    #[error("location {0} does not exist on this unit")]
    UnknownLocation(LocationId),

    /// Mount id does not belong to this unit.
    #[error("mount {0} does not exist on this unit")]
    UnknownMount(MountId),

    /// Armor may be reduced but never raised above its original allotment.
    #[error("armor {requested} exceeds original {original} in {location}")]
    ArmorExceedsOriginal {
        location: LocationId,
        requested: u32,
        original: u32,
    },

    /// Shot counts only apply to ammunition mounts.
    #[error("mount {0} is not ammunition")]
    NotAmmunition(MountId),
}

impl ConstructionError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            UnknownLocation(_) | UnknownMount(_) | NotAmmunition(_) => ErrorSeverity::Validation,
            ArmorExceedsOriginal { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            UnknownLocation(_) => "STATE_UNKNOWN_LOCATION",
            UnknownMount(_) => "STATE_UNKNOWN_MOUNT",
            ArmorExceedsOriginal { .. } => "STATE_ARMOR_EXCEEDS_ORIGINAL",
            NotAmmunition(_) => "STATE_NOT_AMMUNITION",
        }
    }
}
