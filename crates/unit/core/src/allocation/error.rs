//! Allocation errors.

use crate::error::{ConstructionError, ErrorSeverity};
use crate::state::{LocationId, MountId};

/// Errors raised by a single mount or link request.
///
/// Every variant is produced before the unit is touched, so a rejected
/// request leaves the unit exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    /// No free critical slot remains in the target location.
    #[error("{location} is full: all {capacity} slots are occupied")]
    LocationFull {
        /// Display name of the location.
        location: String,
        /// Total slot capacity of the location.
        capacity: usize,
    },

    /// Location id is not part of the chassis layout.
    #[error("location {0} does not exist on this unit")]
    UnknownLocation(LocationId),

    /// Mount id does not belong to this unit.
    #[error("mount {0} does not exist on this unit")]
    UnknownMount(MountId),

    /// The pair cannot be linked.
    #[error("cannot link {linker} to {weapon}: {reason}")]
    InvalidLink {
        weapon: MountId,
        linker: MountId,
        reason: &'static str,
    },

    /// The weapon already carries a different linked mount.
    #[error("{weapon} is already linked to {existing}")]
    AlreadyLinked { weapon: MountId, existing: MountId },

    /// The mount list cannot address another entry.
    #[error("mount list is full")]
    TooManyMounts,
}

impl ConstructionError for AllocationError {
    fn severity(&self) -> ErrorSeverity {
        use AllocationError::*;
        match self {
            LocationFull { .. } => ErrorSeverity::Recoverable,
            UnknownLocation(_) | InvalidLink { .. } | AlreadyLinked { .. } => {
                ErrorSeverity::Validation
            }
            UnknownMount(_) => ErrorSeverity::Internal,
            TooManyMounts => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use AllocationError::*;
        match self {
            LocationFull { .. } => "ALLOCATION_LOCATION_FULL",
            UnknownLocation(_) => "ALLOCATION_UNKNOWN_LOCATION",
            UnknownMount(_) => "ALLOCATION_UNKNOWN_MOUNT",
            InvalidLink { .. } => "ALLOCATION_INVALID_LINK",
            AlreadyLinked { .. } => "ALLOCATION_ALREADY_LINKED",
            TooManyMounts => "ALLOCATION_TOO_MANY_MOUNTS",
        }
    }
}
