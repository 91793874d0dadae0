use std::fmt;

/// Index of a location within a unit's chassis layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationId(pub u8);

impl LocationId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loc{}", self.0)
    }
}

/// Position of a mount in its unit's mount list.
///
/// Mount ids are stable for the lifetime of the unit because mounts are
/// never removed, only flagged destroyed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MountId(pub u32);

impl MountId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a mount currently lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MountLocation {
    /// Staging pool for mounts that occupy no location (heat sinks).
    #[default]
    Unassigned,
    At(LocationId),
}

impl MountLocation {
    pub const fn location(self) -> Option<LocationId> {
        match self {
            Self::Unassigned => None,
            Self::At(id) => Some(id),
        }
    }

    pub const fn is_unassigned(self) -> bool {
        matches!(self, Self::Unassigned)
    }
}
