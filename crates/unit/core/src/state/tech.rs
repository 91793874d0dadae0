//! Technology base and rules level metadata.

use std::str::FromStr;

/// Faction technology the unit is built from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TechBase {
    #[default]
    #[strum(serialize = "IS")]
    InnerSphere,
    Clan,
    #[strum(serialize = "Mixed (IS Chassis)")]
    MixedInnerSphere,
    #[strum(serialize = "Mixed (Clan Chassis)")]
    MixedClan,
}

/// Tournament legality tier.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RulesLevel {
    Introductory = 1,
    #[default]
    Standard = 2,
    Advanced = 3,
    Experimental = 4,
    Unofficial = 5,
}

/// Technology classification declared by a unit record's `type` block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechLevel {
    pub base: TechBase,
    pub rules: RulesLevel,
}

/// Raised when a `type` block names no known technology classification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized tech level '{0}'")]
pub struct TechLevelParseError(pub String);

impl FromStr for TechLevel {
    type Err = TechLevelParseError;

    /// Accepts `IS Level N`, `Clan Level N`, `Mixed (IS Chassis)` and
    /// `Mixed (Clan Chassis)`, optionally followed by `Level N`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let raw = text.trim();
        let error = || TechLevelParseError(raw.to_string());

        let (base, rest) = if let Some(rest) = raw.strip_prefix("Mixed (IS Chassis)") {
            (TechBase::MixedInnerSphere, rest)
        } else if let Some(rest) = raw.strip_prefix("Mixed (Clan Chassis)") {
            (TechBase::MixedClan, rest)
        } else if let Some(rest) = raw.strip_prefix("Clan") {
            (TechBase::Clan, rest)
        } else if let Some(rest) = raw.strip_prefix("IS") {
            (TechBase::InnerSphere, rest)
        } else {
            return Err(error());
        };

        let rest = rest.trim();
        let rules = if rest.is_empty() {
            // mixed-tech designs are advanced rules unless stated otherwise
            match base {
                TechBase::MixedInnerSphere | TechBase::MixedClan => RulesLevel::Advanced,
                _ => return Err(error()),
            }
        } else {
            let level = rest
                .strip_prefix("Level")
                .map(str::trim)
                .and_then(|n| n.parse::<u8>().ok())
                .ok_or_else(error)?;
            RulesLevel::from_repr(level).ok_or_else(error)?
        };

        Ok(Self { base, rules })
    }
}
