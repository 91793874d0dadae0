//! Inline directives embedded in equipment entries.

use super::error::LoadError;

const SHOTS_MARKER: &str = ":Shots";

/// An equipment entry with its shot directive removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquipmentEntry {
    /// Trimmed name used for the catalog lookup.
    pub name: String,
    /// Shot count from a `:Shots<N>#` directive, if one was present.
    pub shots: Option<u32>,
}

impl EquipmentEntry {
    /// Splits `raw` into a lookup name and an optional shot count.
    ///
    /// The directive spans from `:Shots` up to and including the next `#`.
    pub fn parse(raw: &str) -> Result<Self, LoadError> {
        let Some(start) = raw.find(SHOTS_MARKER) else {
            return Ok(Self {
                name: raw.trim().to_string(),
                shots: None,
            });
        };

        let digits_start = start + SHOTS_MARKER.len();
        let end = raw[digits_start..]
            .find('#')
            .map(|offset| digits_start + offset)
            .ok_or_else(|| LoadError::MalformedShots(raw.to_string()))?;
        let shots = raw[digits_start..end]
            .trim()
            .parse::<u32>()
            .map_err(|_| LoadError::MalformedShots(raw.to_string()))?;

        let name = format!("{}{}", &raw[..start], &raw[end + 1..]);
        Ok(Self {
            name: name.trim().to_string(),
            shots: Some(shots),
        })
    }
}
