//! Unit loading errors.

use crate::allocation::AllocationError;
use crate::error::{ConstructionError, ErrorSeverity};
use crate::state::StateError;

/// Errors that abort construction of a unit from a definition record.
///
/// No partially built unit is ever returned alongside one of these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// A required block is absent.
    #[error("Could not find {0} block.")]
    MissingBlock(&'static str),

    /// The armor block must hold one value per armored location.
    #[error("Incorrect armor array length: expected {expected}, found {found}")]
    IncorrectArmorLength { expected: usize, found: usize },

    /// Armor points cannot be negative.
    #[error("Armor value {0} is negative")]
    NegativeArmor(i32),

    /// A numeric block holds something that is not an integer.
    #[error("Block <{block}> holds non-integer value '{value}'")]
    InvalidInteger { block: String, value: String },

    /// An equipment entry carries an unreadable `:Shots<N>#` directive.
    #[error("Malformed shot directive in '{0}'")]
    MalformedShots(String),

    /// The record text is not well-formed.
    #[error("Syntax error on line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Mounting failed and the load policy does not tolerate it.
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl ConstructionError for LoadError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Allocation(inner) => inner.severity(),
            Self::State(inner) => inner.severity(),
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use LoadError::*;
        match self {
            MissingBlock(_) => "LOAD_MISSING_BLOCK",
            IncorrectArmorLength { .. } => "LOAD_INCORRECT_ARMOR_LENGTH",
            NegativeArmor(_) => "LOAD_NEGATIVE_ARMOR",
            InvalidInteger { .. } => "LOAD_INVALID_INTEGER",
            MalformedShots(_) => "LOAD_MALFORMED_SHOTS",
            Syntax { .. } => "LOAD_SYNTAX",
            Allocation(inner) => inner.error_code(),
            State(inner) => inner.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let full = LoadError::from(AllocationError::LocationFull {
            location: "Guns".into(),
            capacity: 6,
        });
        assert_eq!(full.severity(), ErrorSeverity::Recoverable);
        assert_eq!(full.error_code(), "ALLOCATION_LOCATION_FULL");

        let missing = LoadError::MissingBlock("armor");
        assert_eq!(missing.severity(), ErrorSeverity::Fatal);
        assert_eq!(missing.error_code(), "LOAD_MISSING_BLOCK");
    }
}
