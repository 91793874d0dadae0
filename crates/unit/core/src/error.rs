//! Common error infrastructure for unit-core.
//!
//! This module provides shared types and traits used across all error types in unit-core.
//! Domain-specific errors (e.g., `AllocationError`, `LoadError`) are defined in their
//! respective modules alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each subsystem has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized so callers can decide
//!   whether to abort a load or downgrade the failure
//! - **Stable Codes**: Every variant exposes a static code for logs and tests

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request can be retried with different input (another location)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: the unit under construction cannot be produced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with an alternative request.
    ///
    /// Examples: location full, armor above the original allotment
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown location, malformed shot directive
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: mount id that does not belong to the unit
    Internal,

    /// Fatal error - construction aborted.
    ///
    /// Examples: missing name block, incorrect armor array length
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all unit-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait ConstructionError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
