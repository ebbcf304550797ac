// ============================================================================
// Numeric Errors
// Error types for integer arithmetic primitives
// ============================================================================

use std::fmt;

/// Errors that can occur in the checked integer primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the type's maximum value
    Overflow,
    /// Result below the type's minimum value
    Underflow,
    /// Input outside the mathematical domain of the operation
    DomainError,
    /// Configuration cannot be honoured on this build
    InvalidConfig(&'static str),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded maximum value")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: result below minimum value")
            },
            NumericError::DomainError => {
                write!(f, "domain error: input outside the valid domain")
            },
            NumericError::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
