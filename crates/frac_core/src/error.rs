//! Error types for frac_core.

use thiserror::Error;

/// Errors raised by fraction construction and arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FracError {
    /// Zero denominator at construction, or division by a zero fraction.
    #[error("division by zero")]
    DivisionByZero,

    /// A precondition was violated (e.g. converting a decimal into a
    /// fraction that already holds a value).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
