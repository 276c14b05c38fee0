//! Errors

use thiserror::Error;

/// PLL calculation errors
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Formula denominator evaluated to zero,
    /// `P` for the output rate or `M * 2^KS + K` for the reference.
    #[error("division by zero")]
    DivisionByZero,

    /// Text is not a non-negative decimal number
    #[error("invalid decimal number")]
    InvalidNumber,

    /// Rounding context with zero significant digits
    #[error("precision must be at least one digit")]
    InvalidPrecision,
}
