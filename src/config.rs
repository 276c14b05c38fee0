///! Numeric precision configuration

use crate::{constants::*, errors::*};


/// How a quotient is rounded to the context precision
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round to nearest, ties to the even neighbour ("banker's rounding")
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero
    HalfUp,
    /// Truncate
    Down,
}


/// Rounding context applied to every division.
/// Defaults to [`MathContext::DECIMAL128`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MathContext {
    /// Significant decimal digits kept in a result
    precision: u32,
    rounding: RoundingMode,
}

impl MathContext {
    /// IEEE 754 decimal32: 7 digits, half-even
    pub const DECIMAL32: MathContext = MathContext { precision: DECIMAL32_DIGITS, rounding: RoundingMode::HalfEven };

    /// IEEE 754 decimal64: 16 digits, half-even
    pub const DECIMAL64: MathContext = MathContext { precision: DECIMAL64_DIGITS, rounding: RoundingMode::HalfEven };

    /// IEEE 754 decimal128: 34 digits, half-even
    pub const DECIMAL128: MathContext = MathContext { precision: DECIMAL128_DIGITS, rounding: RoundingMode::HalfEven };

    /// Custom rounding context, `precision` must be non-zero.
    pub fn new(precision: u32, rounding: RoundingMode) -> Result<Self, Error> {
        (if precision == 0 { Err(Error::InvalidPrecision) } else { Ok(()) })?;
        Ok(MathContext { precision, rounding })
    }

    #[inline]
    pub fn precision(self: &Self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn rounding(self: &Self) -> RoundingMode {
        self.rounding
    }
}

impl Default for MathContext {
    fn default() -> Self {
        MathContext::DECIMAL128
    }
}
