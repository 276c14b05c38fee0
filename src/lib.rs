#![no_std]

//! Samsung SoC PLL divider calculations.
//!
//! Converts between reference and output frequencies of the
//! Samsung CMU PLLs given their M / P / S dividers and the optional
//! fractional K / KS terms. All arithmetic is exact up to a single,
//! configurable rounding of the final quotient.

extern crate alloc;

pub mod constants;
pub mod errors;
pub mod config;
pub mod decimal;
pub mod dividers;
pub mod frequency;

pub use config::{MathContext, RoundingMode};
pub use decimal::Decimal;
pub use dividers::Dividers;
pub use errors::Error;
pub use frequency::{dividers_from_rate, rate_from_dividers, PllRate};
