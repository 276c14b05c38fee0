//! Constants

use crate::{dividers::Dividers, frequency::PllRate};

/// Significant digits of IEEE 754 decimal32
pub const DECIMAL32_DIGITS: u32 = 7;

/// Significant digits of IEEE 754 decimal64
pub const DECIMAL64_DIGITS: u32 = 16;

/// Significant digits of IEEE 754 decimal128, the default context
pub const DECIMAL128_DIGITS: u32 = 34;

/// Crystal oscillator feeding the Samsung CMU PLLs
pub const OSC_FREQ: u64 = 26_000_000;

/// Divider sets evaluated against the 26 MHz oscillator.
///
/// The integer rows use a 16 bit fractional width with K = 0.
/// The last three rows (K = 16213, KS = 0) were never confirmed
/// against hardware and are kept as data only.
pub const PLL_TABLE_26MHZ: [PllRate; 15] = [
    PllRate::new(OSC_FREQ, Dividers::new(207, 3, 0, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(198, 3, 0, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(296, 5, 0, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(156, 3, 0, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(132, 3, 0, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(117, 3, 0, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(195, 3, 1, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(156, 3, 1, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(126, 3, 1, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(259, 4, 2, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(132, 3, 2, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(192, 3, 3, 0, 16)),
    PllRate::new(OSC_FREQ, Dividers::new(30, 1, 2, 16213, 0)),
    PllRate::new(OSC_FREQ, Dividers::new(30, 1, 3, 16213, 0)),
    PllRate::new(OSC_FREQ, Dividers::new(30, 1, 4, 16213, 0)),
];
