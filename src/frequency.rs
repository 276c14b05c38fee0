//! Frequency calculations
//!
//! F OUT = F IN × (M × 2^KS + K) / (P × 2^KS × 2^S)
//! where:
//! F IN is the reference (oscillator) frequency.
//! M is the main (feedback) divider.
//! P is the pre-divider.
//! S is the post-divider shift.
//! K is the fractional part of the feedback divider, in units of 2^-KS.

use log::{debug, trace};

use crate::{config::*, decimal::*, dividers::*, errors::*};


impl Dividers {

    /// Output frequency for the reference frequency `fin`
    pub fn rate(self: &Self, fin: &Decimal, ctx: &MathContext) -> Result<Decimal, Error> {
        let res = fin.mul_div(&self.multiplier(), &self.divisor(), ctx);
        match &res {
            Ok(rate) => trace!("fin {} {:?} => rate {}", fin, self, rate),
            Err(e) => debug!("fin {} {:?}: {} (P == 0)", fin, self, e),
        }
        res
    }

    /// Reference frequency needed to produce the output frequency `rate`
    pub fn fin(self: &Self, rate: &Decimal, ctx: &MathContext) -> Result<Decimal, Error> {
        let res = rate.mul_div(&self.divisor(), &self.multiplier(), ctx);
        match &res {
            Ok(fin) => trace!("rate {} {:?} => fin {}", rate, self, fin),
            Err(e) => debug!("rate {} {:?}: {} (M * 2^KS + K == 0)", rate, self, e),
        }
        res
    }
}


/// Output frequency, Hz, decimal128 precision.
///
/// Fails with [`Error::DivisionByZero`] when `p == 0`.
pub fn rate_from_dividers(fin: u64, m: u32, p: u32, s: u32, k: u32, ks: u32) -> Result<Decimal, Error> {
    Dividers::new(m, p, s, k, ks).rate(&Decimal::from(fin), &MathContext::DECIMAL128)
}

/// Reference frequency, Hz, decimal128 precision.
///
/// Fails with [`Error::DivisionByZero`] when `m * 2^ks + k == 0`.
pub fn dividers_from_rate(rate: u64, m: u32, p: u32, s: u32, k: u32, ks: u32) -> Result<Decimal, Error> {
    Dividers::new(m, p, s, k, ks).fin(&Decimal::from(rate), &MathContext::DECIMAL128)
}


/// Reference frequency and the dividers applied to it,
/// a single PLL rate table entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PllRate {
    /// Reference frequency, Hz
    pub fin: u64,
    pub dividers: Dividers,
}

impl PllRate {
    pub const fn new(fin: u64, dividers: Dividers) -> Self {
        PllRate { fin, dividers }
    }

    /// Output frequency of this entry under `ctx`
    pub fn rate_with(self: &Self, ctx: &MathContext) -> Result<Decimal, Error> {
        self.dividers.rate(&Decimal::from(self.fin), ctx)
    }

    /// Output frequency of this entry, decimal128 precision
    pub fn rate(self: &Self) -> Result<Decimal, Error> {
        self.rate_with(&MathContext::DECIMAL128)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_integer_rate() {
        let rate = rate_from_dividers(26_000_000, 207, 3, 0, 0, 16).unwrap();
        assert_eq!(rate.to_string(), "1794000000");
        assert_eq!(rate.scale(), 0);
    }

    #[test]
    fn test_fractional_rate() {
        // 26 MHz * (30 + 16213) / 4
        let rate = rate_from_dividers(26_000_000, 30, 1, 2, 16213, 0).unwrap();
        assert_eq!(rate.to_string(), "105579500000");

        let rate = rate_from_dividers(26_000_000, 30, 1, 2, 16213, 16).unwrap();
        assert_eq!(rate.to_string(), "196608039.85595703125");
    }

    #[test]
    fn test_fin_for_rate() {
        let fin = dividers_from_rate(1_794_000_000, 207, 3, 0, 0, 0).unwrap();
        assert_eq!(fin.to_string(), "26000000");

        // 196.608 MHz * 4 / 16243, not a terminating fraction
        let fin = dividers_from_rate(196_608_000, 30, 1, 2, 16213, 0).unwrap();
        assert_eq!(fin.to_string(), "48416.67179708181986086314104537339");
        assert_eq!(fin.precision(), 34);
    }

    #[test]
    fn test_zero_divisor() {
        assert_eq!(rate_from_dividers(26_000_000, 207, 0, 0, 0, 16), Err(Error::DivisionByZero));
        assert_eq!(dividers_from_rate(1_794_000_000, 0, 3, 0, 0, 16), Err(Error::DivisionByZero));

        // M == 0 alone is a valid, if useless, output rate
        assert_eq!(rate_from_dividers(26_000_000, 0, 3, 0, 0, 16), Ok(Decimal::zero()));
        // K alone keeps the reference calculation defined
        assert!(dividers_from_rate(26_000_000, 0, 1, 0, 1, 16).is_ok());
    }

    #[test]
    fn test_custom_context() {
        let d = Dividers::new(1, 3, 0, 0, 0);
        let fin = Decimal::from(26_000_000u64);

        let rate = d.rate(&fin, &MathContext::DECIMAL128).unwrap();
        assert_eq!(rate.to_string(), "8666666.666666666666666666666666667");

        let rate = d.rate(&fin, &MathContext::DECIMAL32).unwrap();
        assert_eq!(rate.to_string(), "8666667");

        let rate = d.rate(&fin, &MathContext::new(10, RoundingMode::Down).unwrap()).unwrap();
        assert_eq!(rate.to_string(), "8666666.666");
    }

    #[test]
    fn test_table_entry() {
        let entry = PllRate::new(26_000_000, Dividers::new(259, 4, 2, 0, 16));
        assert_eq!(entry.rate().unwrap().to_string(), "420875000");
    }
}
