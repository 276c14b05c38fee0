//! Samsung PLL divider settings

use core::fmt;

use num_bigint::BigUint;
use num_traits::One;


/// Typed access to a single divider of a [`Dividers`] set
pub trait DividerField: Sized + Copy {
    /// Read this field out of the set
    fn get(d: &Dividers) -> Self;

    /// Return the set with this field replaced
    fn put(self: Self, d: Dividers) -> Dividers;
}

/// Generate a divider newtype and its field accessors
macro_rules! gen_divider_field {
    ($(#[$doc:meta])* $n:ident, $f:ident) => {
        $(#[$doc])*
        #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $n(pub u32);

        impl DividerField for $n {
            #[inline] fn get(d: &Dividers) -> Self { d.$f }
            #[inline] fn put(self: Self, mut d: Dividers) -> Dividers { d.$f = self; d }
        }

        impl From<u32> for $n { #[inline] fn from(v: u32) -> Self { $n(v) } }
        impl From<$n> for u32 { #[inline] fn from(v: $n) -> Self { v.0 } }
    }
}

gen_divider_field!(
    /// Feedback (main) divider, multiplies the reference
    M, m);
gen_divider_field!(
    /// Pre-divider, divides the reference
    P, p);
gen_divider_field!(
    /// Post-divider shift, output is divided by `2^S`
    S, s);
gen_divider_field!(
    /// Fractional multiplier numerator, added to `M * 2^KS`
    K, k);
gen_divider_field!(
    /// Fractional width, `K` is in units of `2^-KS`
    Ks, ks);


/// Full set of PLL dividers.
/// Defaults to all zero, which is not a usable PLL setting.
///
/// F OUT = F IN × (M × 2^KS + K) / (P × 2^KS × 2^S)
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Dividers {
    pub m: M,
    pub p: P,
    pub s: S,
    pub k: K,
    pub ks: Ks,
}

impl Dividers {

    /// Divider set from raw values
    pub const fn new(m: u32, p: u32, s: u32, k: u32, ks: u32) -> Self {
        Dividers { m: M(m), p: P(p), s: S(s), k: K(k), ks: Ks(ks) }
    }

    /// Get divider value
    #[inline]
    pub fn get<F>(self: &Self) -> F
    where F: DividerField
    {
        F::get(self)
    }

    /// Update divider value
    #[inline]
    pub fn set<F>(self: Self, f: F) -> Self
    where F: DividerField
    {
        f.put(self)
    }

    /// Effective feedback multiplier scaled by `2^KS`: `M * 2^KS + K`
    pub fn multiplier(self: &Self) -> BigUint {
        BigUint::from(self.m.0) * pow2(self.ks.0) + self.k.0
    }

    /// Combined reference and output division scaled by `2^KS`: `P * 2^KS * 2^S`
    pub fn divisor(self: &Self) -> BigUint {
        BigUint::from(self.p.0) * pow2(self.ks.0) * pow2(self.s.0)
    }
}

impl fmt::Display for Dividers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m={} p={} s={} k={} ks={}", self.m.0, self.p.0, self.s.0, self.k.0, self.ks.0)
    }
}

#[inline]
fn pow2(e: u32) -> BigUint {
    BigUint::one() << (e as usize)
}
