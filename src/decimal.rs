//! Arbitrary precision decimal numbers
//!
//! A value is an unbounded unsigned coefficient and a base ten scale,
//! `unscaled × 10^-scale`. Multiplication of the operands is always exact;
//! only [`Decimal::div`] and [`Decimal::round`] lose digits, and only
//! as far as the [`MathContext`] asks for.

use alloc::string::String;
use core::{cmp::Ordering, fmt, str::FromStr};

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::{config::*, errors::*};


/// Non-negative decimal number
#[derive(Debug, Clone)]
pub struct Decimal {
    unscaled: BigUint,
    scale: i64,
}

impl Decimal {

    /// `unscaled × 10^-scale`
    pub fn new(unscaled: BigUint, scale: i64) -> Self {
        Decimal { unscaled, scale }
    }

    #[inline]
    pub fn zero() -> Self {
        Decimal::new(BigUint::zero(), 0)
    }

    #[inline]
    pub fn is_zero(self: &Self) -> bool {
        self.unscaled.is_zero()
    }

    /// Coefficient without the decimal point
    #[inline]
    pub fn unscaled(self: &Self) -> &BigUint {
        &self.unscaled
    }

    /// Number of digits right of the decimal point, negative for
    /// trailing zeros left of it
    #[inline]
    pub fn scale(self: &Self) -> i64 {
        self.scale
    }

    /// Number of significant digits in the coefficient
    pub fn precision(self: &Self) -> u32 {
        digits(&self.unscaled).max(1)
    }

    /// True when the value has no fractional part
    pub fn is_integer(self: &Self) -> bool {
        let (num, den) = self.ratio();
        (num % den).is_zero()
    }

    /// Exact value as `numerator / denominator`
    pub fn ratio(self: &Self) -> (BigUint, BigUint) {
        if self.scale >= 0 {
            (self.unscaled.clone(), pow10(self.scale as u64))
        } else {
            (&self.unscaled * pow10(self.scale.unsigned_abs()), BigUint::one())
        }
    }

    /// `self × mul / div`, the product exact and the quotient rounded by `ctx`.
    ///
    /// An exact quotient keeps the fewest fraction digits that still hold
    /// it, but never fewer than `self` had.
    pub fn mul_div(
        self: &Self,
        mul: &BigUint,
        div: &BigUint,
        ctx: &MathContext,
    ) -> Result<Decimal, Error> {
        let (num, den) = self.ratio();
        divide(num * mul, den * div, self.scale.max(0), ctx)
    }

    /// Round to the precision of `ctx`
    pub fn round(self: &Self, ctx: &MathContext) -> Decimal {
        if self.precision() <= ctx.precision() {
            return self.clone();
        }
        let drop = self.precision() - ctx.precision();
        let den = pow10(drop as u64);
        let (q, r) = self.unscaled.div_rem(&den);
        let (q, carry) = round_quotient(q, r, &den, ctx);
        Decimal::new(q, self.scale - drop as i64 - carry)
    }

    /// Same value with trailing fractional zeros removed
    pub fn strip_trailing_zeros(self: &Self) -> Decimal {
        let mut res = self.clone();
        strip_to(&mut res, i64::MIN);
        res
    }
}


/// Rounded quotient `num / den`, at most `ctx.precision()` significant digits.
pub(crate) fn divide(
    num: BigUint,
    den: BigUint,
    preferred_scale: i64,
    ctx: &MathContext,
) -> Result<Decimal, Error> {
    (if den.is_zero() { Err(Error::DivisionByZero) } else { Ok(()) })?;

    if num.is_zero() {
        return Ok(Decimal::new(BigUint::zero(), preferred_scale));
    }

    let prec = ctx.precision();

    // num / den has either (dn - dd) or (dn - dd + 1) integer digits
    let mut scale = prec as i64 - (digits(&num) as i64 - digits(&den) as i64) - 1;
    let (q, r, divisor) = loop {
        let (n, d) = if scale >= 0 {
            (&num * pow10(scale as u64), den.clone())
        } else {
            (num.clone(), &den * pow10(scale.unsigned_abs()))
        };
        let (q, r) = n.div_rem(&d);
        match digits(&q).cmp(&prec) {
            Ordering::Less => scale += 1,
            Ordering::Greater => scale -= 1,
            Ordering::Equal => break (q, r, d),
        }
    };

    if r.is_zero() {
        let mut res = Decimal::new(q, scale);
        strip_to(&mut res, preferred_scale);
        return Ok(res);
    }

    let (q, carry) = round_quotient(q, r, &divisor, ctx);
    Ok(Decimal::new(q, scale - carry))
}

/// Apply the rounding mode to a truncated quotient with remainder `r / divisor`.
/// Returns the coefficient and 1 when the round up overflowed into one more
/// digit and the coefficient was shortened to compensate.
fn round_quotient(q: BigUint, r: BigUint, divisor: &BigUint, ctx: &MathContext) -> (BigUint, i64) {
    if r.is_zero() {
        return (q, 0);
    }

    let before = digits(&q);
    let half = (r * 2u32).cmp(divisor);
    let up = match ctx.rounding() {
        RoundingMode::Down => false,
        RoundingMode::HalfUp => half != Ordering::Less,
        RoundingMode::HalfEven => match half {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => q.is_odd(),
        },
    };

    if !up {
        return (q, 0);
    }

    let q = q + 1u32;
    if digits(&q) > before.max(1) {
        // 99..9 + 1 == 100..0, drop the extra zero
        (q / 10u32, 1)
    } else {
        (q, 0)
    }
}

fn strip_to(d: &mut Decimal, min_scale: i64) {
    if d.unscaled.is_zero() {
        return;
    }
    let ten = BigUint::from(10u32);
    while d.scale > min_scale {
        let (q, r) = d.unscaled.div_rem(&ten);
        if !r.is_zero() {
            break;
        }
        d.unscaled = q;
        d.scale -= 1;
    }
}

#[inline]
fn pow10(e: u64) -> BigUint {
    BigUint::from(10u32).pow(e as u32)
}

/// Decimal digits of `v`, zero for zero
fn digits(v: &BigUint) -> u32 {
    if v.is_zero() {
        0
    } else {
        v.to_str_radix(10).len() as u32
    }
}


impl From<u64> for Decimal {
    fn from(v: u64) -> Self {
        Decimal::new(BigUint::from(v), 0)
    }
}

impl From<u32> for Decimal {
    fn from(v: u32) -> Self {
        Decimal::new(BigUint::from(v), 0)
    }
}

impl From<BigUint> for Decimal {
    fn from(v: BigUint) -> Self {
        Decimal::new(v, 0)
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Decimal::zero()
    }
}


/// Numeric equality, `2.50 == 2.5`
impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (an, ad) = self.ratio();
        let (bn, bd) = other.ratio();
        (an * bd).cmp(&(bn * ad))
    }
}


/// Plain notation, no exponent
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = self.unscaled.to_str_radix(10);
        if self.scale <= 0 {
            if !self.unscaled.is_zero() {
                s.extend(core::iter::repeat('0').take(self.scale.unsigned_abs() as usize));
            }
            return f.pad(&s);
        }

        let scale = self.scale as usize;
        if s.len() <= scale {
            let mut padded = String::with_capacity(scale + 2);
            padded.push_str("0.");
            padded.extend(core::iter::repeat('0').take(scale - s.len()));
            padded.push_str(&s);
            f.pad(&padded)
        } else {
            s.insert(s.len() - scale, '.');
            f.pad(&s)
        }
    }
}

/// Accepts `123`, `0.25`, `.5`, `1_794_000_000`
impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (int, frac) = match s.split_once('.') {
            Some((i, f)) => (i, f),
            None => (s, ""),
        };

        let mut coefficient = String::with_capacity(s.len());
        let mut scale: i64 = 0;
        for (part, fractional) in [(int, false), (frac, true)] {
            for c in part.chars() {
                match c {
                    '0'..='9' => {
                        coefficient.push(c);
                        if fractional { scale += 1; }
                    }
                    '_' => {}
                    _ => return Err(Error::InvalidNumber),
                }
            }
        }

        if coefficient.is_empty() {
            return Err(Error::InvalidNumber);
        }

        let unscaled = BigUint::parse_bytes(coefficient.as_bytes(), 10).ok_or(Error::InvalidNumber)?;
        Ok(Decimal::new(unscaled, scale))
    }
}
