// ============================================================================
// Fixed-Point Number
// Binary scaled-integer arithmetic with compile-time precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-point real number with `PRECISION` fractional bits.
///
/// Internally stores `value × 2^PRECISION` as an i32. Repeated additions of
/// the same step are exact, which is what lets the scaling engine walk long
/// axes without drift: the only rounding happens once, when the step itself
/// is computed.
///
/// # Type Parameter
/// - `PRECISION`: Number of fractional bits (0-30).
///
/// # Value Range
/// With PRECISION=15 ([`Fixed32`]):
/// - Minimum: -65536.0
/// - Maximum: +65535.99996948...
/// - Resolution: 1/32768
///
/// # Example
/// ```
/// use ndscale::numeric::Fixed32;
///
/// let half: Fixed32 = "0.5".parse().unwrap();
/// let three = Fixed32::from_int(3);
/// assert_eq!((three * half).to_string(), "1.5000");
/// assert_eq!((three * half).to_int(), 1);
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[repr(transparent)]
pub struct FixedPoint<const PRECISION: u32>(i32);

/// The 32-bit, 15-fractional-bit format used for source coordinates.
pub type Fixed32 = FixedPoint<15>;

impl<const P: u32> FixedPoint<P> {
    /// The scale factor (2^PRECISION)
    pub const SCALE: i32 = 1 << P;

    const FRACTION_MASK: i32 = (1 << P) - 1;

    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One (1.0)
    pub const ONE: Self = Self(1 << P);

    /// Maximum representable value
    pub const MAX: Self = Self(i32::MAX);

    /// Minimum representable value
    pub const MIN: Self = Self(i32::MIN);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation.
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Create from an integer by shifting it into the integer bits.
    ///
    /// The caller must keep `value` within the integer range of the format;
    /// use [`FixedPoint::checked_from_int`] when that is not known.
    #[inline]
    pub const fn from_int(value: i32) -> Self {
        Self(value << P)
    }

    /// Create from an integer, reporting values that do not fit.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value is out of range.
    #[inline]
    pub fn checked_from_int(value: i32) -> NumericResult<Self> {
        Self::narrow(i64::from(value) << P)
    }

    fn narrow(wide: i64) -> NumericResult<Self> {
        i32::try_from(wide).map(Self).map_err(|_| {
            if wide > 0 {
                NumericError::Overflow
            } else {
                NumericError::Underflow
            }
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled by 2^PRECISION).
    #[inline]
    pub const fn raw_value(self) -> i32 {
        self.0
    }

    /// Convert to an integer, rounding toward negative infinity.
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> P
    }

    /// The whole-number part, truncated toward zero.
    ///
    /// Unlike [`to_int`](Self::to_int), `-0.5` gives `0` here. Use `to_int`
    /// for sampling source indices.
    #[inline]
    pub const fn integer_part(self) -> i32 {
        self.0 / Self::SCALE
    }

    /// The fractional bits, always in `0..SCALE`.
    #[inline]
    pub const fn fractional_bits(self) -> i32 {
        self.0 & Self::FRACTION_MASK
    }

    /// Check if value is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Check if value is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Get absolute value.
    #[inline]
    pub fn abs(self) -> NumericResult<Self> {
        self.0.checked_abs().map(Self).ok_or(NumericError::Overflow)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_add(rhs.0).map(Self).ok_or(if rhs.0 > 0 {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        })
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        self.0.checked_sub(rhs.0).map(Self).ok_or(if rhs.0 < 0 {
            NumericError::Overflow
        } else {
            NumericError::Underflow
        })
    }

    /// Checked multiplication.
    ///
    /// Uses an i64 intermediate, then shifts back down (truncating toward
    /// negative infinity).
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    #[inline]
    pub fn checked_mul(self, rhs: Self) -> NumericResult<Self> {
        Self::narrow((i64::from(self.0) * i64::from(rhs.0)) >> P)
    }

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` is zero, `Overflow` or `Underflow`
    /// if the quotient is out of range.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.0 == 0 {
            return Err(NumericError::DivisionByZero);
        }
        Self::narrow((i64::from(self.0) << P) / i64::from(rhs.0))
    }

    /// Multiply by an integer (no rescaling needed).
    #[inline]
    pub fn mul_int(self, rhs: i32) -> Self {
        Self(self.0 * rhs)
    }

    /// Divide by an integer (no rescaling needed), truncating toward zero.
    ///
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    pub fn div_int(self, rhs: i32) -> Self {
        Self(self.0 / rhs)
    }

    // ========================================================================
    // Decimal Boundary
    // ========================================================================

    /// Convert from `rust_decimal::Decimal`, flooring to the nearest
    /// representable value below.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the value is out of range.
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = d
            .checked_mul(Decimal::from(Self::SCALE))
            .ok_or(NumericError::Overflow)?
            .floor();
        let raw = scaled.to_i64().ok_or(if d.is_sign_negative() {
            NumericError::Underflow
        } else {
            NumericError::Overflow
        })?;
        Self::narrow(raw)
    }

    /// Convert to `rust_decimal::Decimal`. Exact for every value.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(Self::SCALE)
    }
}

/// Build a [`Fixed32`] from an integer part and up to four decimal digits.
///
/// The fraction is read as if always written with four digits: `5` is
/// `.5`, `25` is `.25`, `125` is `.125` and `1234` is `.1234`. Leading zeros
/// cannot be expressed. The fraction is added to the integer part's raw
/// value, so `fixed32(-1, 5)` is `-0.5`.
///
/// # Errors
/// Returns `InvalidInput` if `fraction` has more than four digits.
pub fn fixed32(integer: i16, fraction: u16) -> NumericResult<Fixed32> {
    const FRACTION_SCALE: i32 = (0x7fff << 15) / 9999;

    let digits = match fraction {
        0..=9 => i32::from(fraction) * 1000,
        10..=99 => i32::from(fraction) * 100,
        100..=999 => i32::from(fraction) * 10,
        1000..=9999 => i32::from(fraction),
        _ => return Err(NumericError::InvalidInput),
    };

    let whole = Fixed32::from_int(i32::from(integer));
    Ok(Fixed32::from_raw(whole.raw_value() + ((digits * FRACTION_SCALE) >> 15)))
}

// ============================================================================
// Operators
// ============================================================================

impl<const P: u32> AddAssign for FixedPoint<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<const P: u32> SubAssign for FixedPoint<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<const P: u32> MulAssign for FixedPoint<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        self.0 = ((i64::from(self.0) * i64::from(rhs.0)) >> P) as i32;
    }
}

impl<const P: u32> DivAssign for FixedPoint<P> {
    /// # Panics
    /// Panics if `rhs` is zero.
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        self.0 = ((i64::from(self.0) << P) / i64::from(rhs.0)) as i32;
    }
}

impl<const P: u32> Add for FixedPoint<P> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<const P: u32> Sub for FixedPoint<P> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<const P: u32> Mul for FixedPoint<P> {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<const P: u32> Div for FixedPoint<P> {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: Self) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<const P: u32> Neg for FixedPoint<P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<const P: u32> From<i32> for FixedPoint<P> {
    #[inline]
    fn from(value: i32) -> Self {
        Self::from_int(value)
    }
}

impl<const P: u32> From<FixedPoint<P>> for i32 {
    #[inline]
    fn from(value: FixedPoint<P>) -> Self {
        value.to_int()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const P: u32> fmt::Debug for FixedPoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedPoint<{}>({}, raw={})", P, self, self.0)
    }
}

impl<const P: u32> fmt::Display for FixedPoint<P> {
    /// Four decimal digits, truncated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = i64::from(self.0).unsigned_abs();
        let int_part = magnitude >> P;
        let frac_part = ((magnitude & Self::FRACTION_MASK as u64) * 10_000) >> P;

        if self.0 < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}.{:04}", int_part, frac_part)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<const P: u32> std::str::FromStr for FixedPoint<P> {
    type Err = NumericError;

    /// Parse from a decimal string with at most four fractional digits.
    ///
    /// # Examples
    /// - "12" -> 12.0
    /// - "0.5" -> 0.5
    /// - "-3.25" -> -3.25
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(NumericError::InvalidInput);
        }
        if frac_str.len() > 4 {
            return Err(NumericError::PrecisionLoss);
        }

        let int_val: i64 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::Overflow)?
        };

        let frac_raw = if frac_str.is_empty() {
            0
        } else {
            let frac_val: i64 = frac_str.parse().map_err(|_| NumericError::InvalidInput)?;
            (frac_val << P) / 10_i64.pow(frac_str.len() as u32)
        };

        let magnitude = int_val
            .checked_mul(i64::from(Self::SCALE))
            .and_then(|whole| whole.checked_add(frac_raw))
            .ok_or(NumericError::Overflow)?;

        Self::narrow(if is_negative { -magnitude } else { magnitude })
    }
}

// ============================================================================
// Tests
// ============================================================================
