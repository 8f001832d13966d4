//! Arbitrary precision natural numbers.
//!
//! This module provides a wrapper around `dashu::UBig` with the
//! semiring operations ordinal arithmetic needs on its finite side.

use dashu::base::BitTest;
use dashu::integer::UBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul};
use std::str::FromStr;

/// An arbitrary precision non-negative integer.
///
/// This type wraps `dashu::UBig`. There is no general subtraction: ordinals
/// below ε₀ are only ever added, multiplied and raised to powers.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Natural(UBig);

impl Natural {
    /// Creates a new natural number from a u64.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(UBig::from(value))
    }

    /// Creates a natural number from a string in the given base.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid unsigned integer.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, dashu::base::error::ParseError> {
        UBig::from_str_radix(s, radix).map(Self)
    }

    /// Returns the number of bits needed to represent this number.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Returns `self - 1`, or `None` for zero.
    #[must_use]
    pub fn pred(&self) -> Option<Self> {
        if self.0.is_zero() {
            None
        } else {
            Some(Self(self.0.clone() - UBig::ONE))
        }
    }

    /// Attempts to convert to a u64.
    ///
    /// Returns `None` if the value doesn't fit in a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.0).ok()
    }

    /// Attempts to convert to a usize.
    ///
    /// Returns `None` if the value doesn't fit in a usize.
    #[must_use]
    pub fn to_usize(&self) -> Option<usize> {
        usize::try_from(&self.0).ok()
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        Self(self.0.pow(exp))
    }

    /// Computes self^exp if `exp * bit_len(self)`, an upper bound on the
    /// size of the result, is at most `max_bits`.
    ///
    /// Returns `None` when the exponent does not fit in a usize or the
    /// bound is exceeded. Powers of 0 and 1 are always computed.
    #[must_use]
    pub fn checked_pow(&self, exp: &Self, max_bits: usize) -> Option<Self> {
        if self.0.is_zero() {
            return Some(if exp.0.is_zero() { Self::one() } else { Self::zero() });
        }
        if self.0.is_one() {
            return Some(Self::one());
        }
        let exp = exp.to_usize()?;
        // bit_len(a^e) <= e * bit_len(a)
        let (bits, overflow) = self.bit_len().overflowing_mul(exp);
        if overflow || bits > max_bits {
            return None;
        }
        Some(self.pow(exp))
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Self(UBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Natural {
    fn one() -> Self {
        Self(UBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({})", self.0)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Natural {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}

// Arithmetic operations
impl Add for Natural {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Natural> for Natural {
    type Output = Self;

    fn add(self, rhs: &Natural) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: Self) -> Self::Output {
        Natural(&self.0 + &rhs.0)
    }
}

impl Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Natural> for Natural {
    type Output = Self;

    fn mul(self, rhs: &Natural) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Self) -> Self::Output {
        Natural(&self.0 * &rhs.0)
    }
}

impl PartialEq<u64> for Natural {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_ops() {
        let a = Natural::new(10);
        let b = Natural::new(3);

        assert_eq!((a.clone() + b.clone()).to_u64(), Some(13));
        assert_eq!((&a * &b).to_u64(), Some(30));
        assert_eq!(a.pow(3).to_u64(), Some(1000));
        assert_eq!(b.pow(0), Natural::one());
    }

    #[test]
    fn test_identities() {
        assert!(Natural::zero().is_zero());
        assert!(Natural::one().is_one());
        assert!(!Natural::new(7).is_zero());
        assert_eq!(Natural::default(), Natural::zero());
        assert_eq!(Natural::new(42), 42u64);
        assert_ne!(Natural::new(42), 41u64);
    }

    #[test]
    fn test_large_numbers() {
        let a = Natural::from_str_radix("123456789012345678901234567890", 10).unwrap();
        let b: Natural = "987654321098765432109876543210".parse().unwrap();
        let sum = a + b;
        assert_eq!(sum.to_string(), "1111111110111111111011111111100");
        assert_eq!(sum.to_u64(), None);
    }

    #[test]
    fn test_no_overflow_on_u64_boundary() {
        let max = Natural::new(u64::MAX);
        let doubled = &max + &max;
        assert!(doubled > max);
        assert_eq!(doubled.to_u64(), None);
        assert_eq!(doubled.bit_len(), 65);
    }

    #[test]
    fn test_pred() {
        assert_eq!(Natural::zero().pred(), None);
        assert_eq!(Natural::new(1).pred(), Some(Natural::zero()));
        assert_eq!(Natural::new(9).pred(), Some(Natural::new(8)));
    }

    #[test]
    fn test_checked_pow() {
        assert_eq!(Natural::new(3).checked_pow(&Natural::new(4), 64), Some(Natural::new(81)));
        assert_eq!(Natural::zero().checked_pow(&Natural::zero(), 64), Some(Natural::one()));

        let huge = Natural::new(1 << 40);
        assert_eq!(Natural::zero().checked_pow(&huge, 64), Some(Natural::zero()));
        assert_eq!(Natural::one().checked_pow(&huge, 64), Some(Natural::one()));
        assert_eq!(Natural::new(2).checked_pow(&huge, 1 << 24), None);

        // 2^64 needs 65 bits
        assert_eq!(Natural::new(2).checked_pow(&Natural::new(64), 64), None);
        let bound = Natural::new(2).checked_pow(&Natural::new(31), 64);
        assert_eq!(bound.map(|n| n.bit_len()), Some(32));
    }

    #[test]
    fn test_display_and_debug() {
        let n = Natural::new(99);
        assert_eq!(n.to_string(), "99");
        assert_eq!(format!("{n:?}"), "Natural(99)");
    }
}
