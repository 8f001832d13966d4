//! Transfinite addition, multiplication and exponentiation.
//!
//! Each operation matches on the finite/transfinite tag of both operands.
//! The rules are non-commutative:
//!
//! | operation | finite left | transfinite left |
//! |---|---|---|
//! | `n + α` | `α` | — |
//! | `α + β` | — | merges or absorbs by exponent |
//! | `n · α` | `0` if `n = 0`, else `α` | — |
//! | `α · β` | — | `ω^(e₁+e₂) · c₂ + (a₁·a₂ + α·a₂)` |
//! | `α^n` | — | `ω^(e·n) · c + a·α` |
//!
//! Results never alias a value that could later change: subtrees are
//! shared through [`Arc`] and nothing is mutated in place.

use std::ops::{Add, Mul};
use std::sync::Arc;

use num_traits::{One, Zero};
use tracing::debug;
use transfinite_integers::Natural;

use crate::error::OrdinalError;
use crate::number::Number;
use crate::ordinal::Ordinal;

fn add_numbers(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        (Number::Finite(a), Number::Finite(b)) => Number::Finite(a + b),
        // finite left operands are absorbed
        (Number::Finite(_), Number::Transfinite(_)) => rhs.clone(),
        (Number::Transfinite(a), _) => add_to_ordinal(a, rhs).into(),
    }
}

fn add_to_ordinal(lhs: &Ordinal, rhs: &Number) -> Ordinal {
    match rhs {
        Number::Finite(_) => extend_tail(lhs, rhs),
        Number::Transfinite(other) => add_ordinals(lhs, other),
    }
}

fn extend_tail(lhs: &Ordinal, rhs: &Number) -> Ordinal {
    Ordinal {
        exponent: lhs.exponent.clone(),
        coefficient: lhs.coefficient.clone(),
        addend: add_numbers(&lhs.addend, rhs),
    }
}

fn add_ordinals(lhs: &Ordinal, rhs: &Arc<Ordinal>) -> Ordinal {
    if lhs.exponent > rhs.exponent {
        return extend_tail(lhs, &Number::Transfinite(Arc::clone(rhs)));
    }

    if lhs.exponent == rhs.exponent {
        let addend = if lhs.addend.is_finite() {
            rhs.addend.clone()
        } else {
            add_numbers(&lhs.addend, &rhs.addend)
        };
        return Ordinal {
            exponent: lhs.exponent.clone(),
            coefficient: &lhs.coefficient + &rhs.coefficient,
            addend,
        };
    }

    Ordinal::clone(rhs)
}

fn mul_numbers(lhs: &Number, rhs: &Number) -> Number {
    match (lhs, rhs) {
        (Number::Finite(a), Number::Finite(b)) => Number::Finite(a * b),
        // positive finite multiples on the left collapse into the ordinal
        (Number::Finite(a), Number::Transfinite(_)) => {
            if a.is_zero() {
                Number::zero()
            } else {
                rhs.clone()
            }
        }
        (Number::Transfinite(a), _) => mul_ordinal(a, rhs),
    }
}

fn mul_ordinal(lhs: &Ordinal, rhs: &Number) -> Number {
    match rhs {
        Number::Finite(n) if n.is_zero() => Number::zero(),
        Number::Finite(n) => scale(lhs, n).into(),
        Number::Transfinite(other) => mul_ordinals(lhs, other).into(),
    }
}

fn scale(lhs: &Ordinal, n: &Natural) -> Ordinal {
    Ordinal {
        exponent: lhs.exponent.clone(),
        coefficient: &lhs.coefficient * n,
        addend: lhs.addend.clone(),
    }
}

fn mul_ordinals(lhs: &Ordinal, rhs: &Ordinal) -> Ordinal {
    let exponent = add_numbers(&lhs.exponent, &rhs.exponent);
    let tail_product = mul_numbers(&lhs.addend, &rhs.addend);
    let distributed = mul_ordinal(lhs, &rhs.addend);
    Ordinal {
        exponent,
        coefficient: rhs.coefficient.clone(),
        addend: add_numbers(&tail_product, &distributed),
    }
}

/// Largest finite power, in bits, that exponentiation will evaluate.
pub const MAX_POWER_BITS: usize = 1 << 24;

fn finite_pow(base: &Natural, exp: &Natural) -> Result<Natural, OrdinalError> {
    base.checked_pow(exp, MAX_POWER_BITS).ok_or_else(|| {
        debug!(%base, %exp, "finite power exceeds the size bound");
        OrdinalError::ExponentTooLarge(exp.clone())
    })
}

fn unsupported_power(base: &Natural, exp: &Arc<Ordinal>) -> OrdinalError {
    debug!(%base, exponent = %exp, "finite base raised to an unsupported ordinal power");
    OrdinalError::UnsupportedExponent {
        base: Number::Finite(base.clone()),
        exponent: Number::Transfinite(Arc::clone(exp)),
    }
}

fn finite_pow_ordinal(base: &Natural, exp: &Arc<Ordinal>) -> Result<Number, OrdinalError> {
    // 0^α = 0 and 1^α = 1 for every α ≥ 1
    if base.is_zero() || base.is_one() {
        return Ok(Number::Finite(base.clone()));
    }

    let Number::Finite(tail) = &exp.addend else {
        return Err(unsupported_power(base, exp));
    };

    // n^(ω·c + a) = ω^c · n^a
    // n^(ω^k·c + a) = ω^(ω^(k-1)·c) · n^a for finite k > 1
    // n^(ω^α·c + a) = ω^(ω^α·c) · n^a for transfinite α
    let exponent = match &exp.exponent {
        Number::Finite(k) if k.is_one() => Number::Finite(exp.coefficient.clone()),
        Number::Finite(k) => {
            let Some(k) = k.pred() else {
                return Err(unsupported_power(base, exp));
            };
            Ordinal {
                exponent: Number::Finite(k),
                coefficient: exp.coefficient.clone(),
                addend: Number::zero(),
            }
            .into()
        }
        alpha @ Number::Transfinite(_) => Ordinal {
            exponent: alpha.clone(),
            coefficient: exp.coefficient.clone(),
            addend: Number::zero(),
        }
        .into(),
    };

    let power = Ordinal {
        exponent,
        coefficient: finite_pow(base, tail)?,
        addend: Number::zero(),
    };
    Ok(power.into())
}

impl Ordinal {
    /// Raises this ordinal to a finite power.
    ///
    /// `α^0 = 1`; for `n > 0` the exponent is multiplied by `n` and the
    /// addend is multiplied by `α` once.
    ///
    /// # Errors
    ///
    /// Returns [`OrdinalError::UnsupportedExponent`] if the exponent is
    /// transfinite.
    pub fn pow(&self, exp: impl Into<Number>) -> Result<Number, OrdinalError> {
        match exp.into() {
            Number::Finite(n) if n.is_zero() => Ok(Number::one()),
            Number::Finite(n) => {
                let exponent = mul_numbers(&self.exponent, &Number::Finite(n));
                let addend = mul_numbers(&self.addend, &Number::from(self.clone()));
                Ok(Ordinal {
                    exponent,
                    coefficient: self.coefficient.clone(),
                    addend,
                }
                .into())
            }
            exponent @ Number::Transfinite(_) => {
                debug!(base = %self, %exponent, "transfinite exponent is not supported");
                Err(OrdinalError::UnsupportedExponent {
                    base: self.clone().into(),
                    exponent,
                })
            }
        }
    }
}

impl Number {
    /// Raises this number to a power.
    ///
    /// Naturals raised to naturals are evaluated exactly. A natural
    /// raised to an ordinal `ω^e · c + a` is evaluated whenever the
    /// addend `a` is finite.
    ///
    /// # Errors
    ///
    /// Returns [`OrdinalError::UnsupportedExponent`] for exponents that
    /// cannot be evaluated, and [`OrdinalError::ExponentTooLarge`] when a
    /// finite power would exceed [`MAX_POWER_BITS`].
    pub fn pow(&self, exp: impl Into<Number>) -> Result<Number, OrdinalError> {
        let exp = exp.into();
        match self {
            Self::Transfinite(base) => base.pow(exp),
            Self::Finite(base) => match &exp {
                Self::Finite(e) => finite_pow(base, e).map(Self::Finite),
                Self::Transfinite(e) => finite_pow_ordinal(base, e),
            },
        }
    }
}

// Operator impls

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        add_numbers(&self, &rhs)
    }
}

impl Add<&Number> for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Self::Output {
        add_numbers(self, rhs)
    }
}

impl Add<u64> for Number {
    type Output = Number;

    fn add(self, rhs: u64) -> Self::Output {
        add_numbers(&self, &Number::from(rhs))
    }
}

impl Mul for Number {
    type Output = Number;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_numbers(&self, &rhs)
    }
}

impl Mul<&Number> for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Self::Output {
        mul_numbers(self, rhs)
    }
}

impl Mul<u64> for Number {
    type Output = Number;

    fn mul(self, rhs: u64) -> Self::Output {
        mul_numbers(&self, &Number::from(rhs))
    }
}

impl Add for Ordinal {
    type Output = Ordinal;

    fn add(self, rhs: Self) -> Self::Output {
        add_ordinals(&self, &Arc::new(rhs))
    }
}

impl Add<&Ordinal> for &Ordinal {
    type Output = Ordinal;

    fn add(self, rhs: &Ordinal) -> Self::Output {
        add_ordinals(self, &Arc::new(rhs.clone()))
    }
}

impl Add<u64> for Ordinal {
    type Output = Ordinal;

    fn add(self, rhs: u64) -> Self::Output {
        extend_tail(&self, &Number::from(rhs))
    }
}

impl Add<Ordinal> for u64 {
    type Output = Ordinal;

    fn add(self, rhs: Ordinal) -> Self::Output {
        rhs
    }
}

impl Mul for Ordinal {
    type Output = Ordinal;

    fn mul(self, rhs: Self) -> Self::Output {
        mul_ordinals(&self, &rhs)
    }
}

impl Mul<&Ordinal> for &Ordinal {
    type Output = Ordinal;

    fn mul(self, rhs: &Ordinal) -> Self::Output {
        mul_ordinals(self, rhs)
    }
}

impl Mul<u64> for Ordinal {
    type Output = Number;

    fn mul(self, rhs: u64) -> Self::Output {
        mul_ordinal(&self, &Number::from(rhs))
    }
}

impl Mul<Ordinal> for u64 {
    type Output = Number;

    fn mul(self, rhs: Ordinal) -> Self::Output {
        if self == 0 {
            Number::zero()
        } else {
            rhs.into()
        }
    }
}
