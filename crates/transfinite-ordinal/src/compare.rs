//! Ordering of ordinals and naturals.
//!
//! Two orders are available:
//!
//! - The operator order (`<`, `>`, `<=`, `>=`). Every natural lies below
//!   every ordinal. Between two ordinals, `a < b` holds as soon as *any*
//!   of the exponent, the coefficient or the addend of `a` is below the
//!   corresponding field of `b`, and `>` is symmetric. This field-wise
//!   order is what addition dispatches on. It is not the true ordinal
//!   order: `ω^2 < ω·3` holds through the coefficient even though
//!   `ω^2 > ω·3` holds through the exponent. `partial_cmp` returns `None`
//!   for such pairs. `<=` is `<` or `==`, and `>=` is the negation of
//!   `<`, so neither `ω^2 >= ω·3` nor `ω·3 >= ω^2` holds.
//! - The Cantor order ([`Number::cantor_cmp`]), which compares exponent,
//!   then coefficient, then addend, and is a total order.

use std::cmp::Ordering;

use crate::error::OrdinalError;
use crate::number::Number;
use crate::ordinal::Ordinal;

fn classify(eq: bool, lt: bool, gt: bool) -> Option<Ordering> {
    match (eq, lt, gt) {
        (true, _, _) => Some(Ordering::Equal),
        (false, true, false) => Some(Ordering::Less),
        (false, false, true) => Some(Ordering::Greater),
        _ => None,
    }
}

impl Number {
    fn field_lt(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a < b,
            (Self::Finite(_), Self::Transfinite(_)) => true,
            (Self::Transfinite(_), Self::Finite(_)) => false,
            (Self::Transfinite(a), Self::Transfinite(b)) => a.field_lt(b),
        }
    }

    fn field_gt(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a > b,
            (Self::Finite(_), Self::Transfinite(_)) => false,
            (Self::Transfinite(_), Self::Finite(_)) => true,
            (Self::Transfinite(a), Self::Transfinite(b)) => a.field_gt(b),
        }
    }

    /// Compares two numbers in the true ordinal order.
    ///
    /// Naturals come first, ordered numerically; ordinals follow,
    /// ordered lexicographically by exponent, coefficient and addend.
    #[must_use]
    pub fn cantor_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Finite(a), Self::Finite(b)) => a.cmp(b),
            (Self::Finite(_), Self::Transfinite(_)) => Ordering::Less,
            (Self::Transfinite(_), Self::Finite(_)) => Ordering::Greater,
            (Self::Transfinite(a), Self::Transfinite(b)) => a.cantor_cmp(b),
        }
    }

    /// Compares two numbers in the operator order, failing when the
    /// order has no answer.
    ///
    /// # Errors
    ///
    /// Returns [`OrdinalError::UnsupportedComparison`] when `partial_cmp`
    /// yields `None`.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, OrdinalError> {
        self.partial_cmp(other)
            .ok_or_else(|| OrdinalError::UnsupportedComparison {
                left: self.clone(),
                right: other.clone(),
            })
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        classify(self == other, self.field_lt(other), self.field_gt(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.field_lt(other)
    }

    fn le(&self, other: &Self) -> bool {
        self.field_lt(other) || self == other
    }

    fn gt(&self, other: &Self) -> bool {
        self.field_gt(other)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.field_lt(other)
    }
}

impl Ordinal {
    fn field_lt(&self, other: &Self) -> bool {
        self.exponent.field_lt(&other.exponent)
            || self.coefficient < other.coefficient
            || self.addend.field_lt(&other.addend)
    }

    fn field_gt(&self, other: &Self) -> bool {
        self.exponent.field_gt(&other.exponent)
            || self.coefficient > other.coefficient
            || self.addend.field_gt(&other.addend)
    }

    /// Compares two ordinals in the true ordinal order.
    #[must_use]
    pub fn cantor_cmp(&self, other: &Self) -> Ordering {
        self.exponent
            .cantor_cmp(&other.exponent)
            .then_with(|| self.coefficient.cmp(&other.coefficient))
            .then_with(|| self.addend.cantor_cmp(&other.addend))
    }
}

impl PartialOrd for Ordinal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        classify(self == other, self.field_lt(other), self.field_gt(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.field_lt(other)
    }

    fn le(&self, other: &Self) -> bool {
        self.field_lt(other) || self == other
    }

    fn gt(&self, other: &Self) -> bool {
        self.field_gt(other)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.field_lt(other)
    }
}

// An ordinal is never equal to a natural and always above it.
impl PartialEq<u64> for Ordinal {
    fn eq(&self, _other: &u64) -> bool {
        false
    }
}

impl PartialEq<Ordinal> for u64 {
    fn eq(&self, _other: &Ordinal) -> bool {
        false
    }
}

impl PartialOrd<u64> for Ordinal {
    fn partial_cmp(&self, _other: &u64) -> Option<Ordering> {
        Some(Ordering::Greater)
    }
}

impl PartialOrd<Ordinal> for u64 {
    fn partial_cmp(&self, _other: &Ordinal) -> Option<Ordering> {
        Some(Ordering::Less)
    }
}

impl PartialEq<u64> for Number {
    fn eq(&self, other: &u64) -> bool {
        match self {
            Self::Finite(n) => n == other,
            Self::Transfinite(_) => false,
        }
    }
}
