//! Finite-or-transfinite numbers.
//!
//! Every operand of ordinal arithmetic is either a natural number or an
//! ordinal. [`Number`] makes that tag explicit so each operation can
//! match on it.

use std::sync::Arc;

use num_traits::{One, Zero};
use transfinite_integers::Natural;

use crate::ordinal::Ordinal;
use crate::render::Latex;

/// A finite natural number or a transfinite ordinal below ε₀.
///
/// Nested ordinals are shared behind an [`Arc`]. Values are never
/// mutated after construction, so sharing a subtree is the same as
/// copying it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Number {
    /// A non-negative integer.
    Finite(Natural),
    /// An ordinal `ω^e · c + a`.
    Transfinite(Arc<Ordinal>),
}

impl Number {
    /// The finite ordinal 0.
    #[must_use]
    pub fn zero() -> Self {
        Self::Finite(Natural::zero())
    }

    /// The finite ordinal 1.
    #[must_use]
    pub fn one() -> Self {
        Self::Finite(Natural::one())
    }

    /// Returns true if this is a natural number.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Returns true if this is an ordinal.
    #[must_use]
    pub fn is_transfinite(&self) -> bool {
        matches!(self, Self::Transfinite(_))
    }

    /// Returns true if this is the finite ordinal 0.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Finite(n) => n.is_zero(),
            Self::Transfinite(_) => false,
        }
    }

    /// Returns true if this is the finite ordinal 1.
    #[must_use]
    pub fn is_one(&self) -> bool {
        match self {
            Self::Finite(n) => n.is_one(),
            Self::Transfinite(_) => false,
        }
    }

    /// Returns the natural number, if finite.
    #[must_use]
    pub fn as_finite(&self) -> Option<&Natural> {
        match self {
            Self::Finite(n) => Some(n),
            Self::Transfinite(_) => None,
        }
    }

    /// Returns the ordinal, if transfinite.
    #[must_use]
    pub fn as_ordinal(&self) -> Option<&Ordinal> {
        match self {
            Self::Finite(_) => None,
            Self::Transfinite(o) => Some(&**o),
        }
    }

    /// Returns a view that renders this number as LaTeX.
    #[must_use]
    pub fn latex(&self) -> Latex<'_, Self> {
        Latex::new(self)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Natural> for Number {
    fn from(value: Natural) -> Self {
        Self::Finite(value)
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Finite(Natural::new(value))
    }
}

impl From<Ordinal> for Number {
    fn from(value: Ordinal) -> Self {
        Self::Transfinite(Arc::new(value))
    }
}

impl From<Arc<Ordinal>> for Number {
    fn from(value: Arc<Ordinal>) -> Self {
        Self::Transfinite(value)
    }
}
