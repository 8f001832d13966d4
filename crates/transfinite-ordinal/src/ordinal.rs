//! The ordinal value type.
//!
//! An [`Ordinal`] denotes
//!
//! ```text
//!      exponent
//!     ω          · coefficient + addend
//! ```
//!
//! where `exponent` and `addend` are [`Number`]s and `coefficient` is a
//! positive natural. Following the addend links yields a descending
//! chain of terms that ends in a natural number.

use std::cmp::Ordering;

use num_traits::{One, Zero};
use tracing::debug;
use transfinite_integers::Natural;

use crate::error::OrdinalError;
use crate::number::Number;
use crate::render::Latex;

/// A transfinite ordinal below ε₀.
///
/// Construction through [`Ordinal::new`] performs no validation and no
/// normalization: the three fields read back exactly as given. Use
/// [`Ordinal::try_new`] to reject malformed terms.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ordinal {
    pub(crate) exponent: Number,
    pub(crate) coefficient: Natural,
    pub(crate) addend: Number,
}

impl Ordinal {
    /// Creates ω, the smallest infinite ordinal.
    #[must_use]
    pub fn omega() -> Self {
        Self {
            exponent: Number::one(),
            coefficient: Natural::one(),
            addend: Number::zero(),
        }
    }

    /// Creates `ω^exponent · coefficient + addend` without validation.
    #[must_use]
    pub fn new(
        exponent: impl Into<Number>,
        coefficient: impl Into<Natural>,
        addend: impl Into<Number>,
    ) -> Self {
        Self {
            exponent: exponent.into(),
            coefficient: coefficient.into(),
            addend: addend.into(),
        }
    }

    /// Creates `ω^exponent · coefficient + addend`, checking that the
    /// term is well formed.
    ///
    /// # Errors
    ///
    /// Returns an error if the coefficient or a finite exponent is zero,
    /// or if a transfinite addend is not of strictly lower order than
    /// the leading term.
    pub fn try_new(
        exponent: impl Into<Number>,
        coefficient: impl Into<Natural>,
        addend: impl Into<Number>,
    ) -> Result<Self, OrdinalError> {
        let ordinal = Self::new(exponent, coefficient, addend);
        ordinal.validate()?;
        Ok(ordinal)
    }

    fn validate(&self) -> Result<(), OrdinalError> {
        if self.coefficient.is_zero() {
            debug!(ordinal = %self, "rejected ordinal with zero coefficient");
            return Err(OrdinalError::ZeroCoefficient);
        }
        if self.exponent.is_zero() {
            debug!(ordinal = %self, "rejected ordinal with zero exponent");
            return Err(OrdinalError::ZeroExponent);
        }
        if let Number::Transfinite(tail) = &self.addend {
            if tail.exponent.cantor_cmp(&self.exponent) != Ordering::Less {
                debug!(ordinal = %self, "rejected ordinal with oversized addend");
                return Err(OrdinalError::AddendNotSmaller {
                    exponent: self.exponent.clone(),
                    addend: tail.exponent.clone(),
                });
            }
        }
        Ok(())
    }

    /// Replaces the exponent.
    #[must_use]
    pub fn with_exponent(mut self, exponent: impl Into<Number>) -> Self {
        self.exponent = exponent.into();
        self
    }

    /// Replaces the coefficient.
    #[must_use]
    pub fn with_coefficient(mut self, coefficient: impl Into<Natural>) -> Self {
        self.coefficient = coefficient.into();
        self
    }

    /// Replaces the addend.
    #[must_use]
    pub fn with_addend(mut self, addend: impl Into<Number>) -> Self {
        self.addend = addend.into();
        self
    }

    /// Returns the exponent of the leading term.
    #[must_use]
    pub fn exponent(&self) -> &Number {
        &self.exponent
    }

    /// Returns the coefficient of the leading term.
    #[must_use]
    pub fn coefficient(&self) -> &Natural {
        &self.coefficient
    }

    /// Returns everything added after the leading term.
    #[must_use]
    pub fn addend(&self) -> &Number {
        &self.addend
    }

    /// Consumes the ordinal, returning `(exponent, coefficient, addend)`.
    #[must_use]
    pub fn into_parts(self) -> (Number, Natural, Number) {
        (self.exponent, self.coefficient, self.addend)
    }

    /// Returns true if this is a limit ordinal.
    ///
    /// The chain of addends of a limit ordinal ends in 0.
    #[must_use]
    pub fn is_limit(&self) -> bool {
        match &self.addend {
            Number::Finite(n) => n.is_zero(),
            Number::Transfinite(tail) => tail.is_limit(),
        }
    }

    /// Returns true if this is a successor ordinal.
    #[must_use]
    pub fn is_successor(&self) -> bool {
        !self.is_limit()
    }

    /// Returns a view that renders this ordinal as LaTeX.
    #[must_use]
    pub fn latex(&self) -> Latex<'_, Self> {
        Latex::new(self)
    }
}

impl Default for Ordinal {
    fn default() -> Self {
        Self::omega()
    }
}
