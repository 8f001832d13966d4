//! Plain-text and LaTeX renderings.
//!
//! Both forms omit every part that is an identity: an exponent of 1, a
//! coefficient of 1 and an addend of 0.
//!
//! | ordinal | plain (`Display`) | LaTeX ([`Latex`]) |
//! |---|---|---|
//! | ω | `w` | `\omega` |
//! | ω² · 5 + 3 | `w^(2)*5 + 3` | `\omega^{2}\cdot5+3` |
//! | ω^ω + ω | `w^(w) + w` | `\omega^{\omega}+\omega` |

use std::fmt;

use num_traits::One;

use crate::number::Number;
use crate::ordinal::Ordinal;

/// Renders a value as LaTeX math, e.g. `\omega^{\omega}\cdot2+1`.
///
/// Obtained from [`Ordinal::latex`] or [`Number::latex`].
#[derive(Debug)]
pub struct Latex<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> Latex<'a, T> {
    pub(crate) fn new(value: &'a T) -> Self {
        Self(value)
    }
}

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("w")?;
        if !self.exponent.is_one() {
            write!(f, "^({})", self.exponent)?;
        }
        if !self.coefficient.is_one() {
            write!(f, "*{}", self.coefficient)?;
        }
        if !self.addend.is_zero() {
            write!(f, " + {}", self.addend)?;
        }
        Ok(())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(n) => write!(f, "{n}"),
            Self::Transfinite(o) => write!(f, "{o}"),
        }
    }
}

impl fmt::Display for Latex<'_, Ordinal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ordinal = self.0;
        f.write_str(r"\omega")?;
        if !ordinal.exponent.is_one() {
            write!(f, "^{{{}}}", ordinal.exponent.latex())?;
        }
        if !ordinal.coefficient.is_one() {
            write!(f, r"\cdot{}", ordinal.coefficient)?;
        }
        if !ordinal.addend.is_zero() {
            write!(f, "+{}", ordinal.addend.latex())?;
        }
        Ok(())
    }
}

impl fmt::Display for Latex<'_, Number> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Number::Finite(n) => write!(f, "{n}"),
            Number::Transfinite(o) => write!(f, "{}", o.latex()),
        }
    }
}
