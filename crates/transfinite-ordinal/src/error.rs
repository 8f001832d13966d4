//! Errors reported by ordinal operations.

use thiserror::Error;

use crate::number::Number;
use transfinite_integers::Natural;

/// Errors that can occur during ordinal arithmetic.
///
/// Addition and multiplication are total; only exponentiation,
/// checked comparison and validated construction can fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrdinalError {
    /// The exponent is transfinite and the result would not be representable.
    #[error("cannot raise {base} to the transfinite power {exponent}")]
    UnsupportedExponent {
        /// The base of the power.
        base: Number,
        /// The rejected exponent.
        exponent: Number,
    },

    /// Neither operand orders itself before the other.
    #[error("cannot order {left} against {right}")]
    UnsupportedComparison {
        /// The left operand.
        left: Number,
        /// The right operand.
        right: Number,
    },

    /// A finite power too large to evaluate.
    #[error("finite power with exponent {0} is too large to evaluate")]
    ExponentTooLarge(Natural),

    /// An ordinal was built with a zero coefficient.
    #[error("coefficient must be an integer greater than 0")]
    ZeroCoefficient,

    /// An ordinal was built with a zero exponent.
    #[error("exponent must be an ordinal or an integer greater than 0")]
    ZeroExponent,

    /// The addend is not of strictly lower order than the leading term.
    #[error("addend exponent {addend} must be less than exponent {exponent}")]
    AddendNotSmaller {
        /// The exponent of the leading term.
        exponent: Number,
        /// The exponent of the addend's leading term.
        addend: Number,
    },
}
