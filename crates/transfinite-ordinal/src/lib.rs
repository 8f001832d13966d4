//! # transfinite-ordinal
//!
//! Ordinal numbers below ε₀ and their transfinite arithmetic.
//!
//! An [`Ordinal`] is the recursive value `ω^exponent · coefficient + addend`,
//! where the exponent and the addend are themselves either finite
//! naturals or ordinals. A [`Number`] is either of the two, and every
//! binary operation dispatches on the finite/transfinite tag of each
//! operand.
//!
//! ## Arithmetic
//!
//! Ordinal arithmetic is not integer arithmetic:
//! - addition absorbs smaller terms on the left (`1 + ω = ω`)
//! - finite multiples on the left collapse (`2 · ω = ω`)
//! - exponentiation by a transfinite exponent is not supported
//!
//! ```rust
//! use transfinite_ordinal::{Number, Ordinal};
//!
//! let w = Ordinal::omega();
//! assert_eq!(w.clone() + 3u64, Ordinal::omega().with_addend(3u64));
//! assert_eq!(3u64 + w.clone(), w);
//! assert_eq!(w.pow(2u64).unwrap(), Number::from(Ordinal::omega().with_exponent(2u64)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arithmetic;
pub mod compare;
pub mod error;
pub mod number;
pub mod ordinal;
pub mod render;

#[cfg(test)]
mod proptests;

pub use error::OrdinalError;
pub use number::Number;
pub use ordinal::Ordinal;
pub use render::Latex;
pub use transfinite_integers::Natural;
