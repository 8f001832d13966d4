//! # Transfinite
//!
//! Ordinal arithmetic below ε₀ written in Rust.
//!
//! Ordinals are represented as `ω^exponent · coefficient + addend`
//! chains, with arbitrary precision naturals for every finite part.
//!
//! ## Features
//!
//! - **Transfinite Arithmetic**: addition, multiplication and finite powers
//! - **Arbitrary Precision**: coefficients and finite addends never overflow
//! - **Two Orders**: the field-wise operator order and the Cantor order
//! - **Renderings**: plain text (`w^(2)*3 + 1`) and LaTeX
//!
//! ## Quick Start
//!
//! ```rust
//! use transfinite::prelude::*;
//!
//! let w = omega();
//! let w_squared = (w.clone() * w.clone()) + w.clone();
//! assert_eq!(w_squared.to_string(), "w^(2) + w");
//! assert_eq!(w_squared.latex().to_string(), r"\omega^{2}+\omega");
//! assert!(w_squared > 1_000_000u64);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use transfinite_integers as integers;
pub use transfinite_ordinal as ordinal;

use transfinite_ordinal::Ordinal;

/// Returns ω, the first infinite ordinal.
#[must_use]
pub fn omega() -> Ordinal {
    Ordinal::omega()
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::omega;
    pub use transfinite_integers::Natural;
    pub use transfinite_ordinal::{Latex, Number, Ordinal, OrdinalError};
}
