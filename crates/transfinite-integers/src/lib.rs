//! # transfinite-integers
//!
//! Arbitrary precision natural numbers for Transfinite.
//!
//! Every finite ordinal is a non-negative integer. This crate wraps
//! `dashu` to provide [`Natural`], the finite half of the ordinal
//! number line, so that coefficients and finite addends never overflow.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod natural;

#[cfg(test)]
mod proptests;

pub use natural::Natural;
