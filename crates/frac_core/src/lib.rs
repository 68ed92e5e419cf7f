//! Exact rational arithmetic with mixed-number support.
//!
//! A [`Fraction`] is an immutable numerator/denominator pair, optionally
//! split into a whole part plus a proper remainder. Arithmetic comes in
//! two layers: raw primitives in [`ops`] that never simplify, and
//! configured entry points on [`FracContext`] that simplify according to
//! an explicit flag. String rendering beyond the improper `Display` form
//! lives in the `frac_format` crate.

pub mod context;
pub mod error;
pub mod fraction;
pub mod gcd;
pub mod ops;

pub use context::FracContext;
pub use error::FracError;
pub use fraction::Fraction;
