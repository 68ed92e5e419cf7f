//! Explicit arithmetic configuration.
//!
//! The original design kept a process-wide auto-simplify flag; here the
//! configuration is a plain value passed to the operations, so nothing is
//! read from hidden global state.

use crate::error::FracError;
use crate::{ops, Fraction};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Configuration for fraction arithmetic.
///
/// Operations called through a context apply `auto_simplify` to their
/// results; the raw primitives in [`crate::ops`] never simplify. Scalar
/// operands are accepted anywhere a fraction is via `impl Into<Fraction>`,
/// an integer `n` meaning `n/1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FracContext {
    /// Simplify arithmetic results automatically.
    pub auto_simplify: bool,
    /// Decimal digits retained by [`FracContext::from_decimal`].
    pub precision: u32,
}

impl Default for FracContext {
    fn default() -> Self {
        Self {
            auto_simplify: true,
            precision: 5,
        }
    }
}

impl FracContext {
    pub fn new(auto_simplify: bool, precision: u32) -> Self {
        Self {
            auto_simplify,
            precision,
        }
    }

    fn finish(&self, f: Fraction) -> Fraction {
        if self.auto_simplify {
            f.simplify()
        } else {
            f
        }
    }

    pub fn add(&self, a: Fraction, b: impl Into<Fraction>) -> Fraction {
        self.finish(ops::add_raw(a, b.into()))
    }

    /// Computes `a - b`; not commutative.
    pub fn sub(&self, a: Fraction, b: impl Into<Fraction>) -> Fraction {
        self.finish(ops::sub_raw(a, b.into()))
    }

    pub fn mul(&self, a: Fraction, b: impl Into<Fraction>) -> Fraction {
        self.finish(ops::mul_raw(a, b.into()))
    }

    /// Fails with [`FracError::DivisionByZero`] when `b` is zero.
    pub fn div(&self, a: Fraction, b: impl Into<Fraction>) -> Result<Fraction, FracError> {
        let b = b.into();
        trace!(?a, ?b, "dividing fractions");
        Ok(self.finish(ops::div_raw(a, b)?))
    }

    /// Convert a decimal using the context's precision.
    pub fn from_decimal(&self, value: f64) -> Result<Fraction, FracError> {
        self.from_decimal_with(value, self.precision)
    }

    /// Convert a decimal with an explicit per-call precision.
    pub fn from_decimal_with(&self, value: f64, precision: u32) -> Result<Fraction, FracError> {
        debug!(value, precision, "converting decimal to fraction");
        Ok(self.finish(Fraction::default().from_decimal(value, precision)?))
    }
}
