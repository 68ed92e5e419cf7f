//! Pure arithmetic over fractions.
//!
//! The `*_raw` free functions are the primitives: they fold both operands
//! to improper form, combine them exactly, and never simplify. The
//! operator impls delegate to them and always simplify, matching the
//! default configuration; [`crate::FracContext`] selects behavior
//! explicitly. Compound assignment is derived by assigning the pure
//! result back, so there is only one implementation of each operation.

use crate::error::FracError;
use crate::Fraction;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Exact sum `a + b`, unsimplified.
///
/// Numerators add directly when the denominators already agree,
/// otherwise the operands are cross-multiplied.
pub fn add_raw(a: Fraction, b: Fraction) -> Fraction {
    let a = a.to_improper();
    let b = b.to_improper();
    if a.denom() == b.denom() {
        Fraction::from_parts(a.numer() + b.numer(), a.denom())
    } else {
        Fraction::from_parts(
            a.numer() * b.denom() + b.numer() * a.denom(),
            a.denom() * b.denom(),
        )
    }
}

/// Exact difference `a - b`, unsimplified.
///
/// Not commutative: `sub_raw(a, b)` computes `a - b`, and
/// `sub_raw(a, b) == -sub_raw(b, a)`.
pub fn sub_raw(a: Fraction, b: Fraction) -> Fraction {
    let a = a.to_improper();
    let b = b.to_improper();
    if a.denom() == b.denom() {
        Fraction::from_parts(a.numer() - b.numer(), a.denom())
    } else {
        Fraction::from_parts(
            a.numer() * b.denom() - b.numer() * a.denom(),
            a.denom() * b.denom(),
        )
    }
}

/// Exact product `a * b`, unsimplified.
pub fn mul_raw(a: Fraction, b: Fraction) -> Fraction {
    let a = a.to_improper();
    let b = b.to_improper();
    Fraction::from_parts(a.numer() * b.numer(), a.denom() * b.denom())
}

/// Exact quotient `a / b`, unsimplified.
///
/// Fails with [`FracError::DivisionByZero`] when `b` is zero.
pub fn div_raw(a: Fraction, b: Fraction) -> Result<Fraction, FracError> {
    let a = a.to_improper();
    let b = b.to_improper();
    if b.numer() == 0 {
        return Err(FracError::DivisionByZero);
    }
    Ok(Fraction::from_parts(
        a.numer() * b.denom(),
        a.denom() * b.numer(),
    ))
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        add_raw(self, rhs).simplify()
    }
}

impl Add<i64> for Fraction {
    type Output = Fraction;

    fn add(self, rhs: i64) -> Fraction {
        add_raw(self, Fraction::from_integer(rhs)).simplify()
    }
}

impl Add<Fraction> for i64 {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        rhs + self
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        sub_raw(self, rhs).simplify()
    }
}

impl Sub<i64> for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: i64) -> Fraction {
        sub_raw(self, Fraction::from_integer(rhs)).simplify()
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        mul_raw(self, rhs).simplify()
    }
}

impl Mul<i64> for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: i64) -> Fraction {
        mul_raw(self, Fraction::from_integer(rhs)).simplify()
    }
}

impl Mul<Fraction> for i64 {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        rhs * self
    }
}

impl Div for Fraction {
    type Output = Fraction;

    /// Panics when `rhs` is zero. Fallible callers use
    /// [`div_raw`] or [`crate::FracContext::div`].
    fn div(self, rhs: Fraction) -> Fraction {
        match div_raw(self, rhs) {
            Ok(q) => q.simplify(),
            Err(_) => panic!("attempt to divide by a zero fraction"),
        }
    }
}

impl Div<i64> for Fraction {
    type Output = Fraction;

    /// Panics when `rhs` is zero.
    fn div(self, rhs: i64) -> Fraction {
        self / Fraction::from_integer(rhs)
    }
}

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        let folded = self.to_improper();
        Fraction::from_parts(-folded.numer(), folded.denom())
    }
}

impl AddAssign for Fraction {
    fn add_assign(&mut self, rhs: Fraction) {
        *self = *self + rhs;
    }
}

impl AddAssign<i64> for Fraction {
    fn add_assign(&mut self, rhs: i64) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fraction {
    fn sub_assign(&mut self, rhs: Fraction) {
        *self = *self - rhs;
    }
}

impl SubAssign<i64> for Fraction {
    fn sub_assign(&mut self, rhs: i64) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fraction {
    fn mul_assign(&mut self, rhs: Fraction) {
        *self = *self * rhs;
    }
}

impl MulAssign<i64> for Fraction {
    fn mul_assign(&mut self, rhs: i64) {
        *self = *self * rhs;
    }
}
