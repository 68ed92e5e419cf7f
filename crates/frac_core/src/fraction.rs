//! The rational value type.
//!
//! A [`Fraction`] stores a signed numerator and a nonzero signed
//! denominator, plus an optional mixed-number whole part. Values are
//! immutable; every operation returns a new fraction. Compound-assignment
//! operators in [`crate::ops`] are derived from the pure forms.

use crate::error::FracError;
use crate::gcd::{gcd, gcd_u128};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An exact rational number, optionally carrying a whole-number part.
///
/// Invariant: the denominator is never zero (construction fails with
/// [`FracError::DivisionByZero`] otherwise).
///
/// Equality, ordering and hashing are numeric, not structural:
/// `7/2 == 3 + 1/2 == 14/4`. Comparisons split each value into its floor
/// quotient and remainder before cross-multiplying in `i128`, so they
/// cannot overflow for any pair of `i64`-backed fractions, mixed values
/// at the `i64` limits included.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fraction {
    whole: i64,
    numer: i64,
    denom: i64,
}

impl Fraction {
    /// An improper fraction `numer/denom`, unsimplified.
    pub fn new(numer: i64, denom: i64) -> Result<Self, FracError> {
        if denom == 0 {
            return Err(FracError::DivisionByZero);
        }
        Ok(Self {
            whole: 0,
            numer,
            denom,
        })
    }

    /// A mixed number `whole + numer/denom`, unsimplified.
    pub fn new_mixed(whole: i64, numer: i64, denom: i64) -> Result<Self, FracError> {
        if denom == 0 {
            return Err(FracError::DivisionByZero);
        }
        Ok(Self {
            whole,
            numer,
            denom,
        })
    }

    /// The integer `n` as `n/1`.
    pub fn from_integer(n: i64) -> Self {
        Self {
            whole: 0,
            numer: n,
            denom: 1,
        }
    }

    /// Internal constructor for arithmetic results whose denominator is
    /// known to be nonzero.
    pub(crate) fn from_parts(numer: i64, denom: i64) -> Self {
        debug_assert!(denom != 0, "fraction denominator must be nonzero");
        Self {
            whole: 0,
            numer,
            denom,
        }
    }

    pub fn numer(&self) -> i64 {
        self.numer
    }

    pub fn denom(&self) -> i64 {
        self.denom
    }

    pub fn whole(&self) -> i64 {
        self.whole
    }

    /// Fold the whole part into the numerator. Idempotent.
    pub fn to_improper(self) -> Self {
        Self {
            whole: 0,
            numer: self.whole * self.denom + self.numer,
            denom: self.denom,
        }
    }

    /// Split into a whole part plus a proper remainder. Idempotent.
    ///
    /// Uses the Euclidean floor convention: the denominator sign is moved
    /// onto the numerator first, then the whole part is the floor of the
    /// quotient and the remainder satisfies `0 <= numer < denom`. So
    /// `-7/2` becomes `-4 + 1/2`, and
    /// `to_mixed(x).to_improper() == to_improper(x)` for every sign
    /// combination.
    pub fn to_mixed(self) -> Self {
        let folded = self.to_improper();
        let (mut n, mut d) = (folded.numer, folded.denom);
        if d < 0 {
            n = -n;
            d = -d;
        }
        Self {
            whole: n.div_euclid(d),
            numer: n.rem_euclid(d),
            denom: d,
        }
    }

    /// Reduce to lowest terms: improper form, coprime numerator and
    /// denominator, sign on the numerator. Zero collapses to `0/1`.
    pub fn simplify(self) -> Self {
        let folded = self.to_improper();
        let (mut n, mut d) = (folded.numer, folded.denom);
        if n == 0 {
            return Self::default();
        }
        let g = gcd(n, d);
        n /= g;
        d /= g;
        if d < 0 {
            n = -n;
            d = -d;
        }
        Self {
            whole: 0,
            numer: n,
            denom: d,
        }
    }

    /// True when the represented value is exactly zero.
    pub fn is_zero(&self) -> bool {
        let (n, _) = self.improper_parts();
        n == 0
    }

    /// Decimal value of the fraction.
    pub fn to_f64(&self) -> f64 {
        let (n, d) = self.improper_parts();
        n as f64 / d as f64
    }

    /// Convert a decimal into this fraction: `round(value * 10^precision)`
    /// over `10^precision`, unsimplified.
    ///
    /// Only valid on a fraction that is currently zero; fails with
    /// [`FracError::InvalidOperation`] otherwise so an existing value is
    /// never silently discarded. Also fails when `value` is non-finite or
    /// the scaled numerator does not fit in `i64`.
    pub fn from_decimal(self, value: f64, precision: u32) -> Result<Self, FracError> {
        if !self.is_zero() {
            return Err(FracError::InvalidOperation(
                "from_decimal requires a zero fraction".into(),
            ));
        }
        if !value.is_finite() {
            return Err(FracError::InvalidOperation(format!(
                "cannot convert non-finite value {value} to a fraction"
            )));
        }
        if precision > 18 {
            return Err(FracError::InvalidOperation(format!(
                "precision {precision} exceeds the i64 range"
            )));
        }
        let denom = 10_i64.pow(precision);
        let scaled = (value * denom as f64).round();
        // `i64::MAX as f64` rounds up to 2^63, which is already out of
        // range, so the upper bound must be exclusive.
        if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
            return Err(FracError::InvalidOperation(format!(
                "{value} does not fit in a fraction at precision {precision}"
            )));
        }
        Ok(Self {
            whole: 0,
            numer: scaled as i64,
            denom,
        })
    }

    /// Improper numerator/denominator widened to `i128`, denominator
    /// normalized positive. Basis for comparison and hashing.
    fn improper_parts(&self) -> (i128, i128) {
        let mut n = self.whole as i128 * self.denom as i128 + self.numer as i128;
        let mut d = self.denom as i128;
        if d < 0 {
            n = -n;
            d = -d;
        }
        (n, d)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self {
            whole: 0,
            numer: 0,
            denom: 1,
        }
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Fraction::from_integer(n)
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // Improper numerators can reach ~2^126 for mixed values, so a
        // direct cross product of the parts can exceed i128. Compare the
        // floor quotients first; on a tie the remainders satisfy
        // 0 <= r < d <= 2^63, and their cross products always fit.
        let (an, ad) = self.improper_parts();
        let (bn, bd) = other.improper_parts();
        let aq = an.div_euclid(ad);
        let bq = bn.div_euclid(bd);
        aq.cmp(&bq)
            .then_with(|| (an.rem_euclid(ad) * bd).cmp(&(bn.rem_euclid(bd) * ad)))
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the reduced improper form so Hash agrees with Eq.
        let (n, d) = self.improper_parts();
        if n == 0 {
            0_i128.hash(state);
            1_i128.hash(state);
            return;
        }
        let g = gcd_u128(n.unsigned_abs(), d.unsigned_abs()) as i128;
        (n / g).hash(state);
        (d / g).hash(state);
    }
}

/// Improper rendering: `"n"` when the folded denominator is 1, `"n/d"`
/// otherwise. Mixed-form rendering lives in the `frac_format` crate.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let folded = self.to_improper();
        if folded.denom == 1 {
            write!(f, "{}", folded.numer)
        } else {
            write!(f, "{}/{}", folded.numer, folded.denom)
        }
    }
}

impl num_traits::Zero for Fraction {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        Fraction::is_zero(self)
    }
}

impl num_traits::One for Fraction {
    fn one() -> Self {
        Fraction::from_integer(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_zero_denominator() {
        assert!(matches!(Fraction::new(3, 0), Err(FracError::DivisionByZero)));
        assert!(matches!(
            Fraction::new_mixed(1, 3, 0),
            Err(FracError::DivisionByZero)
        ));
    }

    #[test]
    fn construction_is_unsimplified() {
        let f = Fraction::new(2, 4).unwrap();
        assert_eq!(f.numer(), 2);
        assert_eq!(f.denom(), 4);
        assert_eq!(f.whole(), 0);
    }

    #[test]
    fn to_mixed_extracts_whole_part() {
        let m = Fraction::new(7, 2).unwrap().to_mixed();
        assert_eq!(m.whole(), 3);
        assert_eq!(m.numer(), 1);
        assert_eq!(m.denom(), 2);
    }

    #[test]
    fn to_mixed_uses_floor_for_negatives() {
        // -7/2 = -4 + 1/2 under the floor convention.
        let m = Fraction::new(-7, 2).unwrap().to_mixed();
        assert_eq!((m.whole(), m.numer(), m.denom()), (-4, 1, 2));

        // The denominator sign moves onto the numerator first.
        let m = Fraction::new(7, -2).unwrap().to_mixed();
        assert_eq!((m.whole(), m.numer(), m.denom()), (-4, 1, 2));

        let m = Fraction::new(-7, -2).unwrap().to_mixed();
        assert_eq!((m.whole(), m.numer(), m.denom()), (3, 1, 2));
    }

    #[test]
    fn mixed_improper_roundtrip_is_exact() {
        for (n, d) in [(7, 2), (-7, 2), (7, -2), (-7, -2), (0, 3), (4, 1)] {
            let f = Fraction::new(n, d).unwrap();
            assert_eq!(f.to_mixed().to_improper(), f.to_improper());
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let f = Fraction::new(-7, 2).unwrap();
        let m = f.to_mixed();
        assert_eq!(
            (m.whole(), m.numer(), m.denom()),
            {
                let mm = m.to_mixed();
                (mm.whole(), mm.numer(), mm.denom())
            }
        );
        let i = f.to_improper();
        let ii = i.to_improper();
        assert_eq!((i.numer(), i.denom()), (ii.numer(), ii.denom()));
    }

    #[test]
    fn simplify_reduces_to_lowest_terms() {
        let s = Fraction::new(2, 4).unwrap().simplify();
        assert_eq!((s.numer(), s.denom()), (1, 2));
    }

    #[test]
    fn simplify_folds_mixed_form_first() {
        let s = Fraction::new_mixed(1, 2, 4).unwrap().simplify();
        assert_eq!((s.whole(), s.numer(), s.denom()), (0, 3, 2));
    }

    #[test]
    fn simplify_moves_sign_to_numerator() {
        let s = Fraction::new(3, -6).unwrap().simplify();
        assert_eq!((s.numer(), s.denom()), (-1, 2));
    }

    #[test]
    fn simplify_collapses_zero_to_canonical_form() {
        let s = Fraction::new(0, 7).unwrap().simplify();
        assert_eq!((s.numer(), s.denom()), (0, 1));
    }

    #[test]
    fn equality_is_numeric() {
        let improper = Fraction::new(7, 2).unwrap();
        let mixed = Fraction::new_mixed(3, 1, 2).unwrap();
        let scaled = Fraction::new(14, 4).unwrap();
        assert_eq!(improper, mixed);
        assert_eq!(improper, scaled);
        assert_ne!(improper, Fraction::new(7, 3).unwrap());
    }

    #[test]
    fn ordering_handles_negative_denominators() {
        let a = Fraction::new(1, -2).unwrap(); // -1/2
        let b = Fraction::new(1, 3).unwrap();
        assert!(a < b);
        assert!(Fraction::new(-1, 2).unwrap() == a);
    }

    #[test]
    fn comparison_handles_extreme_mixed_values() {
        // Improper numerators here are near 2^126; a naive cross product
        // of the parts would overflow i128.
        let huge = Fraction::new_mixed(i64::MAX, 1, i64::MAX).unwrap();
        let tiny = Fraction::new(1, i64::MAX).unwrap();
        assert_ne!(huge, tiny);
        assert!(huge > tiny);
        assert_eq!(huge, Fraction::new_mixed(i64::MAX, 1, i64::MAX).unwrap());

        let negative = Fraction::new_mixed(i64::MIN + 1, 1, i64::MAX).unwrap();
        assert!(negative < tiny);
        assert!(negative < huge);
    }

    #[test]
    fn hash_agrees_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Fraction::new(1, 2).unwrap());
        set.insert(Fraction::new(2, 4).unwrap());
        set.insert(Fraction::new_mixed(0, 1, 2).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn from_decimal_half_at_precision_one() {
        let f = Fraction::default().from_decimal(0.5, 1).unwrap();
        assert_eq!((f.numer(), f.denom()), (5, 10));
        let s = f.simplify();
        assert_eq!((s.numer(), s.denom()), (1, 2));
    }

    #[test]
    fn from_decimal_rejects_nonzero_receiver() {
        let f = Fraction::new(1, 2).unwrap();
        assert!(matches!(
            f.from_decimal(0.25, 2),
            Err(FracError::InvalidOperation(_))
        ));
    }

    #[test]
    fn from_decimal_rejects_bad_inputs() {
        let zero = Fraction::default();
        assert!(matches!(
            zero.from_decimal(f64::NAN, 2),
            Err(FracError::InvalidOperation(_))
        ));
        assert!(matches!(
            zero.from_decimal(f64::INFINITY, 2),
            Err(FracError::InvalidOperation(_))
        ));
        assert!(matches!(
            zero.from_decimal(0.5, 19),
            Err(FracError::InvalidOperation(_))
        ));
        assert!(matches!(
            zero.from_decimal(1.0e200, 3),
            Err(FracError::InvalidOperation(_))
        ));
    }

    #[test]
    fn from_decimal_rejects_values_at_the_i64_boundary() {
        // 9.223372036854775808e18 is exactly 2^63 as an f64; it must be
        // rejected, not saturated into i64::MAX by the cast.
        let zero = Fraction::default();
        assert!(matches!(
            zero.from_decimal(9.223372036854775808e18, 0),
            Err(FracError::InvalidOperation(_))
        ));
        let ok = zero.from_decimal(9.0e18, 0).unwrap();
        assert_eq!((ok.numer(), ok.denom()), (9_000_000_000_000_000_000, 1));
    }

    #[test]
    fn from_decimal_negative_value() {
        let f = Fraction::default().from_decimal(-0.25, 2).unwrap();
        assert_eq!((f.numer(), f.denom()), (-25, 100));
        assert_eq!(f.simplify(), Fraction::new(-1, 4).unwrap());
    }

    #[test]
    fn to_f64_matches_value() {
        assert_eq!(Fraction::new(7, 2).unwrap().to_f64(), 3.5);
        assert_eq!(Fraction::new_mixed(3, 1, 2).unwrap().to_f64(), 3.5);
        assert_eq!(Fraction::new(1, -2).unwrap().to_f64(), -0.5);
    }

    #[test]
    fn display_renders_improper_form() {
        assert_eq!(Fraction::new(7, 2).unwrap().to_string(), "7/2");
        assert_eq!(Fraction::new(3, 1).unwrap().to_string(), "3");
        // Mixed values fold before rendering.
        assert_eq!(Fraction::new_mixed(3, 1, 2).unwrap().to_string(), "7/2");
    }

    #[test]
    fn serde_roundtrip() {
        let f = Fraction::new_mixed(3, 1, 2).unwrap();
        let json = serde_json::to_string(&f).unwrap();
        let back: Fraction = serde_json::from_str(&json).unwrap();
        assert_eq!((back.whole(), back.numer(), back.denom()), (3, 1, 2));
    }

    #[test]
    fn zero_and_one_traits() {
        use num_traits::{One, Zero};
        assert!(Fraction::zero().is_zero());
        assert!(Fraction::new_mixed(1, -2, 2).unwrap().is_zero());
        assert_eq!(Fraction::one(), Fraction::new(2, 2).unwrap());
    }
}
