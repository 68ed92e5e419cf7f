//! String rendering for fractions.
//!
//! `frac_core` keeps `Display` minimal (improper form); this crate adds
//! mixed-form rendering and borrowing display adapters, so formatting
//! policy stays out of the value type.

use frac_core::Fraction;
use std::fmt;

/// Renders the fraction in improper form: `"n"` when the folded
/// denominator is 1, `"n/d"` otherwise.
pub struct ImproperDisplay<'a> {
    pub fraction: &'a Fraction,
}

impl fmt::Display for ImproperDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fraction)
    }
}

/// Renders the fraction in mixed form.
///
/// The value is normalized with [`Fraction::to_mixed`] first, so the
/// remainder is proper and non-negative. Rules:
/// - `"w"` when the fractional remainder is zero;
/// - `"n/d"` (improper style) when the whole part is zero;
/// - `"w, n/d"` otherwise, e.g. `7/2` renders as `"3, 1/2"`.
pub struct MixedDisplay<'a> {
    pub fraction: &'a Fraction,
}

impl fmt::Display for MixedDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.fraction.to_mixed();
        if m.numer() == 0 {
            write!(f, "{}", m.whole())
        } else if m.whole() == 0 {
            write!(f, "{}/{}", m.numer(), m.denom())
        } else {
            write!(f, "{}, {}/{}", m.whole(), m.numer(), m.denom())
        }
    }
}

/// String-rendering extension for [`Fraction`].
pub trait FormatFraction {
    fn to_improper_string(&self) -> String;
    fn to_mixed_string(&self) -> String;
}

impl FormatFraction for Fraction {
    fn to_improper_string(&self) -> String {
        ImproperDisplay { fraction: self }.to_string()
    }

    fn to_mixed_string(&self) -> String {
        MixedDisplay { fraction: self }.to_string()
    }
}
