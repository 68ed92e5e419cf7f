//! Greatest common divisor and least common multiple helpers.
//!
//! One canonical iterative Euclidean-modulo implementation, shared by
//! [`Fraction::simplify`](crate::Fraction::simplify) and the hashing path.

/// GCD of two signed integers, computed on absolute values.
///
/// `gcd(0, 0) == 0` and `gcd(x, 0) == |x|`. The result saturates at
/// `i64::MAX` when the true value is `2^63` (only possible when every
/// nonzero argument is `i64::MIN`), since `|i64::MIN|` has no `i64`
/// representation.
pub fn gcd(a: i64, b: i64) -> i64 {
    let g = gcd_u128(a.unsigned_abs() as u128, b.unsigned_abs() as u128);
    g.min(i64::MAX as u128) as i64
}

/// LCM of two signed integers; always non-negative, `lcm(x, 0) == 0`.
///
/// Saturates at `i64::MAX` when the true value does not fit in `i64`
/// (e.g. any nonzero multiple involving `|i64::MIN|`).
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let am = a.unsigned_abs() as u128;
    let bm = b.unsigned_abs() as u128;
    let l = am / gcd_u128(am, bm) * bm;
    l.min(i64::MAX as u128) as i64
}

pub(crate) fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
