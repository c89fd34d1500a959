use num_bigint::{BigInt, BigUint, ToBigInt};
use num_traits::{One, Zero};

/// Greatest common divisor by the plain Euclidean remainder loop.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm. Taken directly from wikipedia.
///
/// Returns `(g, x, y)` with `a*x + b*y == g == gcd(a, b)`.
#[allow(clippy::many_single_char_names)]
pub fn egcd(a: &BigUint, b: &BigUint) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.to_bigint().unwrap(), b.to_bigint().unwrap());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let temp = r.clone();
        r = old_r - &q * r;
        old_r = temp;

        let temp = s.clone();
        s = old_s - &q * s;
        old_s = temp;

        let temp = t.clone();
        t = old_t - q * t;
        old_t = temp;
    }
    (old_r, old_s, old_t)
}

/// Multiplicative inverse of `a` modulo `n`. Returns None if the inverse
/// doesn't exist.
///
/// The coefficient comes back exactly as the extended Euclid produced it,
/// so it may be negative. Callers wanting a canonical residue reduce it
/// themselves.
pub fn mod_inverse(a: &BigUint, n: &BigUint) -> Option<BigInt> {
    let (g, x, _) = egcd(a, n);
    if g == One::one() {
        Some(x)
    } else {
        None
    }
}
