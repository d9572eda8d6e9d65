//! Modular-arithmetic helpers, notably the extended-Euclidean modular
//! inverse used to derive the private exponent.

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Generic trait to implement modular inverse
pub trait ModInverse<R: Sized>: Sized {
    /// Function to calculate the [modular multiplicative
    /// inverse](https://en.wikipedia.org/wiki/Modular_multiplicative_inverse) of an integer *a* modulo *m*.
    ///
    /// Returns the modular inverse of `self`.
    /// If none exists it returns `None`.
    fn mod_inverse(self, m: R) -> Option<Self>;
}

impl<'a> ModInverse<&'a BigUint> for BigUint {
    fn mod_inverse(self, m: &'a BigUint) -> Option<BigUint> {
        mod_inverse(
            &BigInt::from_biguint(Plus, self),
            &BigInt::from_biguint(Plus, m.clone()),
        )
        .and_then(|n| n.to_biguint())
    }
}

impl<'a> ModInverse<&'a BigInt> for BigInt {
    fn mod_inverse(self, m: &'a BigInt) -> Option<BigInt> {
        mod_inverse(&self, m)
    }
}

/// Calculates the modular multiplicative inverse of `a` modulo `m`.
///
/// Returns the unique `x` in `[0, m)` with `(a * x) % m == 1`, or `None`
/// when `a` and `m` are not coprime.
pub fn mod_inverse(a: &BigInt, m: &BigInt) -> Option<BigInt> {
    let (gcd, x, _) = extended_gcd(a, m);
    if !gcd.is_one() {
        return None;
    }

    // x may be negative, normalize into [0, m).
    Some(((x % m) + m) % m)
}

/// Extended Euclidean algorithm: returns `(gcd, x, y)` satisfying
/// `a * x + b * y == gcd`.
///
/// Iterative formulation; the Bézout coefficients are accumulated in the
/// loop rather than unwound from a recursion, so the call depth stays
/// constant for moduli of any size. `BigInt` division truncates toward
/// zero, which the final normalization in [`mod_inverse`] relies on.
pub(crate) fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut r_prev, mut r) = (a.clone(), b.clone());
    let (mut x_prev, mut x) = (BigInt::one(), BigInt::zero());
    let (mut y_prev, mut y) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &r_prev / &r;

        let next = &r_prev - &q * &r;
        r_prev = std::mem::replace(&mut r, next);

        let next = &x_prev - &q * &x;
        x_prev = std::mem::replace(&mut x, next);

        let next = &y_prev - &q * &y;
        y_prev = std::mem::replace(&mut y, next);
    }

    (r_prev, x_prev, y_prev)
}
