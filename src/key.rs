//! RSA key type.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::algorithms::generate_key;
use crate::errors::Result;

/// An RSA key: modulus `N = P * Q`, public exponent `E` and private
/// exponent `D`.
///
/// The key is generated once and immutable afterwards. The prime factors
/// and the totient are generation artifacts and are not retained; the
/// private exponent is wiped when the key is dropped.
#[derive(Clone, Debug)]
pub struct RsaKey {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
    /// Private exponent
    d: BigUint,
}

impl RsaKey {
    /// Generates a new key of the given bit size.
    ///
    /// The requested size is rounded up to a multiple of 16 bits and
    /// clamped to the supported `[384, 4096]` range before generation.
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<RsaKey> {
        generate_key(rng, bit_size)
    }

    pub(crate) fn from_components(n: BigUint, e: BigUint, d: BigUint) -> RsaKey {
        RsaKey { n, e, d }
    }

    /// Returns the modulus of the key.
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Returns the public exponent of the key.
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Returns the private exponent of the key.
    pub(crate) fn d(&self) -> &BigUint {
        &self.d
    }

    /// Returns the modulus size in bytes. Plaintext and ciphertext blocks
    /// for this key have the same size.
    pub fn size(&self) -> usize {
        (self.n.bits() + 7) / 8
    }
}

impl Zeroize for RsaKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for RsaKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}
