//! RSA key generation.

use log::debug;
use num_bigint::{BigUint, RandPrime};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::errors::{Error, Result};
use crate::key::RsaKey;
use crate::math::ModInverse;

/// Public exponent used for every generated key.
pub(crate) const EXP: u64 = 65537;

/// Smallest supported key size in bits.
pub(crate) const MIN_KEY_SIZE: usize = 384;

/// Largest supported key size in bits. Must not be below [`MIN_KEY_SIZE`].
pub(crate) const MAX_KEY_SIZE: usize = 4096;

/// Key sizes are rounded up to the next multiple of this many bits.
const KEY_SIZE_STEP: usize = 16;

/// Rounds `bit_size` up to the key-size granularity and clamps the result
/// to the supported range, so the derived block width is always at least
/// one byte and the modulus large enough for block processing.
pub(crate) fn normalize_key_size(bit_size: usize) -> usize {
    let rem = bit_size % KEY_SIZE_STEP;
    let rounded = if rem == 0 {
        bit_size
    } else {
        bit_size + (KEY_SIZE_STEP - rem)
    };

    rounded.clamp(MIN_KEY_SIZE, MAX_KEY_SIZE)
}

/// Generates an RSA key of the given (normalized) bit size.
///
/// Prime pairs are sampled from `rng` until the public exponent is coprime
/// with the totient `(P - 1) * (Q - 1)`; the per-trial failure probability
/// is low but non-zero, so the loop is unbounded. The private exponent is
/// the modular inverse of the public exponent modulo the totient. An absent
/// inverse after the coprimality check passed is reported as
/// [`Error::NoInverse`].
pub(crate) fn generate_key<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<RsaKey> {
    let bit_size = normalize_key_size(bit_size);
    let exp = BigUint::from(EXP);

    let n_final: BigUint;
    let d_final: BigUint;

    'next: loop {
        // `gen_prime` sets the top two bits of each prime, so the product
        // of the pair never comes up a bit short of `bit_size`.
        let mut p = rng.gen_prime(bit_size / 2);
        let mut q = rng.gen_prime(bit_size - p.bits());

        if p == q {
            continue 'next;
        }

        let mut totient = (&p - BigUint::one()) * (&q - BigUint::one());
        if !exp.gcd(&totient).is_one() {
            debug!("public exponent shares a factor with the totient, resampling primes");
            p.zeroize();
            q.zeroize();
            totient.zeroize();
            continue 'next;
        }

        let n = &p * &q;
        if n.bits() != bit_size {
            p.zeroize();
            q.zeroize();
            totient.zeroize();
            continue 'next;
        }

        let d = exp
            .clone()
            .mod_inverse(&totient)
            .ok_or(Error::NoInverse)?;

        p.zeroize();
        q.zeroize();
        totient.zeroize();

        n_final = n;
        d_final = d;
        break;
    }

    Ok(RsaKey::from_components(n_final, exp, d_final))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn test_normalize_key_size() {
        assert_eq!(normalize_key_size(0), 384);
        assert_eq!(normalize_key_size(100), 384);
        assert_eq!(normalize_key_size(384), 384);
        assert_eq!(normalize_key_size(385), 400);
        assert_eq!(normalize_key_size(500), 512);
        assert_eq!(normalize_key_size(512), 512);
        assert_eq!(normalize_key_size(513), 528);
        assert_eq!(normalize_key_size(2048), 2048);
        assert_eq!(normalize_key_size(1 << 20), 4096);
    }

    macro_rules! key_generation {
        ($name:ident, $size:expr) => {
            #[test]
            fn $name() {
                let mut rng = ChaCha8Rng::from_seed([42; 32]);
                for _ in 0..3 {
                    let key = generate_key(&mut rng, $size).unwrap();
                    assert_eq!(key.n().bits(), $size);
                    assert_eq!(key.size(), $size / 8);
                }
            }
        };
    }

    key_generation!(key_generation_384, 384);
    key_generation!(key_generation_512, 512);
    key_generation!(key_generation_1024, 1024);

    #[test]
    fn test_exponent_pair_is_consistent() {
        let mut rng = ChaCha8Rng::from_seed([7; 32]);
        let key = generate_key(&mut rng, 512).unwrap();

        // m^(e*d) ≡ m (mod n) for a value well below the modulus.
        let m = BigUint::from_bytes_be(b"arbitrary test block");
        let c = m.modpow(key.e(), key.n());
        assert_eq!(c.modpow(key.d(), key.n()), m);
    }

    #[test]
    fn test_requested_size_is_normalized() {
        let mut rng = ChaCha8Rng::from_seed([1; 32]);
        let key = generate_key(&mut rng, 100).unwrap();
        assert_eq!(key.n().bits(), 384);
    }
}
