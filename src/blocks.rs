//! Fixed-width block transform shared by encryption and decryption.

use num_bigint::BigUint;
use rayon::prelude::*;

use crate::errors::{Error, Result};

/// Applies `value^exp mod n` to every `block_size`-wide chunk of `data` and
/// reassembles the results in input order.
///
/// Chunks are interpreted as unsigned big-endian integers and carry no data
/// dependency on each other, so they are processed in parallel; `collect`
/// keeps the results index-ordered, making the output independent of the
/// scheduling order. Every output block is serialized to exactly
/// `block_size` bytes, left-padded with zero bytes. The final input chunk
/// may be shorter than `block_size`; the output is always block-aligned,
/// `ceil(data.len() / block_size) * block_size` bytes long.
///
/// A chunk whose numeric value is not below `n` is reduced modulo `n` by
/// the exponentiation itself and is not special-cased.
pub(crate) fn transform(
    data: &[u8],
    exp: &BigUint,
    n: &BigUint,
    block_size: usize,
) -> Result<Vec<u8>> {
    let blocks = data
        .par_chunks(block_size)
        .map(|chunk| {
            let value = BigUint::from_bytes_be(chunk);
            let value = value.modpow(exp, n);
            left_pad(&value.to_bytes_be(), block_size)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(blocks.concat())
}

/// Returns a new vector of the given length, with 0s left padded.
#[inline]
pub(crate) fn left_pad(input: &[u8], padded_len: usize) -> Result<Vec<u8>> {
    if input.len() > padded_len {
        return Err(Error::InvalidPadLen);
    }

    let mut out = vec![0u8; padded_len];
    out[padded_len - input.len()..].copy_from_slice(input);
    Ok(out)
}

/// Removes trailing zero bytes in place.
///
/// The numeric encoding zero-pads the final plaintext block, so the decode
/// path strips trailing zeros after full reassembly. A message whose
/// plaintext genuinely ends in zero bytes loses them here; this is a known
/// limitation of the block framing, interior zeros are unaffected.
pub(crate) fn strip_trailing_zeros(bytes: &mut Vec<u8>) {
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
}
