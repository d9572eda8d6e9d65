//! Error types.

/// Alias for [`core::result::Result`] with the `rsa-blocks` [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The public exponent has no modular inverse modulo the totient even
    /// though the coprimality check passed. Key generation resolves a
    /// non-coprime totient by resampling primes, so this variant marks an
    /// internal-consistency fault, not a normal failure path.
    #[error("no modular inverse for the public exponent")]
    NoInverse,

    /// Ciphertext handed to decryption whose length is not a multiple of the
    /// block width.
    #[error("ciphertext length {len} is not a multiple of the block size {block_size}")]
    MalformedCiphertextLength {
        /// Length of the rejected ciphertext in bytes.
        len: usize,
        /// Block width of the key in bytes.
        block_size: usize,
    },

    /// A block value occupies more bytes than the fixed block width.
    #[error("invalid pad length")]
    InvalidPadLen,

    /// The decrypted message is not valid UTF-8.
    #[error("decrypted message is not valid UTF-8")]
    TextDecoding(#[from] std::string::FromUtf8Error),
}
