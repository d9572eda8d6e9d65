//! High-level encrypt/decrypt engine.

use rand_core::CryptoRngCore;

use crate::blocks;
use crate::errors::{Error, Result};
use crate::key::RsaKey;

/// Textbook RSA engine: generates an [`RsaKey`] at construction and
/// encrypts/decrypts messages block by block.
///
/// Messages are split into blocks of [`block_size`](RsaEngine::block_size)
/// bytes and each block is exponentiated independently, in parallel. Key
/// material is read-only after construction, so a single engine may serve
/// concurrent encrypt and decrypt calls.
#[derive(Debug)]
pub struct RsaEngine {
    key: RsaKey,
}

impl RsaEngine {
    /// Generates a fresh key of the given bit size and wraps it in an
    /// engine.
    ///
    /// Fails only on a key-generation internal-consistency fault
    /// ([`Error::NoInverse`]).
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<RsaEngine> {
        Ok(RsaEngine {
            key: RsaKey::new(rng, bit_size)?,
        })
    }

    /// Wraps an existing key.
    pub fn from_key(key: RsaKey) -> RsaEngine {
        RsaEngine { key }
    }

    /// Returns the key backing this engine.
    pub fn key(&self) -> &RsaKey {
        &self.key
    }

    /// Returns the block width in bytes. Ciphertext length is always a
    /// multiple of this.
    pub fn block_size(&self) -> usize {
        self.key.size()
    }

    /// Encrypts a message, treating it as its UTF-8 bytes.
    pub fn encrypt(&self, message: &str) -> Result<Vec<u8>> {
        self.encrypt_bytes(message.as_bytes())
    }

    /// Encrypts raw bytes.
    ///
    /// The output is block-aligned: the final block is zero-padded up to
    /// the block width, so the ciphertext of even an empty message is a
    /// whole number of blocks.
    pub fn encrypt_bytes(&self, message: &[u8]) -> Result<Vec<u8>> {
        blocks::transform(message, self.key.e(), self.key.n(), self.block_size())
    }

    /// Decrypts a ciphertext produced by [`encrypt`](RsaEngine::encrypt)
    /// back into a UTF-8 string.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<String> {
        let plaintext = self.decrypt_bytes(ciphertext)?;
        String::from_utf8(plaintext).map_err(Error::from)
    }

    /// Decrypts raw ciphertext bytes, stripping the trailing zero padding
    /// introduced on encryption.
    ///
    /// Returns [`Error::MalformedCiphertextLength`] when the input is not a
    /// multiple of the block width; a truncated or extended ciphertext is
    /// rejected rather than silently re-framed.
    pub fn decrypt_bytes(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.block_size();
        if ciphertext.len() % block_size != 0 {
            return Err(Error::MalformedCiphertextLength {
                len: ciphertext.len(),
                block_size,
            });
        }

        let mut plaintext =
            blocks::transform(ciphertext, self.key.d(), self.key.n(), block_size)?;
        blocks::strip_trailing_zeros(&mut plaintext);
        Ok(plaintext)
    }
}
