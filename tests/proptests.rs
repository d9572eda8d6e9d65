//! Property-based tests.

use proptest::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use rsa_blocks::RsaEngine;

prop_compose! {
    // WARNING: do *NOT* copy and paste this code. It's insecure and optimized for test speed.
    fn engine()(seed in any::<[u8; 32]>()) -> RsaEngine {
        let mut rng = ChaCha8Rng::from_seed(seed);
        RsaEngine::new(&mut rng, 384).unwrap()
    }
}

prop_compose! {
    // Bytes below 0x80 keep every block value under the modulus, and the
    // trailing zeros are dropped so the padding convention cannot interfere
    // with the round-trip comparison.
    fn message()(bytes in prop::collection::vec(0u8..0x80, 0..200)) -> Vec<u8> {
        let mut bytes = bytes;
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn bytes_roundtrip(engine in engine(), msg in message()) {
        let ciphertext = engine.encrypt_bytes(&msg).unwrap();
        prop_assert_eq!(ciphertext.len() % engine.block_size(), 0);
        prop_assert_eq!(engine.decrypt_bytes(&ciphertext).unwrap(), msg);
    }

    #[test]
    fn text_roundtrip(engine in engine(), msg in "[ -~]{0,80}") {
        let ciphertext = engine.encrypt(&msg).unwrap();
        prop_assert_eq!(engine.decrypt(&ciphertext).unwrap(), msg);
    }
}
