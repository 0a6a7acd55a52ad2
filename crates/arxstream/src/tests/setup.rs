// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::format;

use arxstream_core::{StreamCipherError, ZeroizationProbe};
use zeroize::Zeroize;

use crate::{ChaCha20, Salsa20};

use super::support::sequential_key;

#[test]
fn test_default_is_unkeyed_and_zeroized() {
    let cipher = ChaCha20::default();

    assert!(cipher.is_zeroized());
    assert_eq!(cipher.block_counter(), 0);
}

#[test]
fn test_nonce_setup_before_key_setup() {
    let mut cipher = ChaCha20::default();

    assert_eq!(
        cipher.nonce_setup(&[0u8; 12]),
        Err(StreamCipherError::KeyNotSet)
    );
    assert_eq!(
        cipher.try_nonce_setup(&[0u8; 12]),
        Err(StreamCipherError::KeyNotSet)
    );
}

#[test]
fn test_streaming_before_nonce_setup() {
    let mut unkeyed = Salsa20::default();
    let mut data = [0u8; 16];
    assert_eq!(
        unkeyed.apply_keystream(&mut data),
        Err(StreamCipherError::KeyNotSet)
    );

    let mut keyed = Salsa20::default();
    keyed.key_setup(&sequential_key());
    let mut output = [0u8; 16];
    assert_eq!(
        keyed.encrypt_bytes(&data, &mut output),
        Err(StreamCipherError::NonceNotSet)
    );
    assert_eq!(
        keyed.set_block_counter(1),
        Err(StreamCipherError::NonceNotSet)
    );
}

#[test]
fn test_key_setup_requires_new_nonce() {
    let mut cipher = ChaCha20::new(&sequential_key(), &[1u8; 12]);
    cipher.key_setup(&[9u8; 32]);

    let mut block = [0u8; 64];
    assert_eq!(
        cipher.generate_block(&mut block),
        Err(StreamCipherError::NonceNotSet)
    );
}

#[test]
fn test_try_nonce_setup_rejects_wrong_length() {
    let mut chacha = ChaCha20::default();
    chacha.key_setup(&sequential_key());
    assert_eq!(
        chacha.try_nonce_setup(&[0u8; 8]),
        Err(StreamCipherError::InvalidNonceSize {
            expected: 12,
            actual: 8
        })
    );

    let mut salsa = Salsa20::default();
    salsa.key_setup(&sequential_key());
    assert_eq!(
        salsa.try_nonce_setup(&[0u8; 12]),
        Err(StreamCipherError::InvalidNonceSize {
            expected: 8,
            actual: 12
        })
    );
    assert!(salsa.try_nonce_setup(&[0u8; 8]).is_ok());
}

#[test]
fn test_key_setup_bits() {
    let key = sequential_key();
    let mut cipher = ChaCha20::default();

    assert_eq!(
        cipher.key_setup_bits(&key, 128, 96),
        Err(StreamCipherError::UnsupportedKeyBits(128))
    );
    assert_eq!(
        cipher.key_setup_bits(&key, 256, 64),
        Err(StreamCipherError::UnsupportedNonceBits {
            expected: 96,
            actual: 64
        })
    );
    assert_eq!(
        cipher.key_setup_bits(&key[..16], 256, 96),
        Err(StreamCipherError::InvalidKeySize(16))
    );
    assert!(cipher.is_zeroized());

    cipher
        .key_setup_bits(&key, 256, 96)
        .expect("Failed to key_setup_bits(..)");
    cipher.nonce_setup(&[0u8; 12]).expect("Failed to nonce_setup(..)");

    let mut salsa = Salsa20::default();
    assert!(salsa.key_setup_bits(&key, 256, 64).is_ok());
}

#[test]
fn test_key_setup_bits_matches_typed_setup() {
    let key = sequential_key();
    let mut typed = Salsa20::default();
    typed.key_setup(&key);

    let mut sized = Salsa20::default();
    sized
        .key_setup_bits(&key, 256, 64)
        .expect("Failed to key_setup_bits(..)");

    assert_eq!(typed.state_words(), sized.state_words());
}

#[test]
fn test_nonce_setup_resets_counter() {
    let mut cipher = ChaCha20::new(&sequential_key(), &[3u8; 12]);
    let mut first = [0u8; 64];
    cipher.generate_block(&mut first).expect("Failed to generate_block(..)");
    cipher.set_block_counter(77).expect("Failed to set_block_counter(..)");

    cipher.nonce_setup(&[3u8; 12]).expect("Failed to nonce_setup(..)");
    assert_eq!(cipher.block_counter(), 0);

    let mut again = [0u8; 64];
    cipher.generate_block(&mut again).expect("Failed to generate_block(..)");
    assert_eq!(first, again);
}

#[test]
fn test_nonce_setup_clears_exhaustion() {
    let mut cipher = ChaCha20::new(&sequential_key(), &[0u8; 12]);
    cipher
        .set_block_counter(u32::MAX as u64)
        .expect("Failed to set_block_counter(..)");
    let mut block = [0u8; 64];
    cipher.generate_block(&mut block).expect("Failed to generate_block(..)");
    assert_eq!(cipher.remaining_blocks(), 0);

    cipher.nonce_setup(&[1u8; 12]).expect("Failed to nonce_setup(..)");
    assert_eq!(cipher.remaining_blocks(), 1 << 32);
}

#[test]
fn test_remaining_blocks() {
    let mut chacha = ChaCha20::new(&sequential_key(), &[0u8; 12]);
    assert_eq!(chacha.remaining_blocks(), 1 << 32);
    chacha.set_block_counter(10).expect("Failed to set_block_counter(..)");
    assert_eq!(chacha.remaining_blocks(), (1 << 32) - 10);

    let salsa = Salsa20::new(&sequential_key(), &[0u8; 8]);
    assert_eq!(salsa.remaining_blocks(), 1 << 64);
}

#[test]
fn test_zeroize_resets_context() {
    let mut cipher = Salsa20::new(&sequential_key(), &[5u8; 8]);
    assert!(!cipher.is_zeroized());

    cipher.zeroize();
    assert!(cipher.is_zeroized());

    let mut data = [0u8; 8];
    assert_eq!(
        cipher.apply_keystream(&mut data),
        Err(StreamCipherError::KeyNotSet)
    );
}

#[test]
fn test_debug_is_redacted() {
    let chacha = ChaCha20::new(&sequential_key(), &[0u8; 12]);
    let salsa = Salsa20::default();

    assert_eq!(format!("{:?}", chacha), "ChaCha20 { [protected] }");
    assert_eq!(format!("{:?}", salsa), "Salsa20 { [protected] }");
}

#[test]
fn test_init_is_a_no_op() {
    crate::init();
    crate::init();
}
