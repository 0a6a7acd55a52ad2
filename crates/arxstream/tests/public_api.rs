// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod public_api_tests {
    use arxstream::{
        ChaCha20, ChaChaPolicy, Salsa20, StreamCipherApi, StreamCipherError, ZeroizingContext,
    };

    const KEY: [u8; 32] = [0x2a; 32];

    #[test]
    fn test_lifecycle_through_default() {
        arxstream::init();

        let mut cipher = ChaCha20::default();
        cipher.key_setup(&KEY);
        cipher.nonce_setup(&[7u8; 12]).expect("Failed to nonce_setup(..)");

        let plaintext = b"counter mode, one block and a bit more than that";
        let mut ciphertext = [0u8; 48];
        cipher
            .encrypt_bytes(plaintext, &mut ciphertext)
            .expect("Failed to encrypt_bytes(..)");
        assert_ne!(&ciphertext, plaintext);

        cipher.nonce_setup(&[7u8; 12]).expect("Failed to nonce_setup(..)");
        let mut recovered = [0u8; 48];
        cipher
            .decrypt_bytes(&ciphertext, &mut recovered)
            .expect("Failed to decrypt_bytes(..)");
        assert_eq!(&recovered, plaintext);
    }

    #[test]
    fn test_bits_entry_point() {
        let mut cipher = Salsa20::default();

        assert_eq!(
            cipher.key_setup_bits(&KEY, 256, 96),
            Err(StreamCipherError::UnsupportedNonceBits {
                expected: 64,
                actual: 96
            })
        );
        cipher
            .key_setup_bits(&KEY, 256, 64)
            .expect("Failed to key_setup_bits(..)");
        cipher
            .try_nonce_setup(&[1u8; 8])
            .expect("Failed to try_nonce_setup(..)");

        let mut data = [0u8; 128];
        cipher
            .encrypt_blocks(&[0u8; 128], &mut data, 2)
            .expect("Failed to encrypt_blocks(..)");
        assert_eq!(cipher.block_counter(), 2);
    }

    #[test]
    fn test_guard_and_trait_object() {
        let mut guard = ZeroizingContext::<ChaChaPolicy>::from_default();
        let api: &mut dyn StreamCipherApi = &mut *guard;

        api.api_key_setup(&KEY).expect("Failed to api_key_setup(..)");
        api.api_nonce_setup(&[0u8; 12])
            .expect("Failed to api_nonce_setup(..)");

        let mut data = [0u8; 10];
        api.api_apply_keystream(&mut data)
            .expect("Failed to api_apply_keystream(..)");
        assert_eq!(api.api_block_counter(), 1);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_io_roundtrip() {
        use std::io::{Cursor, Read, Write};

        use arxstream::io::{Salsa20Reader, Salsa20Writer};

        let message: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let nonce = [3u8; 8];

        let mut writer = Salsa20Writer::new(Vec::new(), &KEY, &nonce);
        for piece in message.chunks(999) {
            writer.write_all(piece).expect("Failed to write_all(..)");
        }
        let ciphertext = writer.finish().expect("Failed to finish()");
        assert_eq!(ciphertext.len(), message.len());

        let mut reader = Salsa20Reader::new(Cursor::new(ciphertext), &KEY, &nonce);
        let mut decrypted = Vec::new();
        reader
            .read_to_end(&mut decrypted)
            .expect("Failed to read_to_end(..)");

        assert_eq!(decrypted, message);
    }
}
