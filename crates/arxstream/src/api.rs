// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use arxstream_core::{KEY_SIZE, StreamCipherApi, StreamCipherError, Variant};

use crate::cipher::Cipher;

impl<V: Variant> StreamCipherApi for Cipher<V> {
    fn api_key_setup(&mut self, key: &[u8]) -> Result<(), StreamCipherError> {
        let key: &[u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| StreamCipherError::InvalidKeySize(key.len()))?;
        self.key_setup(key);

        Ok(())
    }

    fn api_nonce_setup(&mut self, nonce: &[u8]) -> Result<(), StreamCipherError> {
        self.try_nonce_setup(nonce)
    }

    fn api_encrypt_bytes(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), StreamCipherError> {
        self.encrypt_bytes(input, output)
    }

    fn api_decrypt_bytes(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), StreamCipherError> {
        self.decrypt_bytes(input, output)
    }

    fn api_apply_keystream(&mut self, data: &mut [u8]) -> Result<(), StreamCipherError> {
        self.apply_keystream(data)
    }

    fn api_block_counter(&self) -> u64 {
        self.block_counter()
    }

    fn api_nonce_size(&self) -> usize {
        V::NONCE_SIZE
    }

    fn api_name(&self) -> &'static str {
        V::NAME
    }
}
