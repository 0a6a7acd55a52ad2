// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-wise stream encryptor.
//!
//! Every call consumes whole keystream blocks: a trailing partial block still
//! advances the counter by one, and the unused keystream bytes are discarded.
//! Splitting a message across calls therefore reproduces the one-shot output
//! only at multiples of [`BLOCK_SIZE`].

use zeroize::Zeroize;

use arxstream_core::{BLOCK_SIZE, StreamCipherError, Variant};

use crate::cipher::Cipher;

impl<V: Variant> Cipher<V> {
    /// Writes `input ^ keystream` to `output`.
    ///
    /// Both buffers must have the same length. An empty input is a no-op that
    /// leaves the counter untouched. The counter advances by
    /// `ceil(len / 64)`; if that would run past the end of the counter space
    /// nothing is written and [`StreamCipherError::KeystreamExhausted`] is
    /// returned.
    pub fn encrypt_bytes(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), StreamCipherError> {
        if input.len() != output.len() {
            return Err(StreamCipherError::LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }

        if input.is_empty() {
            return Ok(());
        }

        self.ensure_ready()?;
        self.ensure_capacity(blocks_for(input.len()))?;

        for (src, dst) in input.chunks(BLOCK_SIZE).zip(output.chunks_mut(BLOCK_SIZE)) {
            self.next_block();

            for ((out, byte), ks_byte) in dst.iter_mut().zip(src).zip(self.keystream.iter()) {
                *out = byte ^ ks_byte;
            }
        }

        self.keystream.zeroize();

        Ok(())
    }

    /// Identical to [`encrypt_bytes`](Self::encrypt_bytes).
    #[inline]
    pub fn decrypt_bytes(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), StreamCipherError> {
        self.encrypt_bytes(input, output)
    }

    /// In-place form of [`encrypt_bytes`](Self::encrypt_bytes).
    pub fn apply_keystream(&mut self, data: &mut [u8]) -> Result<(), StreamCipherError> {
        if data.is_empty() {
            return Ok(());
        }

        self.ensure_ready()?;
        self.ensure_capacity(blocks_for(data.len()))?;

        for chunk in data.chunks_mut(BLOCK_SIZE) {
            self.next_block();

            for (byte, ks_byte) in chunk.iter_mut().zip(self.keystream.iter()) {
                *byte ^= ks_byte;
            }
        }

        self.keystream.zeroize();

        Ok(())
    }

    /// Encrypts the first `blocks * 64` bytes of `input` into `output`.
    ///
    /// The byte length is computed with checked arithmetic; a count that does
    /// not fit in `usize` fails with [`StreamCipherError::BlockCountOverflow`].
    pub fn encrypt_blocks(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        blocks: u64,
    ) -> Result<(), StreamCipherError> {
        let len = blocks_to_bytes(blocks)?;

        for actual in [input.len(), output.len()] {
            if actual < len {
                return Err(StreamCipherError::BufferTooShort {
                    required: len,
                    actual,
                });
            }
        }

        self.encrypt_bytes(&input[..len], &mut output[..len])
    }

    /// Identical to [`encrypt_blocks`](Self::encrypt_blocks).
    #[inline]
    pub fn decrypt_blocks(
        &mut self,
        input: &[u8],
        output: &mut [u8],
        blocks: u64,
    ) -> Result<(), StreamCipherError> {
        self.encrypt_blocks(input, output, blocks)
    }
}

#[inline(always)]
fn blocks_for(len: usize) -> u128 {
    len.div_ceil(BLOCK_SIZE) as u128
}

fn blocks_to_bytes(blocks: u64) -> Result<usize, StreamCipherError> {
    blocks
        .checked_mul(BLOCK_SIZE as u64)
        .and_then(|len| usize::try_from(len).ok())
        .ok_or(StreamCipherError::BlockCountOverflow(blocks))
}
