// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Keystream block generator.

use zeroize::Zeroize;

use arxstream_core::{BLOCK_SIZE, DOUBLE_ROUNDS, STATE_WORDS, StreamCipherError, Variant, u32_to_le};

use crate::cipher::Cipher;

impl<V: Variant> Cipher<V> {
    /// Writes the next keystream block into `self.keystream` and advances the counter.
    ///
    /// Callers check readiness and counter capacity first.
    #[inline(always)]
    pub(crate) fn next_block(&mut self) {
        self.working.copy_from_slice(&self.state);

        for _ in 0..DOUBLE_ROUNDS {
            V::double_round(&mut self.working);
        }

        // Feed-forward; u32_to_le clears each working word once serialized.
        for i in 0..STATE_WORDS {
            self.working[i] = self.working[i].wrapping_add(self.state[i]);
            u32_to_le(
                &mut self.working[i],
                (&mut self.keystream[i * 4..i * 4 + 4])
                    .try_into()
                    .expect("infallible: keystream slice is exactly 4 bytes"),
            );
        }

        self.advance_counter();
    }

    /// Adds one to the counter words with carry. A carry out of the top word
    /// means every counter value has been used.
    #[inline(always)]
    fn advance_counter(&mut self) {
        for &pos in V::COUNTER_WORDS {
            self.state[pos] = self.state[pos].wrapping_add(1);
            if self.state[pos] != 0 {
                return;
            }
        }

        self.exhausted = true;
    }

    /// Produces one raw keystream block and advances the counter.
    pub fn generate_block(
        &mut self,
        output: &mut [u8; BLOCK_SIZE],
    ) -> Result<(), StreamCipherError> {
        self.ensure_ready()?;
        self.ensure_capacity(1)?;

        self.next_block();
        output.copy_from_slice(&self.keystream);
        self.keystream.zeroize();

        Ok(())
    }
}
