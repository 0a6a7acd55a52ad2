// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Cipher context and state initializer.

use core::fmt;
use core::marker::PhantomData;

use zeroize::Zeroize;

use arxstream_core::{
    BLOCK_SIZE, KEY_BITS, KEY_SIZE, SIGMA, STATE_WORDS, StreamCipherError, Variant,
    ZeroizationProbe, u32_from_le,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Unkeyed,
    Keyed,
    Ready,
}

/// Stream cipher context for variant `V`.
///
/// Holds the live 16-word state plus the working registers and the single
/// keystream block used while streaming. The context is plain fixed-size
/// storage: it never allocates and never wipes itself (see
/// [`ZeroizingContext`](crate::ZeroizingContext)).
///
/// Lifecycle: [`key_setup`](Self::key_setup), then
/// [`nonce_setup`](Self::nonce_setup), then any number of encrypt/decrypt
/// calls. Nonce setup may be repeated to start a fresh keystream under the same
/// key.
pub struct Cipher<V: Variant> {
    pub(crate) state: [u32; STATE_WORDS],
    pub(crate) working: [u32; STATE_WORDS],
    pub(crate) keystream: [u8; BLOCK_SIZE],
    pub(crate) le_bytes_tmp: [u8; 4],
    pub(crate) phase: Phase,
    pub(crate) exhausted: bool,
    _variant: PhantomData<V>,
}

impl<V: Variant> Default for Cipher<V> {
    fn default() -> Self {
        Self {
            state: [0; STATE_WORDS],
            working: [0; STATE_WORDS],
            keystream: [0; BLOCK_SIZE],
            le_bytes_tmp: [0; 4],
            phase: Phase::Unkeyed,
            exhausted: false,
            _variant: PhantomData,
        }
    }
}

impl<V: Variant> Cipher<V> {
    /// Creates a context ready to stream: key and nonce installed, counter at zero.
    pub fn new(key: &[u8; KEY_SIZE], nonce: &V::Nonce) -> Self {
        let mut cipher = Self::default();
        cipher.key_setup(key);
        cipher.install_nonce(nonce.as_ref());
        cipher
    }

    /// Installs the constant words and the 256-bit key.
    ///
    /// The context must go through [`nonce_setup`](Self::nonce_setup) again
    /// before it can stream.
    pub fn key_setup(&mut self, key: &[u8; KEY_SIZE]) {
        self.load_words(&V::CONSTANT_WORDS, SIGMA);
        self.load_words(&V::KEY_WORDS, key);
        self.phase = Phase::Keyed;
        self.exhausted = false;

        log::debug!("{}: key installed", V::NAME);
    }

    /// Key setup with declared key and nonce widths.
    ///
    /// Only 256-bit keys and the variant's own nonce width are supported; any
    /// other declaration is rejected instead of being ignored.
    pub fn key_setup_bits(
        &mut self,
        key: &[u8],
        key_bits: u32,
        nonce_bits: u32,
    ) -> Result<(), StreamCipherError> {
        if key_bits != KEY_BITS {
            return Err(StreamCipherError::UnsupportedKeyBits(key_bits));
        }

        if nonce_bits != V::nonce_bits() {
            return Err(StreamCipherError::UnsupportedNonceBits {
                expected: V::nonce_bits(),
                actual: nonce_bits,
            });
        }

        let key: &[u8; KEY_SIZE] = key
            .try_into()
            .map_err(|_| StreamCipherError::InvalidKeySize(key.len()))?;
        self.key_setup(key);

        Ok(())
    }

    /// Installs the nonce and resets the block counter to zero.
    pub fn nonce_setup(&mut self, nonce: &V::Nonce) -> Result<(), StreamCipherError> {
        if self.phase == Phase::Unkeyed {
            return Err(StreamCipherError::KeyNotSet);
        }

        self.install_nonce(nonce.as_ref());

        Ok(())
    }

    /// Slice form of [`nonce_setup`](Self::nonce_setup).
    pub fn try_nonce_setup(&mut self, nonce: &[u8]) -> Result<(), StreamCipherError> {
        let typed = <V::Nonce as TryFrom<&[u8]>>::try_from(nonce).map_err(|_| {
            StreamCipherError::InvalidNonceSize {
                expected: V::NONCE_SIZE,
                actual: nonce.len(),
            }
        })?;

        self.nonce_setup(&typed)
    }

    /// Current block counter: the index of the next keystream block.
    pub fn block_counter(&self) -> u64 {
        V::COUNTER_WORDS
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &pos)| acc | ((self.state[pos] as u64) << (32 * i)))
    }

    /// Moves the stream to block `counter`.
    ///
    /// Fails with [`StreamCipherError::CounterOutOfRange`] when `counter` does
    /// not fit the variant's counter words.
    pub fn set_block_counter(&mut self, counter: u64) -> Result<(), StreamCipherError> {
        self.ensure_ready()?;

        if counter > V::max_counter() {
            return Err(StreamCipherError::CounterOutOfRange(counter));
        }

        for (i, &pos) in V::COUNTER_WORDS.iter().enumerate() {
            self.state[pos] = (counter >> (32 * i)) as u32;
        }
        self.exhausted = false;

        log::debug!("{}: block counter set to {}", V::NAME, counter);

        Ok(())
    }

    /// Number of keystream blocks left before the counter would repeat.
    pub fn remaining_blocks(&self) -> u128 {
        if self.exhausted {
            return 0;
        }

        V::max_counter() as u128 + 1 - self.block_counter() as u128
    }

    pub(crate) fn install_nonce(&mut self, nonce: &[u8]) {
        for &pos in V::COUNTER_WORDS {
            self.state[pos] = 0;
        }
        self.load_words(V::NONCE_WORDS, nonce);
        self.phase = Phase::Ready;
        self.exhausted = false;

        log::debug!("{}: nonce installed, block counter reset", V::NAME);
    }

    pub(crate) fn ensure_ready(&self) -> Result<(), StreamCipherError> {
        match self.phase {
            Phase::Unkeyed => Err(StreamCipherError::KeyNotSet),
            Phase::Keyed => Err(StreamCipherError::NonceNotSet),
            Phase::Ready => Ok(()),
        }
    }

    /// All-or-nothing check that `blocks` more blocks fit in the counter space.
    pub(crate) fn ensure_capacity(&self, blocks: u128) -> Result<(), StreamCipherError> {
        let remaining = self.remaining_blocks();

        if blocks > remaining {
            log::warn!(
                "{}: keystream exhausted ({} blocks requested, {} remaining)",
                V::NAME,
                blocks,
                remaining
            );
            return Err(StreamCipherError::KeystreamExhausted {
                requested: blocks,
                remaining,
            });
        }

        Ok(())
    }

    #[inline(always)]
    fn load_words(&mut self, positions: &[usize], bytes: &[u8]) {
        for (&pos, chunk) in positions.iter().zip(bytes.chunks_exact(4)) {
            self.le_bytes_tmp.copy_from_slice(chunk);
            u32_from_le(&mut self.state[pos], &mut self.le_bytes_tmp);
        }
    }

    #[cfg(test)]
    pub(crate) fn state_words(&self) -> &[u32; STATE_WORDS] {
        &self.state
    }
}

impl<V: Variant> Zeroize for Cipher<V> {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.working.zeroize();
        self.keystream.zeroize();
        self.le_bytes_tmp.zeroize();
        self.phase = Phase::Unkeyed;
        self.exhausted = false;
    }
}

impl<V: Variant> ZeroizationProbe for Cipher<V> {
    fn is_zeroized(&self) -> bool {
        self.state.iter().all(|w| *w == 0)
            && self.working.iter().all(|w| *w == 0)
            && self.keystream.iter().all(|b| *b == 0)
            && self.le_bytes_tmp.iter().all(|b| *b == 0)
            && self.phase == Phase::Unkeyed
    }
}

impl<V: Variant> fmt::Debug for Cipher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ [protected] }}", V::NAME)
    }
}
