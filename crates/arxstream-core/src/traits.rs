// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait definitions shared by the cipher family.

use crate::consts::STATE_WORDS;
use crate::error::StreamCipherError;
use crate::sentinel::ZeroizeOnDropSentinel;

/// Policy describing one member of the ARX cipher family.
///
/// The generic pipeline in `arxstream` is the same for every variant; a policy
/// only says where each class of word lives in the 4x4 state, how wide the
/// block counter is, and how one double round permutes the state.
///
/// Word position arrays are indexes into the 16-word state. Multi-word fields
/// are listed least significant word first.
pub trait Variant: Sized + Send + Sync + 'static {
    /// Display name, used in `Debug` output and log records.
    const NAME: &'static str;

    /// Nonce width in bytes.
    const NONCE_SIZE: usize;

    /// State words holding [`SIGMA`](crate::SIGMA).
    const CONSTANT_WORDS: [usize; 4];

    /// State words holding the 256-bit key.
    const KEY_WORDS: [usize; 8];

    /// State words holding the block counter (one or two words).
    const COUNTER_WORDS: &'static [usize];

    /// State words holding the nonce.
    const NONCE_WORDS: &'static [usize];

    /// Fixed-size nonce accepted by typed nonce setup.
    type Nonce: AsRef<[u8]> + Copy + for<'a> TryFrom<&'a [u8]>;

    /// One column round followed by one diagonal (or row) round, in place.
    fn double_round(state: &mut [u32; STATE_WORDS]);

    /// Nonce width in bits.
    fn nonce_bits() -> u32 {
        (Self::NONCE_SIZE * 8) as u32
    }

    /// Largest value the block counter can hold.
    fn max_counter() -> u64 {
        match Self::COUNTER_WORDS.len() {
            1 => u32::MAX as u64,
            _ => u64::MAX,
        }
    }
}

/// Object-safe byte-slice API over a cipher context.
///
/// Lets generic code and tests drive every variant through
/// `Box<dyn StreamCipherApi>`. Callers with a concrete type should keep using
/// its inherent methods, which take typed keys and nonces.
pub trait StreamCipherApi {
    fn api_key_setup(&mut self, key: &[u8]) -> Result<(), StreamCipherError>;

    fn api_nonce_setup(&mut self, nonce: &[u8]) -> Result<(), StreamCipherError>;

    fn api_encrypt_bytes(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), StreamCipherError>;

    fn api_decrypt_bytes(
        &mut self,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<(), StreamCipherError>;

    fn api_apply_keystream(&mut self, data: &mut [u8]) -> Result<(), StreamCipherError>;

    fn api_block_counter(&self) -> u64;

    fn api_nonce_size(&self) -> usize;

    fn api_name(&self) -> &'static str;
}

/// Trait for verifying that a value has been zeroized.
pub trait ZeroizationProbe {
    /// Returns `true` if every sensitive byte of the value is zero.
    fn is_zeroized(&self) -> bool;
}

/// Trait for types that verify zeroization happened before drop.
///
/// Types implementing this trait contain a [`ZeroizeOnDropSentinel`].
pub trait AssertZeroizeOnDrop {
    /// Clones the internal [`ZeroizeOnDropSentinel`] for verification.
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel;

    /// Drops `self` and checks that its sentinel recorded a wipe.
    ///
    /// The sentinel is reset first, so an earlier explicit `zeroize` does not
    /// count.
    ///
    /// # Panics
    ///
    /// Panics if the value was not zeroized during drop.
    fn assert_zeroize_on_drop(self)
    where
        Self: Sized,
    {
        let mut sentinel = self.clone_sentinel();
        sentinel.reset();

        drop(self);

        assert!(sentinel.is_zeroized(), "value was not zeroized on drop");
    }
}
