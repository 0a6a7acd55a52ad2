// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Stream cipher error types.

use crate::consts::{BLOCK_SIZE, KEY_BITS, KEY_SIZE};

/// Errors that can occur while setting up or using a cipher context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamCipherError {
    #[error("invalid key size: expected {KEY_SIZE} bytes, got {0}")]
    InvalidKeySize(usize),

    #[error("invalid nonce size: expected {expected} bytes, got {actual}")]
    InvalidNonceSize { expected: usize, actual: usize },

    #[error("unsupported key width: {0} bits (only {KEY_BITS}-bit keys are supported)")]
    UnsupportedKeyBits(u32),

    #[error("unsupported nonce width: expected {expected} bits, got {actual}")]
    UnsupportedNonceBits { expected: u32, actual: u32 },

    #[error("key setup has not been performed")]
    KeyNotSet,

    #[error("nonce setup has not been performed")]
    NonceNotSet,

    #[error("buffer length mismatch: input is {input} bytes, output is {output} bytes")]
    LengthMismatch { input: usize, output: usize },

    #[error("buffer too short: {required} bytes required, got {actual}")]
    BufferTooShort { required: usize, actual: usize },

    #[error("block count {0} overflows the addressable byte length")]
    BlockCountOverflow(u64),

    #[error("keystream exhausted: {requested} blocks requested, {remaining} remaining")]
    KeystreamExhausted { requested: u128, remaining: u128 },

    #[error("block counter {0} does not fit the counter width")]
    CounterOutOfRange(u64),

    #[error("chunk size {0} is not a non-zero multiple of {BLOCK_SIZE} bytes")]
    InvalidChunkSize(usize),
}

#[cfg(feature = "std")]
impl From<StreamCipherError> for std::io::Error {
    fn from(err: StreamCipherError) -> Self {
        let kind = match err {
            StreamCipherError::KeyNotSet
            | StreamCipherError::NonceNotSet
            | StreamCipherError::KeystreamExhausted { .. } => std::io::ErrorKind::Other,
            _ => std::io::ErrorKind::InvalidInput,
        };

        std::io::Error::new(kind, err)
    }
}
