// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # arxstream
//!
//! ChaCha20 and Salsa20 counter-mode stream ciphers built on one generic
//! pipeline.
//!
//! A [`Cipher`] context holds the 16-word state. Key setup installs the
//! constant and key words, nonce setup installs the nonce and resets the block
//! counter, and every encrypt/decrypt call XORs keystream blocks into the data
//! while advancing the counter. The two families differ only in their
//! [`Variant`] policy ([`ChaChaPolicy`], [`SalsaPolicy`]).
//!
//! These ciphers are unauthenticated: pair them with a MAC if integrity
//! matters. A (key, nonce) pair must never encrypt two different messages.
//!
//! ## Quick Start
//!
//! ```rust
//! use arxstream::ChaCha20;
//!
//! let key = [0x42u8; 32];
//! let nonce = [0x24u8; 12];
//! let plaintext = b"attack at dawn";
//!
//! let mut ciphertext = [0u8; 14];
//! let mut cipher = ChaCha20::new(&key, &nonce);
//! cipher.encrypt_bytes(plaintext, &mut ciphertext).unwrap();
//!
//! let mut recovered = [0u8; 14];
//! let mut cipher = ChaCha20::new(&key, &nonce);
//! cipher.decrypt_bytes(&ciphertext, &mut recovered).unwrap();
//!
//! assert_eq!(&recovered, plaintext);
//! ```
//!
//! ## Zeroization
//!
//! A [`Cipher`] never wipes itself. Wrap it in a [`ZeroizingContext`] (or use
//! [`with_zeroizing_context`]) to have state and scratch buffers overwritten on
//! every exit path, unwinding included.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod api;
mod block;
mod cipher;
mod guard;
mod stream;
mod variants;

#[cfg(feature = "std")]
pub mod io;

pub use arxstream_core::{
    AssertZeroizeOnDrop, BLOCK_SIZE, KEY_BITS, KEY_SIZE, StreamCipherApi, StreamCipherError,
    Variant, ZeroizationProbe,
};
pub use cipher::Cipher;
pub use guard::{ZeroizingContext, with_zeroizing_context};
pub use variants::{ChaChaPolicy, SalsaPolicy, chacha20, salsa20};

/// ChaCha20 with a 32-bit block counter and a 96-bit nonce.
pub type ChaCha20 = Cipher<ChaChaPolicy>;

/// Salsa20/20 with a 64-bit block counter and a 64-bit nonce.
pub type Salsa20 = Cipher<SalsaPolicy>;

/// Global setup hook.
///
/// Nothing needs global initialization; calling this is always safe and has no
/// effect.
#[inline]
pub fn init() {}
