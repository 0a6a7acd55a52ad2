// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # arxstream-core
//!
//! Shared building blocks for the ARX counter-mode stream ciphers in `arxstream`:
//!
//! - [`Variant`]: the policy trait a cipher family implements (word layout,
//!   counter width, nonce type, double round)
//! - [`StreamCipherApi`]: object-safe byte-slice API over any variant
//! - [`StreamCipherError`]: the single error type of the family
//! - Zeroizing little-endian word conversions and drop-verification helpers

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod le;
mod sentinel;
mod traits;

pub use consts::{BLOCK_SIZE, DOUBLE_ROUNDS, KEY_BITS, KEY_SIZE, SIGMA, STATE_WORDS};
pub use error::StreamCipherError;
pub use le::{u32_from_le, u32_to_le};
pub use sentinel::ZeroizeOnDropSentinel;
pub use traits::{AssertZeroizeOnDrop, StreamCipherApi, Variant, ZeroizationProbe};
