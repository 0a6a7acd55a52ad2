// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Constants shared by every cipher variant.

/// Key size in bytes
pub const KEY_SIZE: usize = 32;

/// Key size in bits
pub const KEY_BITS: u32 = 256;

/// Keystream block size in bytes
pub const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the cipher state
pub const STATE_WORDS: usize = 16;

/// Double rounds per block (20 rounds)
pub const DOUBLE_ROUNDS: usize = 10;

/// Signature for 256-bit keys, parsed little-endian into the constant words.
pub const SIGMA: &[u8; 16] = b"expand 32-byte k";
