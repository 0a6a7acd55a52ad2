// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Little-endian word conversions that wipe their source.
//!
//! Words are assembled with shifts instead of `from_le_bytes` temporaries, and
//! every source byte (or word) is cleared once consumed.

/// Converts 4 bytes to a little-endian `u32`, zeroizing the source bytes.
#[inline(always)]
pub fn u32_from_le(dst: &mut u32, bytes: &mut [u8; 4]) {
    *dst = 0;
    for (i, byte) in bytes.iter_mut().enumerate() {
        *dst |= (*byte as u32) << (8 * i);
        *byte = 0;
    }
}

/// Converts a `u32` to little-endian bytes, zeroizing the source.
#[inline(always)]
pub fn u32_to_le(src: &mut u32, bytes: &mut [u8; 4]) {
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (*src >> (8 * i)) as u8;
    }
    *src = 0;
}
