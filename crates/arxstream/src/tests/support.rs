// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

/// Decodes a lowercase hex string. Panics on malformed input.
pub(crate) fn hex(s: &str) -> Vec<u8> {
    assert!(s.len() % 2 == 0, "odd hex length");

    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("valid hex digit"))
        .collect()
}

pub(crate) fn hex_array<const N: usize>(s: &str) -> [u8; N] {
    hex(s).try_into().expect("hex length matches array")
}

/// Key 00 01 02 .. 1f.
pub(crate) fn sequential_key() -> [u8; 32] {
    core::array::from_fn(|i| i as u8)
}

/// Deterministic non-trivial payload.
pub(crate) fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}
