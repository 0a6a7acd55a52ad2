// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! ChaCha20 policy (RFC 8439 state layout).
//!
//! ```text
//! cccccccc  cccccccc  cccccccc  cccccccc
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! bbbbbbbb  nnnnnnnn  nnnnnnnn  nnnnnnnn
//! ```

use arxstream_core::{STATE_WORDS, Variant};

/// Nonce size in bytes
pub const NONCE_SIZE: usize = 12;

/// ChaCha20 nonce type
pub type Nonce = [u8; NONCE_SIZE];

const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]];
const DIAGONALS: [[usize; 4]; 4] = [[0, 5, 10, 15], [1, 6, 11, 12], [2, 7, 8, 13], [3, 4, 9, 14]];

/// ChaCha quarter round over four words.
#[inline(always)]
pub fn quarter_round(mut a: u32, mut b: u32, mut c: u32, mut d: u32) -> (u32, u32, u32, u32) {
    a = a.wrapping_add(b);
    d = (d ^ a).rotate_left(16);

    c = c.wrapping_add(d);
    b = (b ^ c).rotate_left(12);

    a = a.wrapping_add(b);
    d = (d ^ a).rotate_left(8);

    c = c.wrapping_add(d);
    b = (b ^ c).rotate_left(7);

    (a, b, c, d)
}

#[inline(always)]
fn apply(state: &mut [u32; STATE_WORDS], [a, b, c, d]: [usize; 4]) {
    (state[a], state[b], state[c], state[d]) =
        quarter_round(state[a], state[b], state[c], state[d]);
}

/// ChaCha20 variant policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChaChaPolicy;

impl Variant for ChaChaPolicy {
    const NAME: &'static str = "ChaCha20";
    const NONCE_SIZE: usize = NONCE_SIZE;
    const CONSTANT_WORDS: [usize; 4] = [0, 1, 2, 3];
    const KEY_WORDS: [usize; 8] = [4, 5, 6, 7, 8, 9, 10, 11];
    const COUNTER_WORDS: &'static [usize] = &[12];
    const NONCE_WORDS: &'static [usize] = &[13, 14, 15];

    type Nonce = Nonce;

    #[inline(always)]
    fn double_round(state: &mut [u32; STATE_WORDS]) {
        for qr in COLUMNS {
            apply(state, qr);
        }
        for qr in DIAGONALS {
            apply(state, qr);
        }
    }
}
