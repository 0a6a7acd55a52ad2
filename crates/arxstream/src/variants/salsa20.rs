// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20/20 policy.
//!
//! Constants sit on the diagonal, the key is split around the nonce and the
//! 64-bit counter:
//!
//! ```text
//! cccccccc  kkkkkkkk  kkkkkkkk  kkkkkkkk
//! kkkkkkkk  cccccccc  nnnnnnnn  nnnnnnnn
//! bbbbbbbb  bbbbbbbb  cccccccc  kkkkkkkk
//! kkkkkkkk  kkkkkkkk  kkkkkkkk  cccccccc
//! ```

use arxstream_core::{STATE_WORDS, Variant};

/// Nonce size in bytes
pub const NONCE_SIZE: usize = 8;

/// Salsa20 nonce type
pub type Nonce = [u8; NONCE_SIZE];

const COLUMNS: [[usize; 4]; 4] = [[0, 4, 8, 12], [5, 9, 13, 1], [10, 14, 2, 6], [15, 3, 7, 11]];
const ROWS: [[usize; 4]; 4] = [[0, 1, 2, 3], [5, 6, 7, 4], [10, 11, 8, 9], [15, 12, 13, 14]];

/// Salsa20 quarter round over four words.
#[inline(always)]
pub fn quarter_round(mut a: u32, mut b: u32, mut c: u32, mut d: u32) -> (u32, u32, u32, u32) {
    b ^= a.wrapping_add(d).rotate_left(7);
    c ^= b.wrapping_add(a).rotate_left(9);
    d ^= c.wrapping_add(b).rotate_left(13);
    a ^= d.wrapping_add(c).rotate_left(18);

    (a, b, c, d)
}

#[inline(always)]
fn apply(state: &mut [u32; STATE_WORDS], [a, b, c, d]: [usize; 4]) {
    (state[a], state[b], state[c], state[d]) =
        quarter_round(state[a], state[b], state[c], state[d]);
}

/// Salsa20 variant policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SalsaPolicy;

impl Variant for SalsaPolicy {
    const NAME: &'static str = "Salsa20";
    const NONCE_SIZE: usize = NONCE_SIZE;
    const CONSTANT_WORDS: [usize; 4] = [0, 5, 10, 15];
    const KEY_WORDS: [usize; 8] = [1, 2, 3, 4, 11, 12, 13, 14];
    const COUNTER_WORDS: &'static [usize] = &[8, 9];
    const NONCE_WORDS: &'static [usize] = &[6, 7];

    type Nonce = Nonce;

    /// Column round then row round.
    #[inline(always)]
    fn double_round(state: &mut [u32; STATE_WORDS]) {
        for qr in COLUMNS {
            apply(state, qr);
        }
        for qr in ROWS {
            apply(state, qr);
        }
    }
}
