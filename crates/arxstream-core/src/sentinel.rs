// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Drop-time zeroization witness.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicBool, Ordering};

use zeroize::Zeroize;

/// Records whether its owner ran its zeroization routine.
///
/// Clones share state, so a test can keep a clone, drop the owner and then
/// check the clone. Dropping a sentinel does NOT mark it zeroized: only an
/// explicit [`Zeroize::zeroize`] from the owner does.
#[derive(Clone, Debug, Default)]
pub struct ZeroizeOnDropSentinel(Arc<AtomicBool>);

impl ZeroizeOnDropSentinel {
    /// Returns `true` once the owner has zeroized itself.
    pub fn is_zeroized(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Returns the sentinel (and all clones) to the pristine state.
    pub fn reset(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Zeroize for ZeroizeOnDropSentinel {
    fn zeroize(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

impl PartialEq for ZeroizeOnDropSentinel {
    fn eq(&self, other: &Self) -> bool {
        self.is_zeroized() == other.is_zeroized()
    }
}

impl Eq for ZeroizeOnDropSentinel {}
