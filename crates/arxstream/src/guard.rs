// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! RAII guard that wipes a cipher context on drop.

use alloc::boxed::Box;
use core::fmt;
use core::mem;
use core::ops::{Deref, DerefMut};
use core::sync::atomic::{Ordering, compiler_fence};

use zeroize::Zeroize;

use arxstream_core::{
    AssertZeroizeOnDrop, KEY_SIZE, Variant, ZeroizationProbe, ZeroizeOnDropSentinel,
};

use crate::cipher::Cipher;

/// Owns a boxed [`Cipher`] and zeroizes it when dropped.
///
/// # Design
///
/// - Wraps `Box<Cipher<V>>` so moving the guard never copies key material
/// - [`from_mut`](Self::from_mut) swaps the source out and zeroizes it
/// - Implements `Deref` and `DerefMut` to the cipher
/// - Contains a [`ZeroizeOnDropSentinel`] to verify zeroization happened
pub struct ZeroizingContext<V: Variant> {
    inner: Box<Cipher<V>>,
    __sentinel: ZeroizeOnDropSentinel,
}

impl<V: Variant> fmt::Debug for ZeroizingContext<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ZeroizingContext]")
    }
}

impl<V: Variant> ZeroizingContext<V> {
    /// Keyed, nonce-installed context on the heap.
    pub fn new(key: &[u8; KEY_SIZE], nonce: &V::Nonce) -> Self {
        let mut guard = Self::from_default();
        guard.key_setup(key);
        guard.install_nonce(nonce.as_ref());
        guard
    }

    /// Takes ownership of `cipher`'s state, leaving the source zeroized.
    pub fn from_mut(cipher: &mut Cipher<V>) -> Self {
        let mut boxed = Box::new(Cipher::default());
        mem::swap(&mut *boxed, cipher);
        cipher.zeroize();

        Self {
            inner: boxed,
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }

    /// Unkeyed context.
    #[inline(always)]
    pub fn from_default() -> Self {
        Self {
            inner: Box::new(Cipher::default()),
            __sentinel: ZeroizeOnDropSentinel::default(),
        }
    }
}

impl<V: Variant> Deref for ZeroizingContext<V> {
    type Target = Cipher<V>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<V: Variant> DerefMut for ZeroizingContext<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<V: Variant> Zeroize for ZeroizingContext<V> {
    fn zeroize(&mut self) {
        self.inner.zeroize();
        compiler_fence(Ordering::SeqCst);

        self.__sentinel.zeroize();
        compiler_fence(Ordering::SeqCst);
    }
}

impl<V: Variant> ZeroizationProbe for ZeroizingContext<V> {
    fn is_zeroized(&self) -> bool {
        self.inner.is_zeroized()
    }
}

impl<V: Variant> AssertZeroizeOnDrop for ZeroizingContext<V> {
    fn clone_sentinel(&self) -> ZeroizeOnDropSentinel {
        self.__sentinel.clone()
    }
}

impl<V: Variant> Drop for ZeroizingContext<V> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Runs `f` against a fresh keyed context and wipes the context afterwards.
///
/// The wipe also runs when `f` panics. The context derefs to [`Cipher`].
pub fn with_zeroizing_context<V, F, R>(key: &[u8; KEY_SIZE], nonce: &V::Nonce, f: F) -> R
where
    V: Variant,
    F: FnOnce(&mut ZeroizingContext<V>) -> R,
{
    let mut guard = ZeroizingContext::<V>::new(key, nonce);
    f(&mut guard)
}
