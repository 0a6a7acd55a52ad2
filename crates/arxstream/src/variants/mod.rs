// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

pub mod chacha20;
pub mod salsa20;

pub use chacha20::ChaChaPolicy;
pub use salsa20::SalsaPolicy;
