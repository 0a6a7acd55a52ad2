// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `std::io` adapters.
//!
//! Both adapters only hand whole keystream blocks to the cipher, except for
//! the last piece of a message. Their output is therefore the same for any
//! split of writes or reads, and matches one `apply_keystream` over the whole
//! message.

use std::io::{self, Read, Write};

use zeroize::{Zeroize, Zeroizing};

use arxstream_core::{BLOCK_SIZE, KEY_SIZE, StreamCipherError, Variant};

use crate::guard::ZeroizingContext;
use crate::variants::{ChaChaPolicy, SalsaPolicy};

/// Default adapter chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 1 << 15;

pub type ChaCha20Writer<W> = EncryptingWriter<W, ChaChaPolicy>;
pub type ChaCha20Reader<R> = DecryptingReader<R, ChaChaPolicy>;
pub type Salsa20Writer<W> = EncryptingWriter<W, SalsaPolicy>;
pub type Salsa20Reader<R> = DecryptingReader<R, SalsaPolicy>;

fn validate_chunk_size(chunk_size: usize) -> Result<(), StreamCipherError> {
    if chunk_size == 0 || chunk_size % BLOCK_SIZE != 0 {
        return Err(StreamCipherError::InvalidChunkSize(chunk_size));
    }

    Ok(())
}

/// Encrypts everything written to it and forwards the ciphertext to `W`.
///
/// Plaintext is buffered until a chunk fills. [`flush`](Write::flush) pushes
/// out every whole block buffered so far; the trailing partial block is only
/// encrypted by [`finish`](Self::finish). Dropping the writer without calling
/// `finish` discards (and wipes) any buffered data.
///
/// A failed inner write loses nothing: ciphertext that did not reach `W` stays
/// buffered and is sent, without being encrypted again, by the next `write`,
/// `flush` or `finish`. A `write` that returns an error has consumed no bytes.
pub struct EncryptingWriter<W: Write, V: Variant> {
    inner: W,
    cipher: ZeroizingContext<V>,
    // `pending[..encrypted]` is ciphertext not yet accepted by `inner`; the
    // rest is plaintext starting on a block boundary of the stream.
    pending: Zeroizing<Vec<u8>>,
    encrypted: usize,
    chunk_size: usize,
}

impl<W: Write, V: Variant> EncryptingWriter<W, V> {
    pub fn new(inner: W, key: &[u8; KEY_SIZE], nonce: &V::Nonce) -> Self {
        Self::from_context(inner, ZeroizingContext::new(key, nonce), DEFAULT_CHUNK_SIZE)
    }

    /// # Errors
    ///
    /// [`StreamCipherError::InvalidChunkSize`] unless `chunk_size` is a
    /// non-zero multiple of [`BLOCK_SIZE`].
    pub fn with_chunk_size(
        inner: W,
        key: &[u8; KEY_SIZE],
        nonce: &V::Nonce,
        chunk_size: usize,
    ) -> Result<Self, StreamCipherError> {
        validate_chunk_size(chunk_size)?;

        Ok(Self::from_context(
            inner,
            ZeroizingContext::new(key, nonce),
            chunk_size,
        ))
    }

    fn from_context(inner: W, cipher: ZeroizingContext<V>, chunk_size: usize) -> Self {
        Self {
            inner,
            cipher,
            pending: Zeroizing::new(Vec::with_capacity(chunk_size)),
            encrypted: 0,
            chunk_size,
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Number of bytes held back from the inner writer, plaintext or ciphertext.
    pub fn buffered(&self) -> usize {
        self.pending.len()
    }

    /// Encrypts the buffered tail, flushes and returns the inner writer.
    ///
    /// On error the writer is consumed and whatever it still buffered is wiped.
    pub fn finish(mut self) -> io::Result<W> {
        let len = self.pending.len();
        self.emit(len)?;
        self.inner.flush()?;

        let Self { inner, .. } = self;

        Ok(inner)
    }

    /// Buffered length that ends on a keystream block boundary.
    fn whole_blocks(&self) -> usize {
        let plaintext = self.pending.len() - self.encrypted;

        self.encrypted + plaintext - plaintext % BLOCK_SIZE
    }

    /// Encrypts the first `len` buffered bytes (once) and writes them out.
    fn emit(&mut self, mut len: usize) -> io::Result<()> {
        if self.encrypted < len {
            let start = self.encrypted;
            self.cipher.apply_keystream(&mut self.pending[start..len])?;
            self.encrypted = len;

            log::trace!("{}: encrypted {} bytes", V::NAME, len - start);
        }

        while len > 0 {
            match self.inner.write(&self.pending[..len]) {
                Ok(0) => {
                    return Err(io::Error::new(
                        io::ErrorKind::WriteZero,
                        "failed to write buffered ciphertext",
                    ));
                }
                Ok(n) => {
                    self.pending[..n].zeroize();
                    self.pending.drain(..n);
                    self.encrypted -= n;
                    len -= n;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

impl<W: Write, V: Variant> Write for EncryptingWriter<W, V> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        if self.pending.len() == self.chunk_size {
            self.emit(self.whole_blocks())?;
        }

        let take = buf.len().min(self.chunk_size - self.pending.len());
        self.pending.extend_from_slice(&buf[..take]);

        Ok(take)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit(self.whole_blocks())?;

        self.inner.flush()
    }
}

/// Decrypts everything read through it from `R`.
///
/// The inner reader is drained one chunk at a time; a chunk shorter than the
/// configured size marks the end of the stream.
pub struct DecryptingReader<R: Read, V: Variant> {
    inner: R,
    cipher: ZeroizingContext<V>,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
    filled: usize,
    // Ciphertext bytes of the chunk being filled, kept across a failed read.
    received: usize,
    eof: bool,
}

impl<R: Read, V: Variant> DecryptingReader<R, V> {
    pub fn new(inner: R, key: &[u8; KEY_SIZE], nonce: &V::Nonce) -> Self {
        Self::from_context(inner, ZeroizingContext::new(key, nonce), DEFAULT_CHUNK_SIZE)
    }

    /// # Errors
    ///
    /// [`StreamCipherError::InvalidChunkSize`] unless `chunk_size` is a
    /// non-zero multiple of [`BLOCK_SIZE`].
    pub fn with_chunk_size(
        inner: R,
        key: &[u8; KEY_SIZE],
        nonce: &V::Nonce,
        chunk_size: usize,
    ) -> Result<Self, StreamCipherError> {
        validate_chunk_size(chunk_size)?;

        Ok(Self::from_context(
            inner,
            ZeroizingContext::new(key, nonce),
            chunk_size,
        ))
    }

    fn from_context(inner: R, cipher: ZeroizingContext<V>, chunk_size: usize) -> Self {
        Self {
            inner,
            cipher,
            buffer: Zeroizing::new(vec![0u8; chunk_size]),
            pos: 0,
            filled: 0,
            received: 0,
            eof: false,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Returns the inner reader. Decrypted bytes not yet read are wiped.
    pub fn into_inner(self) -> R {
        let Self { inner, .. } = self;

        inner
    }

    /// Reads the next chunk and decrypts it. On error the bytes received so far
    /// are kept, still encrypted, and the next call resumes after them.
    fn fill(&mut self) -> io::Result<()> {
        let mut reached_eof = false;

        while self.received < self.buffer.len() {
            match self.inner.read(&mut self.buffer[self.received..]) {
                Ok(0) => {
                    reached_eof = true;
                    break;
                }
                Ok(n) => self.received += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }

        self.cipher.apply_keystream(&mut self.buffer[..self.received])?;

        log::trace!("{}: decrypted {} bytes", V::NAME, self.received);

        self.pos = 0;
        self.filled = self.received;
        self.received = 0;
        self.eof = reached_eof;

        Ok(())
    }
}

impl<R: Read, V: Variant> Read for DecryptingReader<R, V> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }

        if self.pos == self.filled {
            if self.eof {
                return Ok(0);
            }
            self.fill()?;
        }

        let n = out.len().min(self.filled - self.pos);
        out[..n].copy_from_slice(&self.buffer[self.pos..self.pos + n]);
        self.buffer[self.pos..self.pos + n].zeroize();
        self.pos += n;

        Ok(n)
    }
}
