//! Little-endian primitive codec over a seekable byte stream.
//!
//! [`BinStream`] owns one stream and exposes typed reads and writes for the
//! wire layout used by property-bag and chunk formats:
//!
//! ```text
//! bool            1 byte   0 = false, non-zero = true
//! i8 / u8         1 byte
//! i16 / u16       2 bytes  little-endian
//! i32 / u32       4 bytes  little-endian
//! i64 / u64       8 bytes  little-endian
//! f32             4 bytes  IEEE 754, little-endian
//! vec2/vec3/vec4  2/3/4 consecutive f32
//! quat            4 consecutive f32 (x, y, z, w)
//! mtx4            16 consecutive f32, row-major
//! ascii           N bytes, or bytes up to a zero terminator
//! ```
//!
//! Reads take an element count and always return a `Vec`, even for one
//! element. Nothing is validated beyond the byte count: the caller decides
//! which type to read.
//!
//! The stream is released when the `BinStream` is dropped, on every exit
//! path. [`BinStream::close`] additionally flushes writable streams and
//! reports the flush error.

mod read;
mod write;

use std::fs::{File, OpenOptions};
use std::io::{Cursor, Seek, SeekFrom};
use std::path::Path;

use crate::util::{Error, Result};

/// Typed little-endian reader/writer owning a stream.
#[derive(Debug)]
pub struct BinStream<S> {
    inner: S,
}

impl<S> BinStream<S> {
    /// Wrap a stream.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the underlying stream.
    #[inline]
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    #[inline]
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Give up the codec and return the stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl BinStream<File> {
    /// Open an existing file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        tracing::debug!(path = %path.display(), "opened stream");
        Ok(Self::new(file))
    }

    /// Create (or truncate) a file for reading and writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        tracing::debug!(path = %path.display(), "created stream");
        Ok(Self::new(file))
    }
}

impl BinStream<Cursor<Vec<u8>>> {
    /// In-memory stream over `bytes`, positioned at offset 0.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(Cursor::new(bytes.into()))
    }

    /// Consume the stream and return its buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}

impl<S: Seek> BinStream<S> {
    /// Current offset.
    #[inline]
    pub fn tell(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Seek absolutely or relatively; returns the new offset.
    #[inline]
    pub fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        Ok(self.inner.seek(pos)?)
    }

    /// Skip `len` bytes forward.
    pub fn pad(&mut self, len: u64) -> Result<u64> {
        let offset = i64::try_from(len)
            .map_err(|_| Error::other(format!("pad of {} bytes exceeds seek range", len)))?;
        Ok(self.inner.seek(SeekFrom::Current(offset))?)
    }

    /// Offset of end-of-stream. The current offset is left unchanged.
    pub fn end(&mut self) -> Result<u64> {
        let pos = self.inner.stream_position()?;
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(end)
    }
}
