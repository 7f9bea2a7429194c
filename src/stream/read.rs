//! Typed reads.

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use super::BinStream;
use crate::math::{Matrix4, Quaternion, Vector2, Vector3, Vector4};
use crate::util::{Error, Result};

/// Defines a `read_*` method for a fixed-width little-endian number.
macro_rules! read_le {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $into:ident) => {
        $(#[$meta])*
        pub fn $name(&mut self, count: usize) -> Result<Vec<$ty>> {
            let buf = self.fill(count, std::mem::size_of::<$ty>())?;
            let mut out = vec![<$ty>::default(); count];
            LittleEndian::$into(&buf, &mut out);
            Ok(out)
        }
    };
}

impl<S: Read + Seek> BinStream<S> {
    /// Read exactly `count` elements of `size` bytes.
    ///
    /// The request is checked against the bytes left in the stream before
    /// anything is allocated.
    fn fill(&mut self, count: usize, size: usize) -> Result<Vec<u8>> {
        let pos = self.inner.stream_position()?;
        let available = self.remaining(pos)?;
        let len = match count.checked_mul(size) {
            Some(len) if len as u64 <= available => len,
            _ => {
                return Err(Error::ReadUnderflow {
                    pos,
                    requested: count.saturating_mul(size),
                    available,
                })
            }
        };
        let mut buf = vec![0u8; len];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => Ok(buf),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(self.underflow(pos, len)),
            Err(e) => Err(e.into()),
        }
    }

    /// Bytes between `pos` and end-of-stream; the offset is left at `pos`.
    fn remaining(&mut self, pos: u64) -> Result<u64> {
        let end = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(end.saturating_sub(pos))
    }

    fn underflow(&mut self, pos: u64, requested: usize) -> Error {
        let available = self
            .inner
            .seek(SeekFrom::End(0))
            .map(|end| end.saturating_sub(pos))
            .unwrap_or(0);
        Error::ReadUnderflow { pos, requested, available }
    }

    /// Entire stream content.
    ///
    /// Seeks to offset 0 and reads to the end. The previous offset is not
    /// restored: afterwards the stream sits at end-of-stream.
    pub fn raw(&mut self) -> Result<Vec<u8>> {
        self.inner.seek(SeekFrom::Start(0))?;
        let mut buf = Vec::new();
        self.inner.read_to_end(&mut buf)?;
        tracing::trace!(len = buf.len(), "raw dump");
        Ok(buf)
    }

    /// Read `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        self.fill(len, 1)
    }

    /// Read `count` booleans (any non-zero byte is `true`).
    pub fn read_bool(&mut self, count: usize) -> Result<Vec<bool>> {
        Ok(self.fill(count, 1)?.into_iter().map(|b| b != 0).collect())
    }

    /// Read `count` signed bytes.
    pub fn read_i8(&mut self, count: usize) -> Result<Vec<i8>> {
        Ok(self.fill(count, 1)?.into_iter().map(|b| b as i8).collect())
    }

    /// Read `count` unsigned bytes.
    pub fn read_u8(&mut self, count: usize) -> Result<Vec<u8>> {
        self.fill(count, 1)
    }

    read_le!(
        /// Read `count` little-endian `i16`.
        read_i16, i16, read_i16_into
    );
    read_le!(
        /// Read `count` little-endian `u16`.
        read_u16, u16, read_u16_into
    );
    read_le!(
        /// Read `count` little-endian `i32`.
        read_i32, i32, read_i32_into
    );
    read_le!(
        /// Read `count` little-endian `u32`.
        read_u32, u32, read_u32_into
    );
    read_le!(
        /// Read `count` little-endian `i64`.
        read_i64, i64, read_i64_into
    );
    read_le!(
        /// Read `count` little-endian `u64`.
        read_u64, u64, read_u64_into
    );
    read_le!(
        /// Read `count` little-endian `f32`.
        read_f32, f32, read_f32_into
    );

    /// Read `count` two-component vectors.
    pub fn read_vec2(&mut self, count: usize) -> Result<Vec<Vector2>> {
        self.read_groups(count)
    }

    /// Read `count` three-component vectors.
    pub fn read_vec3(&mut self, count: usize) -> Result<Vec<Vector3>> {
        self.read_groups(count)
    }

    /// Read `count` four-component vectors.
    pub fn read_vec4(&mut self, count: usize) -> Result<Vec<Vector4>> {
        self.read_groups(count)
    }

    /// Read `count` quaternions stored as (x, y, z, w).
    pub fn read_quat(&mut self, count: usize) -> Result<Vec<Quaternion>> {
        self.read_groups(count)
    }

    /// Read one row-major 4x4 matrix.
    pub fn read_mtx4(&mut self) -> Result<Matrix4> {
        Ok(self.read_groups::<Matrix4>(1)?[0])
    }

    /// Read `count * arity` floats and split them into consecutive groups.
    fn read_groups<T: bytemuck::Pod>(&mut self, count: usize) -> Result<Vec<T>> {
        let arity = std::mem::size_of::<T>() / 4;
        let floats = self.read_f32(count.saturating_mul(arity))?;
        Ok(bytemuck::cast_slice::<f32, T>(&floats).to_vec())
    }

    /// Read exactly `len` bytes as ASCII text.
    pub fn read_ascii(&mut self, len: usize) -> Result<String> {
        let pos = self.inner.stream_position()?;
        let buf = self.fill(len, 1)?;
        decode_ascii(pos, &buf, false)
    }

    /// Read exactly `len` bytes as ASCII text, dropping every zero byte.
    ///
    /// Zeros are removed wherever they occur, not only as trailing padding:
    /// `b"A\0B\0\0"` reads as `"AB"`.
    pub fn read_ascii_padded(&mut self, len: usize) -> Result<String> {
        let pos = self.inner.stream_position()?;
        let buf = self.fill(len, 1)?;
        decode_ascii(pos, &buf, true)
    }

    /// Read bytes up to and including a zero terminator.
    ///
    /// The terminator is consumed but not returned. Each byte becomes the
    /// char with the same code point. There is no length bound: a stream
    /// without a terminator fails only at end-of-stream.
    pub fn read_ascii_until0(&mut self) -> Result<String> {
        let start = self.inner.stream_position()?;
        let mut s = String::new();
        loop {
            let b = match self.inner.read_u8() {
                Ok(b) => b,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    let pos = start + s.chars().count() as u64;
                    return Err(self.underflow(pos, 1));
                }
                Err(e) => return Err(e.into()),
            };
            if b == 0 {
                break;
            }
            s.push(char::from(b));
        }
        tracing::trace!(pos = start, len = s.len(), "null-terminated string");
        Ok(s)
    }
}

/// Decode single-byte ASCII; `pos` is the stream offset of `bytes[0]`.
fn decode_ascii(pos: u64, bytes: &[u8], skip_nul: bool) -> Result<String> {
    let mut s = String::with_capacity(bytes.len());
    for (i, &b) in bytes.iter().enumerate() {
        if skip_nul && b == 0 {
            continue;
        }
        if !b.is_ascii() {
            return Err(Error::Decode { pos: pos + i as u64, byte: b });
        }
        s.push(b as char);
    }
    Ok(s)
}
