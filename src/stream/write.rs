//! Typed writes.

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian};

use super::BinStream;
use crate::math::{Matrix4, Quaternion, Vector2, Vector3, Vector4};
use crate::util::{Error, Result};

/// Defines a `write_*` method for a fixed-width little-endian number.
macro_rules! write_le {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $from:ident) => {
        $(#[$meta])*
        pub fn $name(&mut self, values: &[$ty]) -> Result<()> {
            let mut buf = vec![0u8; values.len() * std::mem::size_of::<$ty>()];
            LittleEndian::$from(values, &mut buf);
            self.write_bytes(&buf)
        }
    };
}

impl<S: Write> BinStream<S> {
    /// Write raw bytes.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.inner.write_all(data)?;
        Ok(())
    }

    /// Write booleans as single bytes (0 or 1).
    pub fn write_bool(&mut self, values: &[bool]) -> Result<()> {
        let buf: Vec<u8> = values.iter().map(|&b| b as u8).collect();
        self.write_bytes(&buf)
    }

    /// Write signed bytes.
    pub fn write_i8(&mut self, values: &[i8]) -> Result<()> {
        self.write_bytes(bytemuck::cast_slice(values))
    }

    /// Write unsigned bytes.
    pub fn write_u8(&mut self, values: &[u8]) -> Result<()> {
        self.write_bytes(values)
    }

    write_le!(
        /// Write little-endian `i16` values.
        write_i16, i16, write_i16_into
    );
    write_le!(
        /// Write little-endian `u16` values.
        write_u16, u16, write_u16_into
    );
    write_le!(
        /// Write little-endian `i32` values.
        write_i32, i32, write_i32_into
    );
    write_le!(
        /// Write little-endian `u32` values.
        write_u32, u32, write_u32_into
    );
    write_le!(
        /// Write little-endian `i64` values.
        write_i64, i64, write_i64_into
    );
    write_le!(
        /// Write little-endian `u64` values.
        write_u64, u64, write_u64_into
    );
    write_le!(
        /// Write little-endian `f32` values.
        write_f32, f32, write_f32_into
    );

    /// Write vectors as one contiguous run of floats.
    pub fn write_vec2(&mut self, values: &[Vector2]) -> Result<()> {
        self.write_f32(bytemuck::cast_slice(values))
    }

    /// Write vectors as one contiguous run of floats.
    pub fn write_vec3(&mut self, values: &[Vector3]) -> Result<()> {
        self.write_f32(bytemuck::cast_slice(values))
    }

    /// Write vectors as one contiguous run of floats.
    pub fn write_vec4(&mut self, values: &[Vector4]) -> Result<()> {
        self.write_f32(bytemuck::cast_slice(values))
    }

    /// Write quaternions as (x, y, z, w) floats.
    pub fn write_quat(&mut self, values: &[Quaternion]) -> Result<()> {
        self.write_f32(bytemuck::cast_slice(values))
    }

    /// Write one matrix as 16 row-major floats.
    pub fn write_mtx4(&mut self, value: &Matrix4) -> Result<()> {
        self.write_f32(&value.m)
    }

    /// Write text as ASCII bytes, without terminator or padding.
    pub fn write_ascii(&mut self, value: &str) -> Result<()> {
        check_ascii(value.chars())?;
        self.write_bytes(value.as_bytes())
    }

    /// Write text into exactly `len` bytes.
    ///
    /// Longer text is truncated to `len`; shorter text is zero-filled.
    pub fn write_ascii_padded(&mut self, value: &str, len: usize) -> Result<()> {
        check_ascii(value.chars().take(len))?;
        let n = value.len().min(len);
        if n < value.len() {
            tracing::debug!(value, len, "truncating padded string");
        }
        let mut buf = vec![0u8; len];
        buf[..n].copy_from_slice(&value.as_bytes()[..n]);
        self.write_bytes(&buf)
    }

    /// Write text followed by a zero terminator.
    pub fn write_ascii_until0(&mut self, value: &str) -> Result<()> {
        check_ascii(value.chars())?;
        self.write_bytes(value.as_bytes())?;
        self.write_bytes(&[0])
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and release the stream.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }
}

fn check_ascii(mut chars: impl Iterator<Item = char>) -> Result<()> {
    match chars.find(|c| !c.is_ascii()) {
        Some(c) => Err(Error::NonAscii(c)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::SeekFrom;

    #[test]
    fn test_write_integers_le() {
        let mut bs = BinStream::from_bytes(Vec::new());
        bs.write_u16(&[0x0201]).unwrap();
        bs.write_i32(&[-2]).unwrap();
        bs.write_u64(&[1]).unwrap();
        assert_eq!(
            bs.into_bytes(),
            vec![0x01, 0x02, 0xfe, 0xff, 0xff, 0xff, 1, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_write_bool_and_i8() {
        let mut bs = BinStream::from_bytes(Vec::new());
        bs.write_bool(&[true, false]).unwrap();
        bs.write_i8(&[-1, 5]).unwrap();
        assert_eq!(bs.into_bytes(), vec![1, 0, 0xff, 5]);
    }

    #[test]
    fn test_vectors_flatten_in_order() {
        let mut bs = BinStream::from_bytes(Vec::new());
        bs.write_vec3(&[Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)]).unwrap();
        bs.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(bs.read_f32(6).unwrap(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_matrix_roundtrip() {
        let m = Matrix4::new(std::array::from_fn(|i| i as f32 * 0.5));
        let mut bs = BinStream::from_bytes(Vec::new());
        bs.write_mtx4(&m).unwrap();
        assert_eq!(bs.tell().unwrap(), 64);
        bs.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(bs.read_mtx4().unwrap(), m);
    }

    #[test]
    fn test_padded_truncates() {
        let mut bs = BinStream::from_bytes(Vec::new());
        bs.write_ascii_padded("toolong", 3).unwrap();
        assert_eq!(bs.into_bytes(), vec![0x74, 0x6f, 0x6f]);
    }

    #[test]
    fn test_padded_zero_fills() {
        let mut bs = BinStream::from_bytes(Vec::new());
        bs.write_ascii_padded("ab", 5).unwrap();
        assert_eq!(bs.into_bytes(), b"ab\0\0\0".to_vec());
    }

    #[test]
    fn test_padded_ignores_text_past_length() {
        let mut bs = BinStream::from_bytes(Vec::new());
        bs.write_ascii_padded("okü", 2).unwrap();
        assert_eq!(bs.into_bytes(), b"ok".to_vec());
    }

    #[test]
    fn test_non_ascii_rejected() {
        let mut bs = BinStream::from_bytes(Vec::new());
        assert!(matches!(bs.write_ascii("naïve"), Err(Error::NonAscii('ï'))));
        assert!(matches!(bs.write_ascii_padded("é", 4), Err(Error::NonAscii('é'))));
        assert!(bs.into_bytes().is_empty());
    }

    #[test]
    fn test_until0_roundtrip() {
        let mut bs = BinStream::from_bytes(Vec::new());
        bs.write_ascii_until0("name").unwrap();
        bs.write_ascii("x").unwrap();
        bs.seek(SeekFrom::Start(0)).unwrap();
        assert_eq!(bs.read_ascii_until0().unwrap(), "name");
        assert_eq!(bs.read_ascii(1).unwrap(), "x");
    }
}
