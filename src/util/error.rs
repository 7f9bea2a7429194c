//! Error types for the binstream library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stream and codec operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Stream ended before a typed read was satisfied
    #[error("Read underflow at position {pos}: requested {requested} bytes, {available} available")]
    ReadUnderflow { pos: u64, requested: usize, available: u64 },

    /// Byte outside the ASCII range in a text read
    #[error("Cannot decode byte 0x{byte:02x} as ASCII at position {pos}")]
    Decode { pos: u64, byte: u8 },

    /// Character that cannot be written as single-byte ASCII
    #[error("Cannot encode {0:?} as ASCII")]
    NonAscii(char),

    /// Malformed hexadecimal hash literal
    #[error("Invalid hash literal: {0}")]
    InvalidHash(String),

    /// Unrecognized primitive type name
    #[error("Unknown primitive type: {0}")]
    UnknownPrimitive(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias for binstream operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::ReadUnderflow { pos: 8, requested: 4, available: 2 };
        let s = e.to_string();
        assert!(s.contains('8'));
        assert!(s.contains('4'));
        assert!(s.contains('2'));

        let e = Error::Decode { pos: 3, byte: 0xe9 };
        assert!(e.to_string().contains("0xe9"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
