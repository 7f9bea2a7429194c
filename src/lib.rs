//! # binstream
//!
//! Little-endian primitive codec and transform math for game-engine binary
//! assets.
//!
//! Property-bag and chunk parsers sit on top of this crate: they own the
//! schema and call [`BinStream`] to marshal booleans, integers, floats,
//! vectors, quaternions, matrices and ASCII strings. Baked transforms are
//! split into translation, rotation and scale with [`Matrix4::decompose`].
//!
//! ## Modules
//!
//! - [`util`] - Errors, primitive type table, field-hash cache
//! - [`math`] - Vector2/3/4, Quaternion, Matrix4
//! - [`stream`] - The [`BinStream`] codec
//!
//! ## Example
//!
//! ```
//! use binstream::prelude::*;
//!
//! let mut bs = BinStream::from_bytes(Vec::new());
//! bs.write_u32(&[7, 8]).unwrap();
//! bs.write_ascii_until0("bone").unwrap();
//!
//! bs.seek(std::io::SeekFrom::Start(0)).unwrap();
//! assert_eq!(bs.read_u32(2).unwrap(), vec![7, 8]);
//! assert_eq!(bs.read_ascii_until0().unwrap(), "bone");
//! ```

pub mod math;
pub mod stream;
pub mod util;

// Re-export commonly used types
pub use math::{Matrix4, Quaternion, Vector2, Vector3, Vector4};
pub use stream::BinStream;
pub use util::{Error, FieldHash, HashCache, Primitive, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::math::{Matrix4, Quaternion, Vector2, Vector3, Vector4};
    pub use crate::stream::BinStream;
    pub use crate::util::{Error, FieldHash, HashCache, Primitive, Result};
}
