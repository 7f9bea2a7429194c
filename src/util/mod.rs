//! Utility types shared by the codec and its consumers.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`Primitive`] - Fixed-width wire types
//! - [`HashCache`] - Field-name hash memoization

mod error;
mod hash;
mod primitive;

pub use error::*;
pub use hash::*;
pub use primitive::*;
