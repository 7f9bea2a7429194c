//! Fixed-arity float value types and 4x4 transform math.
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`] - plain float tuples
//! - [`Quaternion`] - rotation stored as (x, y, z, w)
//! - [`Matrix4`] - row-major 4x4 matrix with product, inverse and TRS decomposition
//!
//! All types are `#[repr(C)]` and `Pod`, so slices of them can be viewed as
//! flat `f32` slices. Serialization and `Display` both go through the
//! `components()` accessor, which fixes the component order.

/// Defines a fixed-arity float tuple with its canonical-order accessors.
macro_rules! float_tuple {
    ($(#[$meta:meta])* $name:ident, $n:literal, $($field:ident),+) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        pub struct $name {
            $(pub $field: f32,)+
        }

        impl $name {
            /// Number of components.
            pub const ARITY: usize = $n;

            /// Create from components.
            #[inline]
            pub const fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Components in canonical order.
            #[inline]
            pub const fn components(&self) -> [f32; $n] {
                [$(self.$field),+]
            }

            /// Iterate components in canonical order.
            #[inline]
            pub fn iter(&self) -> std::array::IntoIter<f32, $n> {
                self.components().into_iter()
            }
        }

        impl From<[f32; $n]> for $name {
            #[inline]
            fn from(a: [f32; $n]) -> Self {
                let [$($field),+] = a;
                Self { $($field),+ }
            }
        }

        impl From<$name> for [f32; $n] {
            #[inline]
            fn from(v: $name) -> Self {
                v.components()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.components(), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                <[f32; $n] as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }

        impl IntoIterator for $name {
            type Item = f32;
            type IntoIter = std::array::IntoIter<f32, $n>;

            fn into_iter(self) -> Self::IntoIter {
                self.components().into_iter()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::math::write_components(f, &self.components())
            }
        }
    };
}

mod decompose;
mod matrix;
mod quaternion;
mod vector;

pub use matrix::*;
pub use quaternion::*;
pub use vector::*;

/// Write components with 4 decimals, space separated.
pub(crate) fn write_components(f: &mut std::fmt::Formatter<'_>, values: &[f32]) -> std::fmt::Result {
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:.4}", v)?;
    }
    Ok(())
}
