//! Primitive wire types understood by the codec.

use std::fmt;
use std::str::FromStr;

use super::Error;

/// Fixed-width primitive types.
///
/// Each type has a fixed little-endian wire size. Strings are not listed
/// here since their width depends on the encoding chosen at the call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Primitive {
    /// Boolean (1 byte: 0 = false, non-zero = true)
    Bool = 0,
    /// Signed 8-bit integer
    I8 = 1,
    /// Unsigned 8-bit integer
    U8 = 2,
    /// Signed 16-bit integer
    I16 = 3,
    /// Unsigned 16-bit integer
    U16 = 4,
    /// Signed 32-bit integer
    I32 = 5,
    /// Unsigned 32-bit integer
    U32 = 6,
    /// Signed 64-bit integer
    I64 = 7,
    /// Unsigned 64-bit integer
    U64 = 8,
    /// 32-bit floating point (IEEE 754 single precision)
    F32 = 9,
    /// Two consecutive f32
    Vec2 = 10,
    /// Three consecutive f32
    Vec3 = 11,
    /// Four consecutive f32
    Vec4 = 12,
    /// Four consecutive f32 (x, y, z, w)
    Quat = 13,
    /// Sixteen consecutive f32, row-major
    Mtx4 = 14,
}

impl Primitive {
    /// All primitive types, in tag order.
    pub const ALL: [Primitive; 15] = [
        Self::Bool, Self::I8, Self::U8, Self::I16, Self::U16,
        Self::I32, Self::U32, Self::I64, Self::U64, Self::F32,
        Self::Vec2, Self::Vec3, Self::Vec4, Self::Quat, Self::Mtx4,
    ];

    /// Size in bytes of one element on the wire.
    #[inline]
    pub const fn wire_size(self) -> usize {
        match self {
            Self::Bool | Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::Vec2 => 8,
            Self::Vec3 => 12,
            Self::Vec4 | Self::Quat => 16,
            Self::Mtx4 => 64,
        }
    }

    /// Number of f32 components for float groupings, 0 for scalars.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 | Self::Quat => 4,
            Self::Mtx4 => 16,
            _ => 0,
        }
    }

    /// Short name of this type.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::U8 => "u8",
            Self::I16 => "i16",
            Self::U16 => "u16",
            Self::I32 => "i32",
            Self::U32 => "u32",
            Self::I64 => "i64",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::Vec2 => "vec2",
            Self::Vec3 => "vec3",
            Self::Vec4 => "vec4",
            Self::Quat => "quat",
            Self::Mtx4 => "mtx4",
        }
    }
}

impl FromStr for Primitive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPrimitive(s.to_string()))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_sizes() {
        assert_eq!(Primitive::Bool.wire_size(), 1);
        assert_eq!(Primitive::U16.wire_size(), 2);
        assert_eq!(Primitive::F32.wire_size(), 4);
        assert_eq!(Primitive::I64.wire_size(), 8);
        assert_eq!(Primitive::Vec3.wire_size(), 12);
        assert_eq!(Primitive::Quat.wire_size(), 16);
        assert_eq!(Primitive::Mtx4.wire_size(), 64);
    }

    #[test]
    fn test_float_groups_match_arity() {
        for p in Primitive::ALL {
            if p.arity() > 0 {
                assert_eq!(p.wire_size(), p.arity() * 4, "{}", p);
            }
        }
    }

    #[test]
    fn test_parse_names() {
        for p in Primitive::ALL {
            assert_eq!(p.name().parse::<Primitive>().unwrap(), p);
        }
        assert_eq!("F32".parse::<Primitive>().unwrap(), Primitive::F32);
        assert!(matches!("f64".parse::<Primitive>(), Err(Error::UnknownPrimitive(_))));
    }
}
