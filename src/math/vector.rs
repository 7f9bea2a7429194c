//! Fixed-arity float vectors.

use glam::{Vec2, Vec3, Vec4};

float_tuple!(
    /// Two-component vector (x, y).
    Vector2, 2, x, y
);

float_tuple!(
    /// Three-component vector (x, y, z).
    Vector3, 3, x, y, z
);

float_tuple!(
    /// Four-component vector (x, y, z, w).
    Vector4, 4, x, y, z, w
);

impl Vector3 {
    /// All components set to one.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Uniform vector.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }
}

impl From<Vec2> for Vector2 {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for Vec2 {
    fn from(v: Vector2) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec4> for Vector4 {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Vector4> for Vec4 {
    fn from(v: Vector4) -> Self {
        Vec4::new(v.x, v.y, v.z, v.w)
    }
}
