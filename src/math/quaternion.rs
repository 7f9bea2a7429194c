//! Rotation quaternion.

use glam::Quat;

float_tuple!(
    /// Quaternion stored as (x, y, z, w).
    ///
    /// Unit magnitude is not enforced; call [`Quaternion::normalize`] when
    /// the source is not trusted to be normalized.
    Quaternion, 4, x, y, z, w
);

impl Quaternion {
    /// Identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Four-dimensional dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Magnitude.
    #[inline]
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length. A zero quaternion yields NaN components.
    pub fn normalize(&self) -> Self {
        let inv = 1.0 / self.length();
        Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    /// Compare as rotations: `q` and `-q` are treated as equal.
    pub fn approx_eq_rotation(&self, other: &Self, epsilon: f32) -> bool {
        let close = |s: f32| {
            (self.x - s * other.x).abs() <= epsilon
                && (self.y - s * other.y).abs() <= epsilon
                && (self.z - s * other.z).abs() <= epsilon
                && (self.w - s * other.w).abs() <= epsilon
        };
        close(1.0) || close(-1.0)
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}
