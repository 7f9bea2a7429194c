//! Translation / rotation / scale extraction and composition.

use glam::Mat4;

use super::{Matrix4, Quaternion, Vector3};

/// Trace above which the rotation is extracted from the trace directly.
const TRACE_EPSILON: f64 = 0.000_000_01;

impl Matrix4 {
    /// Split an affine transform into `(translation, rotation, scale)`.
    ///
    /// Only valid for matrices built as scale, then rotate, then translate,
    /// with no shear. The bottom-right cell multiplies all three scale
    /// components. Zero scale or a degenerate basis yields NaN or infinite
    /// components; nothing is validated.
    ///
    /// A mirrored basis is made right-handed by negating the x scale and
    /// the first rotation row.
    pub fn decompose(&self) -> (Vector3, Quaternion, Vector3) {
        let [a, b, c, _, e, f, g, _, i, j, k, _, m, n, o, p] = self.m.map(f64::from);

        let translation = Vector3::new(m as f32, n as f32, o as f32);

        let mut scale = [
            p * (a * a + b * b + c * c).sqrt(),
            p * (e * e + f * f + g * g).sqrt(),
            p * (i * i + j * j + k * k).sqrt(),
        ];

        // Cell (row, col) of the basis is divided by the scale of its column.
        let mut r = [
            [a / scale[0], b / scale[1], c / scale[2]],
            [e / scale[0], f / scale[1], g / scale[2]],
            [i / scale[0], j / scale[1], k / scale[2]],
        ];

        // (row0 x row1) . row2
        let handedness = (r[0][1] * r[1][2] - r[0][2] * r[1][1]) * r[2][0]
            + (r[0][2] * r[1][0] - r[0][0] * r[1][2]) * r[2][1]
            + (r[0][0] * r[1][1] - r[0][1] * r[1][0]) * r[2][2];
        if handedness < 0.0 {
            scale[0] = -scale[0];
            r[0] = r[0].map(|v| -v);
        }

        let rotation = quat_from_basis(&r);
        let scale = Vector3::new(scale[0] as f32, scale[1] as f32, scale[2] as f32);
        (translation, rotation, scale)
    }

    /// Build a transform from translation, rotation and scale.
    ///
    /// For a unit rotation and uniform scale, [`Matrix4::decompose`]
    /// recovers the inputs (the rotation up to sign).
    pub fn compose(translation: Vector3, rotation: Quaternion, scale: Vector3) -> Self {
        Mat4::from_scale_rotation_translation(scale.into(), rotation.into(), translation.into()).into()
    }
}

/// Unit quaternion from an orthonormal row-vector basis.
///
/// Branches on the trace, then on the largest diagonal term, so the
/// square root argument stays well away from zero.
fn quat_from_basis(r: &[[f64; 3]; 3]) -> Quaternion {
    let (ra, rb, rc) = (r[0][0], r[0][1], r[0][2]);
    let (re, rf, rg) = (r[1][0], r[1][1], r[1][2]);
    let (ri, rj, rk) = (r[2][0], r[2][1], r[2][2]);

    let trace = ra + rf + rk;
    let q = if trace > TRACE_EPSILON {
        let s = (trace + 1.0).sqrt();
        let is = 0.5 / s;
        [(rg - rj) * is, (ri - rc) * is, (rb - re) * is, s * 0.5]
    } else if ra >= rf && ra >= rk {
        let s = (1.0 + ra - rf - rk).sqrt();
        let is = 0.5 / s;
        [0.5 * s, (rb + re) * is, (ri + rc) * is, (rg - rj) * is]
    } else if rf > rk {
        let s = (1.0 + rf - ra - rk).sqrt();
        let is = 0.5 / s;
        // w sign matches the trace branch; the negated form breaks compose round trips
        [(re + rb) * is, 0.5 * s, (rj + rg) * is, (ri - rc) * is]
    } else {
        let s = (1.0 + rk - ra - rf).sqrt();
        let is = 0.5 / s;
        [(rc + ri) * is, (rj + rg) * is, 0.5 * s, (rb - re) * is]
    };
    Quaternion::new(q[0] as f32, q[1] as f32, q[2] as f32, q[3] as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Quat, Vec3};

    const EPS: f32 = 1e-4;

    fn assert_vec_eq(a: Vector3, b: Vector3) {
        for (x, y) in a.into_iter().zip(b) {
            assert!((x - y).abs() < EPS, "{} != {}", a, b);
        }
    }

    fn roundtrip(t: Vector3, q: Quat, s: f32) {
        let rotation = Quaternion::from(q.normalize());
        let m = Matrix4::compose(t, rotation, Vector3::splat(s));
        let (t2, r2, s2) = m.decompose();
        assert_vec_eq(t2, t);
        assert_vec_eq(s2, Vector3::splat(s));
        assert!(r2.approx_eq_rotation(&rotation, EPS), "{} vs {}", r2, rotation);
    }

    #[test]
    fn test_identity() {
        let (t, r, s) = Matrix4::IDENTITY.decompose();
        assert_eq!(t, Vector3::default());
        assert_eq!(r, Quaternion::IDENTITY);
        assert_eq!(s, Vector3::ONE);
    }

    #[test]
    fn test_translation_is_bottom_row() {
        let mut m = Matrix4::IDENTITY;
        m[12] = 1.5;
        m[13] = -2.0;
        m[14] = 3.25;
        let (t, _, _) = m.decompose();
        assert_eq!(t, Vector3::new(1.5, -2.0, 3.25));
    }

    #[test]
    fn test_roundtrip_trace_branch() {
        roundtrip(Vector3::new(1.0, 2.0, 3.0), Quat::from_rotation_y(0.7), 1.0);
        roundtrip(Vector3::new(-4.0, 0.5, 9.0), Quat::from_euler(glam::EulerRot::XYZ, 0.3, -0.2, 1.1), 2.5);
    }

    #[test]
    fn test_roundtrip_diagonal_branches() {
        // Rotations near 180 degrees about each axis hit the x, y and z branches
        roundtrip(Vector3::default(), Quat::from_axis_angle(Vec3::X, 3.0), 1.0);
        roundtrip(Vector3::default(), Quat::from_axis_angle(Vec3::Y, 2.5), 1.0);
        roundtrip(Vector3::default(), Quat::from_axis_angle(Vec3::Z, 2.9), 0.5);
        roundtrip(Vector3::new(1.0, 1.0, 1.0), Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0).normalize(), 3.1), 3.0);
    }

    #[test]
    fn test_corner_cell_scales_uniformly() {
        let mut m = Matrix4::IDENTITY;
        m[15] = 2.0;
        let (_, r, s) = m.decompose();
        assert_eq!(s, Vector3::splat(2.0));
        // Basis is divided by the scaled norm, so the rotation is not unit
        assert!((r.w - 0.5 * 2.5f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_mirrored_basis() {
        let mut m = Matrix4::IDENTITY;
        m[0] = -1.0;
        let (_, r, s) = m.decompose();
        assert_eq!(s, Vector3::new(-1.0, 1.0, 1.0));
        assert_eq!(r, Quaternion::IDENTITY);
    }

    #[test]
    fn test_zero_scale_propagates_nan() {
        let m = Matrix4::new([0.0; 16]);
        let (t, r, s) = m.decompose();
        assert_eq!(t, Vector3::default());
        assert_eq!(s, Vector3::default());
        assert!(r.into_iter().any(f32::is_nan));
    }

    #[test]
    fn test_compose_matches_glam_layout() {
        let m = Matrix4::compose(Vector3::new(7.0, 8.0, 9.0), Quaternion::IDENTITY, Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(m.row(0), [2.0, 0.0, 0.0, 0.0]);
        assert_eq!(m.row(1), [0.0, 3.0, 0.0, 0.0]);
        assert_eq!(m.row(2), [0.0, 0.0, 4.0, 0.0]);
        assert_eq!(m.row(3), [7.0, 8.0, 9.0, 1.0]);
    }
}
