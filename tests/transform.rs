//! Integration tests for Matrix4 algebra laws and TRS decomposition.

use binstream::prelude::*;
use glam::{EulerRot, Mat4, Quat, Vec3};

const EPS: f32 = 1e-4;

fn samples() -> Vec<Matrix4> {
    let mut out = vec![
        Matrix4::IDENTITY,
        Matrix4::new([
            1.0, 2.0, 3.0, 4.0,
            0.0, 1.0, 4.0, 2.0,
            5.0, 6.0, 0.0, 1.0,
            1.0, 0.0, 2.0, 3.0,
        ]),
    ];
    for i in 0..8 {
        let f = i as f32;
        let mat = Mat4::from_scale_rotation_translation(
            Vec3::new(0.5 + f * 0.25, 1.0 + f * 0.1, 2.0 - f * 0.2),
            Quat::from_euler(EulerRot::YXZ, f * 0.7, -f * 0.3, f * 1.3),
            Vec3::new(f, -2.0 * f, 3.0),
        );
        out.push(mat.into());
    }
    out
}

#[test]
fn test_identity_law() {
    for m in samples() {
        assert!((m * Matrix4::IDENTITY).abs_diff_eq(&m, EPS));
        assert!((Matrix4::IDENTITY * m).abs_diff_eq(&m, EPS));
    }
}

#[test]
fn test_inversion_law() {
    for m in samples() {
        assert!(m.determinant().abs() >= 0.001);
        let inv = m.inverse();
        assert!((inv * m).abs_diff_eq(&Matrix4::IDENTITY, EPS), "inverse failed for\n{}", m);
    }
}

#[test]
fn test_inverse_matches_glam() {
    for m in samples() {
        let expected = Matrix4::from(Mat4::from(m).inverse());
        assert!(m.inverse().abs_diff_eq(&expected, 1e-3));
    }
}

#[test]
fn test_singular_yields_exact_identity() {
    let rank_deficient = Matrix4::new([
        1.0, 2.0, 3.0, 4.0,
        2.0, 4.0, 6.0, 8.0,
        0.0, 1.0, 0.0, 1.0,
        1.0, 1.0, 1.0, 1.0,
    ]);
    assert!(rank_deficient.determinant().abs() < 0.001);
    assert_eq!(rank_deficient.inverse(), Matrix4::IDENTITY);

    let scaled_down = Matrix4::compose(Vector3::default(), Quaternion::IDENTITY, Vector3::splat(0.05));
    assert_eq!(scaled_down.inverse(), Matrix4::IDENTITY);
}

#[test]
fn test_decompose_roundtrip() {
    let rotations = [
        Quat::IDENTITY,
        Quat::from_rotation_x(1.0),
        Quat::from_rotation_z(-2.2),
        Quat::from_axis_angle(Vec3::Y, 2.0 * std::f32::consts::FRAC_PI_3),
        Quat::from_axis_angle(Vec3::new(1.0, -2.0, 0.5).normalize(), 3.0),
        Quat::from_euler(EulerRot::ZYX, 2.5, 0.4, -2.9),
    ];
    let translations = [Vector3::default(), Vector3::new(12.5, -3.0, 0.75)];
    let scales = [1.0, 0.25, 4.0];

    for q in rotations {
        for t in translations {
            for s in scales {
                let rotation = Quaternion::from(q);
                let scale = Vector3::splat(s);
                let (t2, r2, s2) = Matrix4::compose(t, rotation, scale).decompose();

                for (a, b) in t2.into_iter().zip(t) {
                    assert!((a - b).abs() < EPS, "translation {} vs {}", t2, t);
                }
                for (a, b) in s2.into_iter().zip(scale) {
                    assert!((a - b).abs() < EPS, "scale {} vs {}", s2, scale);
                }
                assert!(r2.approx_eq_rotation(&rotation, EPS), "rotation {} vs {}", r2, rotation);
            }
        }
    }
}

#[test]
fn test_decompose_agrees_with_glam() {
    let mat = Mat4::from_scale_rotation_translation(
        Vec3::splat(1.5),
        Quat::from_euler(EulerRot::XYZ, 0.2, 1.1, -0.4),
        Vec3::new(-1.0, 2.0, 8.0),
    );
    let (gs, gr, gt) = mat.to_scale_rotation_translation();
    let (t, r, s) = Matrix4::from(mat).decompose();

    assert!(Vec3::from(t).abs_diff_eq(gt, EPS));
    assert!(Vec3::from(s).abs_diff_eq(gs, EPS));
    assert!(r.approx_eq_rotation(&Quaternion::from(gr), EPS));
}

#[test]
fn test_to_sequence_export() {
    let m = Matrix4::compose(Vector3::new(1.0, 2.0, 3.0), Quaternion::IDENTITY, Vector3::ONE);
    let (t, r, s) = m.decompose();
    let json = serde_json::json!({ "t": t, "r": r, "s": s, "m": m });

    assert_eq!(json["t"], serde_json::json!([1.0, 2.0, 3.0]));
    assert_eq!(json["r"], serde_json::json!([0.0, 0.0, 0.0, 1.0]));
    assert_eq!(json["s"], serde_json::json!([1.0, 1.0, 1.0]));
    assert_eq!(json["m"].as_array().map(|a| a.len()), Some(16));
    assert_eq!(json["m"][12], serde_json::json!(1.0));
}
