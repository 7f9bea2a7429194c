//! Row-major 4x4 matrix.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Determinant magnitude below which [`Matrix4::inverse`] gives up.
pub const SINGULAR_EPSILON: f64 = 0.001;

/// 4x4 matrix of `f32`, stored row-major.
///
/// Cell `row * 4 + col` holds row `row`, column `col`. Transforms follow the
/// row-vector convention: the first three rows are the scaled basis axes
/// and cells 12..=14 hold the translation. This is the same cell order as
/// `glam::Mat4::to_cols_array`.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(from = "[f32; 16]", into = "[f32; 16]")]
#[repr(C)]
pub struct Matrix4 {
    pub m: [f32; 16],
}

impl Matrix4 {
    /// Identity matrix.
    pub const IDENTITY: Self = Self::new([
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ]);

    /// Create from 16 row-major cells.
    #[inline]
    pub const fn new(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Cells in row-major order.
    #[inline]
    pub const fn components(&self) -> [f32; 16] {
        self.m
    }

    /// Iterate cells in row-major order.
    #[inline]
    pub fn iter(&self) -> std::array::IntoIter<f32, 16> {
        self.m.into_iter()
    }

    /// Cell at `row`, `col`. Panics if either is out of 0..4.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(row < 4 && col < 4, "matrix cell ({}, {}) out of range", row, col);
        self.m[row * 4 + col]
    }

    /// Set cell at `row`, `col`. Panics if either is out of 0..4.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        assert!(row < 4 && col < 4, "matrix cell ({}, {}) out of range", row, col);
        self.m[row * 4 + col] = value;
    }

    /// Copy of one row.
    #[inline]
    pub fn row(&self, row: usize) -> [f32; 4] {
        let r = row * 4;
        [self.m[r], self.m[r + 1], self.m[r + 2], self.m[r + 3]]
    }

    /// Copy of one column.
    #[inline]
    pub fn col(&self, col: usize) -> [f32; 4] {
        [self.m[col], self.m[col + 4], self.m[col + 8], self.m[col + 12]]
    }

    /// Swap rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[c * 4 + r] = self.m[r * 4 + c];
            }
        }
        Self::new(out)
    }

    /// Determinant by 2x2 minor expansion, in double precision.
    pub fn determinant(&self) -> f64 {
        let [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p] = self.m.map(f64::from);
        (a * f - e * b) * (k * p - o * l)
            - (a * j - i * b) * (g * p - o * h)
            + (a * n - m * b) * (g * l - k * h)
            + (e * j - i * f) * (c * p - o * d)
            - (e * n - m * f) * (c * l - k * d)
            + (i * n - m * j) * (c * h - g * d)
    }

    /// Inverse by adjugate over determinant.
    ///
    /// When `|det| < 0.001` the matrix is treated as singular and the
    /// identity is returned instead; no error is reported.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        if det.abs() < SINGULAR_EPSILON {
            tracing::debug!(det, "singular matrix, inverse falls back to identity");
            return Self::IDENTITY;
        }

        let [a, b, c, d, e, f, g, h, i, j, k, l, m, n, o, p] = self.m.map(f64::from);
        let s = 1.0 / det;

        let cells = [
            // row 0
            s * (f * (k * p - o * l) + j * (o * h - g * p) + n * (g * l - k * h)),
            s * (j * (c * p - o * d) + n * (k * d - c * l) + b * (o * l - k * p)),
            s * (n * (c * h - g * d) + b * (g * p - o * h) + f * (o * d - c * p)),
            s * (b * (k * h - g * l) + f * (c * l - k * d) + j * (g * d - c * h)),
            // row 1
            s * (g * (i * p - m * l) + k * (m * h - e * p) + o * (e * l - i * h)),
            s * (k * (a * p - m * d) + o * (i * d - a * l) + c * (m * l - i * p)),
            s * (o * (a * h - e * d) + c * (e * p - m * h) + g * (m * d - a * p)),
            s * (c * (i * h - e * l) + g * (a * l - i * d) + k * (e * d - a * h)),
            // row 2
            s * (h * (i * n - m * j) + l * (m * f - e * n) + p * (e * j - i * f)),
            s * (l * (a * n - m * b) + p * (i * b - a * j) + d * (m * j - i * n)),
            s * (p * (a * f - e * b) + d * (e * n - m * f) + h * (m * b - a * n)),
            s * (d * (i * f - e * j) + h * (a * j - i * b) + l * (e * b - a * f)),
            // row 3
            s * (e * (n * k - j * o) + i * (f * o - n * g) + m * (j * g - f * k)),
            s * (i * (n * c - b * o) + m * (b * k - j * c) + a * (j * o - n * k)),
            s * (m * (f * c - b * g) + a * (n * g - f * o) + e * (b * o - n * c)),
            s * (a * (f * k - j * g) + e * (j * c - b * k) + i * (b * g - f * c)),
        ];
        Self::new(cells.map(|v| v as f32))
    }

    /// Component-wise comparison within `epsilon`.
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.m.iter().zip(other.m.iter()).all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let mut out = [0.0f32; 16];
        for r in 0..4 {
            for c in 0..4 {
                out[r * 4 + c] = self.m[r * 4] * rhs.m[c]
                    + self.m[r * 4 + 1] * rhs.m[4 + c]
                    + self.m[r * 4 + 2] * rhs.m[8 + c]
                    + self.m[r * 4 + 3] * rhs.m[12 + c];
            }
        }
        Matrix4::new(out)
    }
}

impl Index<usize> for Matrix4 {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &f32 {
        &self.m[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.m[index]
    }
}

impl From<[f32; 16]> for Matrix4 {
    fn from(m: [f32; 16]) -> Self {
        Self::new(m)
    }
}

impl From<Matrix4> for [f32; 16] {
    fn from(m: Matrix4) -> Self {
        m.m
    }
}

impl From<Mat4> for Matrix4 {
    fn from(m: Mat4) -> Self {
        Self::new(m.to_cols_array())
    }
}

impl From<Matrix4> for Mat4 {
    fn from(m: Matrix4) -> Self {
        Mat4::from_cols_array(&m.m)
    }
}

impl IntoIterator for Matrix4 {
    type Item = f32;
    type IntoIter = std::array::IntoIter<f32, 16>;

    fn into_iter(self) -> Self::IntoIter {
        self.m.into_iter()
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.m.chunks_exact(4).enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            super::write_components(f, row)?;
        }
        Ok(())
    }
}
