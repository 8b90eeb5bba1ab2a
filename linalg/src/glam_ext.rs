//! Conversions to and from glam for feeding results into graphics code.
//! glam stores matrices column-major, so the matrix conversions reorder
//! elements explicitly.

use crate::matrix::{Matrix3, Matrix4};
use crate::vector::{Vector3, Vector4};
use glam::{Mat3, Mat4, Vec3, Vec4};

impl From<Vector3> for Vec3 {
    #[inline]
    fn from(v: Vector3) -> Self {
        Vec3::new(v.x(), v.y(), v.z())
    }
}

impl From<Vec3> for Vector3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector4> for Vec4 {
    #[inline]
    fn from(v: Vector4) -> Self {
        Vec4::new(v.x(), v.y(), v.z(), v.w())
    }
}

impl From<Vec4> for Vector4 {
    #[inline]
    fn from(v: Vec4) -> Self {
        Vector4::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Matrix3> for Mat3 {
    fn from(m: Matrix3) -> Self {
        let mut cols = [0.0; 9];
        for r in 0..3 {
            for c in 0..3 {
                cols[c * 3 + r] = m.rows[r][c];
            }
        }
        Mat3::from_cols_array(&cols)
    }
}

impl From<Mat3> for Matrix3 {
    fn from(m: Mat3) -> Self {
        let mut mat = Matrix3::zero();
        for c in 0..3 {
            let col = m.col(c);
            for r in 0..3 {
                mat.rows[r][c] = col[r];
            }
        }
        mat
    }
}

impl From<Matrix4> for Mat4 {
    fn from(m: Matrix4) -> Self {
        let mut cols = [0.0; 16];
        for r in 0..4 {
            for c in 0..4 {
                cols[c * 4 + r] = m.rows[r][c];
            }
        }
        Mat4::from_cols_array(&cols)
    }
}

impl From<Mat4> for Matrix4 {
    fn from(m: Mat4) -> Self {
        let mut mat = Matrix4::zero();
        for c in 0..4 {
            let col = m.col(c);
            for r in 0..4 {
                mat.rows[r][c] = col[r];
            }
        }
        mat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_round_trips_are_exact() {
        let v3 = Vector3::new(1.0, -2.5, 0.125);
        assert_eq!(Vector3::from(Vec3::from(v3)), v3);
        let v4 = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vector4::from(Vec4::from(v4)), v4);
    }

    #[test]
    fn test_matrix_layout() {
        // rows of ours become columns of the transposed glam layout
        let m = Matrix3::from_rows([[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]);
        let g = Mat3::from(m);
        assert_eq!(g.col(0), Vec3::new(1., 4., 7.));
        assert_eq!(g.row(1), Vec3::new(4., 5., 6.));
        assert_eq!(Matrix3::from(g), m);
    }

    #[test]
    fn test_identity_maps_to_identity() {
        assert_eq!(Mat4::from(Matrix4::identity()), Mat4::IDENTITY);
        assert_eq!(Matrix4::from(Mat4::IDENTITY), Matrix4::identity());
    }
}
