pub mod dynamic;
pub mod error;
mod glam_ext;
mod matrix;
mod vector;

pub use dynamic::{MatX, VecX};
pub use error::{LinalgError, Result};
pub use matrix::{MatMN, MatN, Matrix3, Matrix4};
pub use vector::{VecN, Vector3, Vector4};

pub(crate) fn dot<const N: usize>(a: &[f32; N], b: &[f32; N]) -> f32 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs)
}
