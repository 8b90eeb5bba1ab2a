use crate::dot;
use crate::error::{LinalgError, Result};
use crate::vector::VecN;
use core::fmt;
use core::ops::{Add, Mul, Sub};
use rand::Rng;

/// Fixed-size dense matrix of `f32`, stored as an array of row vectors.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MatMN<const M: usize, const N: usize> {
    pub rows: [VecN<N>; M],
}

/// Square matrix of arity `N`.
pub type MatN<const N: usize> = MatMN<N, N>;

pub type Matrix3 = MatN<3>;
pub type Matrix4 = MatN<4>;

impl<const M: usize, const N: usize> MatMN<M, N> {
    #[inline]
    pub const fn zero() -> Self {
        MatMN {
            rows: [VecN::zero(); M],
        }
    }

    #[inline]
    pub fn from_rows(rows: [[f32; N]; M]) -> Self {
        let mut mat = MatMN::zero();
        for m in 0..M {
            mat.rows[m] = VecN::from_array(rows[m]);
        }
        mat
    }

    /// Builds from a row-major slice. Fails when the element count does not
    /// match the matrix shape.
    pub fn from_slice(elements: &[f32]) -> Result<Self> {
        if elements.len() != M * N {
            return Err(LinalgError::dimension(M * N, elements.len()));
        }
        let mut mat = MatMN::zero();
        for m in 0..M {
            mat.rows[m] = VecN::from_slice(&elements[m * N..(m + 1) * N])?;
        }
        Ok(mat)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut mat = MatMN::zero();
        mat.set_random(rng);
        mat
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        M
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        N
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        if row >= M {
            return Err(LinalgError::IndexOutOfRange { index: row, len: M });
        }
        self.rows[row].get(col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        if row >= M {
            return Err(LinalgError::IndexOutOfRange { index: row, len: M });
        }
        self.rows[row].set(col, value)
    }

    pub fn set_zero(&mut self) {
        self.rows = [VecN::zero(); M];
    }

    pub fn set_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for row in self.rows.iter_mut() {
            row.set_random(rng);
        }
    }

    #[inline]
    pub fn transpose(&self) -> MatMN<N, M> {
        let mut mat = MatMN::zero();
        for m in 0..M {
            for n in 0..N {
                mat.rows[n][m] = self.rows[m][n];
            }
        }
        mat
    }
}

impl<const N: usize> MatN<N> {
    pub fn identity() -> Self {
        let mut mat = MatN::zero();
        mat.set_identity();
        mat
    }

    /// Diagonal to 1, everything else to 0. Square matrices only; the
    /// rectangular case is rejected at compile time by the `MatN` shape.
    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..N {
            self.rows[i][i] = 1.0;
        }
    }
}

impl<const M: usize, const N: usize> Default for MatMN<M, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const M: usize, const N: usize> From<[[f32; N]; M]> for MatMN<M, N> {
    #[inline]
    fn from(rows: [[f32; N]; M]) -> Self {
        Self::from_rows(rows)
    }
}

impl<const M: usize, const N: usize> From<&[[f32; N]; M]> for MatMN<M, N> {
    #[inline]
    fn from(rows: &[[f32; N]; M]) -> Self {
        Self::from_rows(*rows)
    }
}

impl<const M: usize, const N: usize> Add<MatMN<M, N>> for MatMN<M, N> {
    type Output = MatMN<M, N>;
    #[inline]
    fn add(self, rhs: MatMN<M, N>) -> Self::Output {
        let mut tmp = self;
        for m in 0..M {
            tmp.rows[m] += rhs.rows[m];
        }
        tmp
    }
}

impl<const M: usize, const N: usize> Sub<MatMN<M, N>> for MatMN<M, N> {
    type Output = MatMN<M, N>;
    #[inline]
    fn sub(self, rhs: MatMN<M, N>) -> Self::Output {
        let mut tmp = self;
        for m in 0..M {
            tmp.rows[m] -= rhs.rows[m];
        }
        tmp
    }
}

impl<const M: usize, const N: usize> Mul<f32> for MatMN<M, N> {
    type Output = MatMN<M, N>;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        let mut tmp = self;
        for m in 0..M {
            tmp.rows[m] = tmp.rows[m] * rhs;
        }
        tmp
    }
}

impl<const M: usize, const N: usize> Mul<MatMN<M, N>> for f32 {
    type Output = MatMN<M, N>;
    #[inline]
    fn mul(self, rhs: MatMN<M, N>) -> Self::Output {
        rhs * self
    }
}

impl<const M: usize, const N: usize> Mul<VecN<N>> for MatMN<M, N> {
    type Output = VecN<M>;
    #[inline]
    fn mul(self, rhs: VecN<N>) -> Self::Output {
        let mut tmp = VecN::zero();
        for m in 0..M {
            tmp[m] = dot(&rhs, &self.rows[m]);
        }
        tmp
    }
}

impl<const M: usize, const P: usize, const N: usize> Mul<MatMN<P, N>> for MatMN<M, P> {
    type Output = MatMN<M, N>;
    #[inline]
    fn mul(self, rhs: MatMN<P, N>) -> Self::Output {
        let rhs_transpose = rhs.transpose();

        let mut tmp = MatMN::zero();
        for m in 0..M {
            for n in 0..N {
                tmp.rows[m][n] = dot(&self.rows[m], &rhs_transpose.rows[n]);
            }
        }
        tmp
    }
}

impl<const M: usize, const N: usize> fmt::Display for MatMN<M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (m, row) in self.rows.iter().enumerate() {
            if m > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
