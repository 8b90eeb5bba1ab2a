use crate::error::{LinalgError, Result};
use crate::matrix::MatMN;
use crate::vector::VecN;
use core::convert::TryFrom;
use core::fmt;
use core::ops::{Index, IndexMut};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Heap-allocated dense vector. The length is fixed at construction; shape
/// compatibility is checked at run time by every operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VecX(Vec<f32>);

impl VecX {
    pub fn zero(len: usize) -> VecX {
        Self(vec![0.0; len])
    }

    #[inline]
    pub fn from_vec(data: Vec<f32>) -> VecX {
        Self(data)
    }

    #[inline]
    pub fn from_slice(data: &[f32]) -> VecX {
        Self(data.to_vec())
    }

    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> VecX {
        let mut v = Self::zero(len);
        v.set_random(rng);
        v
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<f32> {
        self.0
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfRange {
                index,
                len: self.0.len(),
            })
    }

    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        let len = self.0.len();
        match self.0.get_mut(index) {
            Some(element) => {
                *element = value;
                Ok(())
            }
            None => Err(LinalgError::IndexOutOfRange { index, len }),
        }
    }

    pub fn x(&self) -> Result<f32> {
        self.get(0)
    }

    pub fn y(&self) -> Result<f32> {
        self.get(1)
    }

    pub fn z(&self) -> Result<f32> {
        self.get(2)
    }

    pub fn w(&self) -> Result<f32> {
        self.get(3)
    }

    pub fn set_zero(&mut self) {
        for element in self.0.iter_mut() {
            *element = 0.0;
        }
    }

    /// Each element is drawn independently from [-1, 1].
    pub fn set_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for element in self.0.iter_mut() {
            *element = rng.gen_range(-1.0..=1.0);
        }
    }

    pub fn dot(&self, rhs: &VecX) -> Result<f32> {
        if self.len() != rhs.len() {
            return Err(LinalgError::dimension(self.len(), rhs.len()));
        }
        Ok(self
            .0
            .iter()
            .zip(rhs.0.iter())
            .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs))
    }

    pub fn add(&self, rhs: &VecX) -> Result<VecX> {
        if self.len() != rhs.len() {
            return Err(LinalgError::dimension(self.len(), rhs.len()));
        }
        Ok(Self(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(&lhs, &rhs)| lhs + rhs)
                .collect(),
        ))
    }

    pub fn sub(&self, rhs: &VecX) -> Result<VecX> {
        if self.len() != rhs.len() {
            return Err(LinalgError::dimension(self.len(), rhs.len()));
        }
        Ok(Self(
            self.0
                .iter()
                .zip(rhs.0.iter())
                .map(|(&lhs, &rhs)| lhs - rhs)
                .collect(),
        ))
    }

    pub fn scale(&self, scalar: f32) -> VecX {
        Self(self.0.iter().map(|&element| element * scalar).collect())
    }

    /// Cross product, defined for length-3 vectors only.
    pub fn cross(&self, rhs: &VecX) -> Result<VecX> {
        if self.len() != 3 || rhs.len() != 3 {
            return Err(LinalgError::dimension(
                3,
                if self.len() != 3 {
                    self.len()
                } else {
                    rhs.len()
                },
            ));
        }
        Ok(Self(vec![
            self.0[1] * rhs.0[2] - self.0[2] * rhs.0[1],
            self.0[2] * rhs.0[0] - self.0[0] * rhs.0[2],
            self.0[0] * rhs.0[1] - self.0[1] * rhs.0[0],
        ]))
    }

    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.0.iter().fold(0.0, |acc, &element| acc + element * element)
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way. A zero-norm input
    /// fails with `DegenerateVector` rather than producing NaN elements.
    pub fn normalized(&self) -> Result<VecX> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(LinalgError::DegenerateVector);
        }
        Ok(self.scale(norm.recip()))
    }

    /// In-place variant of [`VecX::normalized`]. The vector is left
    /// unchanged on failure.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl Index<usize> for VecX {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for VecX {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> From<VecN<N>> for VecX {
    fn from(v: VecN<N>) -> Self {
        Self(v.as_slice().to_vec())
    }
}

impl<const N: usize> TryFrom<VecX> for VecN<N> {
    type Error = LinalgError;
    fn try_from(v: VecX) -> Result<Self> {
        VecN::from_slice(&v.0)
    }
}

impl fmt::Display for VecX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, element) in self.0.iter().enumerate() {
            if n > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

/// Heap-allocated dense matrix in row-major order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatX {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl MatX {
    pub fn zero(rows: usize, cols: usize) -> MatX {
        MatX {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn identity(dimension: usize) -> MatX {
        let mut mat = MatX::zero(dimension, dimension);
        // square by construction, cannot fail
        let _ = mat.set_identity();
        mat
    }

    /// Builds from a row-major buffer. Fails when the element count does not
    /// match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<MatX> {
        if data.len() != rows * cols {
            return Err(LinalgError::dimension(rows * cols, data.len()));
        }
        Ok(MatX { data, rows, cols })
    }

    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> MatX {
        let mut mat = MatX::zero(rows, cols);
        mat.set_random(rng);
        mat
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        self.check_index(row, col)?;
        Ok(self.data[row * self.cols + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        self.check_index(row, col)?;
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfRange {
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(LinalgError::IndexOutOfRange {
                index: col,
                len: self.cols,
            });
        }
        Ok(())
    }

    pub fn set_zero(&mut self) {
        for element in self.data.iter_mut() {
            *element = 0.0;
        }
    }

    /// Diagonal to 1, everything else to 0. Fails on non-square shapes.
    pub fn set_identity(&mut self) -> Result<()> {
        if self.rows != self.cols {
            return Err(LinalgError::dimension(
                format!("{0}x{0}", self.rows),
                format!("{}x{}", self.rows, self.cols),
            ));
        }
        self.set_zero();
        for i in 0..self.rows {
            self.data[i * self.cols + i] = 1.0;
        }
        Ok(())
    }

    /// Each element is drawn independently from [-1, 1].
    pub fn set_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for element in self.data.iter_mut() {
            *element = rng.gen_range(-1.0..=1.0);
        }
    }

    pub fn transpose(&self) -> MatX {
        let mut mat = MatX::zero(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                mat.data[j * mat.cols + i] = self.data[i * self.cols + j];
            }
        }
        mat
    }

    pub fn add(&self, rhs: &MatX) -> Result<MatX> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::dimension(
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", rhs.rows, rhs.cols),
            ));
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&lhs, &rhs)| lhs + rhs)
            .collect();
        MatX::from_vec(self.rows, self.cols, data)
    }

    pub fn sub(&self, rhs: &MatX) -> Result<MatX> {
        if self.shape() != rhs.shape() {
            return Err(LinalgError::dimension(
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", rhs.rows, rhs.cols),
            ));
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&lhs, &rhs)| lhs - rhs)
            .collect();
        MatX::from_vec(self.rows, self.cols, data)
    }

    pub fn scale(&self, scalar: f32) -> MatX {
        MatX {
            data: self.data.iter().map(|&element| element * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Standard matrix product. Fails unless `self.cols == rhs.rows`.
    pub fn mul_mat(&self, rhs: &MatX) -> Result<MatX> {
        if self.cols != rhs.rows {
            return Err(LinalgError::dimension(
                format!("{} rows", self.cols),
                format!("{} rows", rhs.rows),
            ));
        }
        let mut mat = MatX::zero(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * rhs.data[k * rhs.cols + j];
                }
                mat.data[i * mat.cols + j] = acc;
            }
        }
        Ok(mat)
    }

    /// Matrix-vector product. Fails unless `self.cols == rhs.len()`.
    pub fn mul_vec(&self, rhs: &VecX) -> Result<VecX> {
        if self.cols != rhs.len() {
            return Err(LinalgError::dimension(self.cols, rhs.len()));
        }
        let mut v = VecX::zero(self.rows);
        for i in 0..self.rows {
            let row = &self.data[i * self.cols..(i + 1) * self.cols];
            v.0[i] = row
                .iter()
                .zip(rhs.0.iter())
                .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs);
        }
        Ok(v)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Index<(usize, usize)> for MatX {
    type Output = f32;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for MatX {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

impl<const M: usize, const N: usize> From<MatMN<M, N>> for MatX {
    fn from(m: MatMN<M, N>) -> Self {
        let mut data = Vec::with_capacity(M * N);
        for row in m.rows.iter() {
            data.extend_from_slice(row.as_slice());
        }
        MatX {
            data,
            rows: M,
            cols: N,
        }
    }
}

impl<const M: usize, const N: usize> TryFrom<MatX> for MatMN<M, N> {
    type Error = LinalgError;
    fn try_from(m: MatX) -> Result<Self> {
        if m.shape() != (M, N) {
            return Err(LinalgError::dimension(
                format!("{}x{}", M, N),
                format!("{}x{}", m.rows, m.cols),
            ));
        }
        MatMN::from_slice(&m.data)
    }
}

impl fmt::Display for MatX {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                f.write_str("\n")?;
            }
            for j in 0..self.cols {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix3, Vector3};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_dot_commutes() {
        let mut rng = Pcg32::seed_from_u64(37);
        for _ in 0..16 {
            let a = VecX::random(5, &mut rng);
            let b = VecX::random(5, &mut rng);
            assert_eq!(a.dot(&b), b.dot(&a));
        }
    }

    #[test]
    fn test_dot_checks_length() {
        let a = VecX::zero(3);
        let b = VecX::zero(4);
        assert!(matches!(a.dot(&b), Err(LinalgError::Dimension { .. })));
    }

    #[test]
    fn test_cross_scenario() {
        let x = VecX::from_slice(&[1.0, 0.0, 0.0]);
        let y = VecX::from_slice(&[0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y).unwrap(), VecX::from_slice(&[0.0, 0.0, 1.0]));
        assert_eq!(x.dot(&y), Ok(0.0));
        assert_eq!(x.norm(), 1.0);
        assert_eq!(y.norm(), 1.0);
    }

    #[test]
    fn test_cross_requires_length_three() {
        let a = VecX::zero(4);
        let b = VecX::zero(4);
        assert!(matches!(a.cross(&b), Err(LinalgError::Dimension { .. })));
        let c = VecX::zero(3);
        assert!(matches!(c.cross(&a), Err(LinalgError::Dimension { .. })));
    }

    #[test]
    fn test_cross_anti_commutes() {
        let mut rng = Pcg32::seed_from_u64(41);
        for _ in 0..16 {
            let a = VecX::random(3, &mut rng);
            let b = VecX::random(3, &mut rng);
            assert_eq!(a.cross(&b).unwrap(), b.cross(&a).unwrap().scale(-1.0));
        }
    }

    #[test]
    fn test_normalized_has_unit_norm() {
        let mut rng = Pcg32::seed_from_u64(43);
        for _ in 0..16 {
            let a = VecX::random(6, &mut rng);
            if a.norm() == 0.0 {
                continue;
            }
            assert!((a.normalized().unwrap().norm() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        let mut zero = VecX::zero(3);
        assert_eq!(zero.normalized(), Err(LinalgError::DegenerateVector));
        assert_eq!(zero.normalize(), Err(LinalgError::DegenerateVector));
        assert_eq!(zero, VecX::zero(3));
    }

    #[test]
    fn test_named_accessors_check_length() {
        let v = VecX::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.x(), Ok(1.0));
        assert_eq!(v.z(), Ok(3.0));
        assert_eq!(
            v.w(),
            Err(LinalgError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_vector_add_sub_scale() {
        let a = VecX::from_slice(&[1.0, 2.0]);
        let b = VecX::from_slice(&[3.0, 4.0]);
        assert_eq!(a.add(&b).unwrap(), VecX::from_slice(&[4.0, 6.0]));
        assert_eq!(b.sub(&a).unwrap(), VecX::from_slice(&[2.0, 2.0]));
        assert_eq!(a.scale(2.0), VecX::from_slice(&[2.0, 4.0]));
        assert!(matches!(
            a.add(&VecX::zero(3)),
            Err(LinalgError::Dimension { .. })
        ));
    }

    #[test]
    fn test_from_vec_checks_element_count() {
        assert!(MatX::from_vec(2, 2, vec![1.0; 4]).is_ok());
        assert!(matches!(
            MatX::from_vec(2, 2, vec![1.0; 5]),
            Err(LinalgError::Dimension { .. })
        ));
    }

    #[test]
    fn test_identity_is_multiplicative_unit() {
        let mut rng = Pcg32::seed_from_u64(47);
        let m = MatX::random(3, 3, &mut rng);
        let i = MatX::identity(3);
        assert_eq!(i.mul_mat(&m).unwrap(), m);
        assert_eq!(m.mul_mat(&i).unwrap(), m);
    }

    #[test]
    fn test_identity_times_vector_is_exact() {
        let v = VecX::from_slice(&[1.5, -2.25, 0.125]);
        assert_eq!(MatX::identity(3).mul_vec(&v).unwrap(), v);
    }

    #[test]
    fn test_set_identity_requires_square() {
        let mut m = MatX::zero(2, 3);
        assert!(matches!(
            m.set_identity(),
            Err(LinalgError::Dimension { .. })
        ));
        let mut square = MatX::random(3, 3, &mut Pcg32::seed_from_u64(53));
        square.set_identity().unwrap();
        assert_eq!(square, MatX::identity(3));
    }

    #[test]
    fn test_transpose_of_product() {
        let mut rng = Pcg32::seed_from_u64(59);
        let a = MatX::random(3, 4, &mut rng);
        let b = MatX::random(4, 2, &mut rng);
        let lhs = a.mul_mat(&b).unwrap().transpose();
        let rhs = b.transpose().mul_mat(&a.transpose()).unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_mul_shape_checks() {
        let a = MatX::zero(2, 3);
        let b = MatX::zero(2, 3);
        assert!(matches!(a.mul_mat(&b), Err(LinalgError::Dimension { .. })));
        assert!(matches!(
            a.mul_vec(&VecX::zero(2)),
            Err(LinalgError::Dimension { .. })
        ));
    }

    #[test]
    fn test_checked_access() {
        let mut m = MatX::zero(2, 2);
        m.set(1, 1, 4.0).unwrap();
        assert_eq!(m.get(1, 1), Ok(4.0));
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(
            m.get(2, 0),
            Err(LinalgError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            m.set(0, 5, 1.0),
            Err(LinalgError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_fixed_dynamic_conversions() {
        use core::convert::TryInto;

        let fixed = Vector3::new(1.0, 2.0, 3.0);
        let dynamic: VecX = fixed.into();
        assert_eq!(dynamic.len(), 3);
        let back: Vector3 = dynamic.clone().try_into().unwrap();
        assert_eq!(back, fixed);
        // a 4-element buffer does not fit a 3-vector
        let wide = VecX::zero(4);
        let narrow: core::result::Result<Vector3, _> = wide.try_into();
        assert!(matches!(narrow, Err(LinalgError::Dimension { .. })));

        let m: MatX = Matrix3::identity().into();
        assert_eq!(m, MatX::identity(3));
        let back: Matrix3 = m.try_into().unwrap();
        assert_eq!(back, Matrix3::identity());
    }

    #[test]
    fn test_display() {
        let m = MatX::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4");
        assert_eq!(VecX::from_slice(&[1.0, -2.5]).to_string(), "1 -2.5");
    }

    #[test]
    fn test_serde_round_trip() {
        let mut rng = Pcg32::seed_from_u64(61);
        let m = MatX::random(2, 3, &mut rng);
        let json = serde_json::to_string(&m).unwrap();
        let back: MatX = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
