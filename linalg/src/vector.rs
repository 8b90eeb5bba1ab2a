use crate::dot;
use crate::error::{LinalgError, Result};
use core::fmt;
use core::ops::{Add, AddAssign, Deref, DerefMut, Mul, Neg, Sub, SubAssign};
use rand::Rng;

/// Fixed-arity dense vector of `f32`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VecN<const N: usize>(pub(crate) [f32; N]);

pub type Vector3 = VecN<3>;
pub type Vector4 = VecN<4>;

impl<const N: usize> VecN<N> {
    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; N])
    }

    #[inline]
    pub const fn from_array(elements: [f32; N]) -> Self {
        Self(elements)
    }

    /// Fails when the slice length does not match the vector arity, e.g.
    /// assigning a 4-element buffer into a `Vector3`.
    pub fn from_slice(elements: &[f32]) -> Result<Self> {
        if elements.len() != N {
            return Err(LinalgError::dimension(N, elements.len()));
        }
        let mut v = Self::zero();
        v.0.copy_from_slice(elements);
        Ok(v)
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut v = Self::zero();
        v.set_random(rng);
        v
    }

    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    pub fn get(&self, index: usize) -> Result<f32> {
        self.0
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfRange { index, len: N })
    }

    pub fn set(&mut self, index: usize, value: f32) -> Result<()> {
        match self.0.get_mut(index) {
            Some(element) => {
                *element = value;
                Ok(())
            }
            None => Err(LinalgError::IndexOutOfRange { index, len: N }),
        }
    }

    pub fn set_zero(&mut self) {
        self.0 = [0.0; N];
    }

    /// Each element is drawn independently from [-1, 1]. The distribution is
    /// a demonstration fill, not a contract.
    pub fn set_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for element in self.0.iter_mut() {
            *element = rng.gen_range(-1.0..=1.0);
        }
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> f32 {
        dot(&self.0, &rhs.0)
    }

    #[inline]
    pub fn norm_squared(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        self.norm_squared().sqrt()
    }

    /// Returns the unit vector pointing the same way. A zero-norm input
    /// fails with `DegenerateVector` rather than producing NaN elements.
    pub fn normalized(&self) -> Result<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(LinalgError::DegenerateVector);
        }
        Ok(*self * norm.recip())
    }

    /// In-place variant of [`VecN::normalized`]. The vector is left
    /// unchanged on failure.
    pub fn normalize(&mut self) -> Result<()> {
        *self = self.normalized()?;
        Ok(())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self([x, y, z])
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    /// Cross product, defined for arity 3 only.
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn z(&self) -> f32 {
        self.0[2]
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.0[3]
    }
}

impl<const N: usize> Default for VecN<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[f32; N]> for VecN<N> {
    #[inline]
    fn from(elements: [f32; N]) -> Self {
        Self(elements)
    }
}

impl<const N: usize> Deref for VecN<N> {
    type Target = [f32; N];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for VecN<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Add<VecN<N>> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn add(self, rhs: VecN<N>) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] += rhs[n];
        }
        tmp
    }
}

impl<const N: usize> Sub<VecN<N>> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn sub(self, rhs: VecN<N>) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] -= rhs[n];
        }
        tmp
    }
}

impl<const N: usize> AddAssign<VecN<N>> for VecN<N> {
    #[inline]
    fn add_assign(&mut self, rhs: VecN<N>) {
        for n in 0..N {
            self[n] += rhs[n];
        }
    }
}

impl<const N: usize> SubAssign<VecN<N>> for VecN<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: VecN<N>) {
        for n in 0..N {
            self[n] -= rhs[n];
        }
    }
}

impl<const N: usize> Mul<f32> for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        let mut tmp = self;
        for n in 0..N {
            tmp[n] *= rhs;
        }
        tmp
    }
}

impl<const N: usize> Mul<VecN<N>> for f32 {
    type Output = VecN<N>;
    #[inline]
    fn mul(self, rhs: VecN<N>) -> Self::Output {
        rhs * self
    }
}

impl<const N: usize> Neg for VecN<N> {
    type Output = VecN<N>;
    #[inline]
    fn neg(self) -> Self::Output {
        self * -1.0
    }
}

impl<const N: usize> fmt::Display for VecN<N> {
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
