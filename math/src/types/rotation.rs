use std::{
    fmt::{Display, Formatter},
    ops::{Index, Mul},
};

use super::{Matrix3, Matrix4, Vector3};
use crate::error::{MathError, MathResult};

/// Tolerance for accepting an arbitrary `Matrix3` as a rotation. Looser than
/// `EPS` since products of rounded trig values drift by a few ulps per column.
pub const ORTHONORMAL_TOLERANCE: f32 = 1e-4;


/// A `Matrix3` known to be orthonormal with `det == 1`.
///
/// Only rotation builders and quaternion conversion produce one, which is what
/// makes the transpose-as-inverse fast path in [`RotationMatrix3::inv`] sound.
/// Matrices of unknown provenance go through `TryFrom<Matrix3>` or, when the
/// caller vouches for them, [`RotationMatrix3::new_unchecked`].
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationMatrix3(Matrix3);

impl RotationMatrix3 {
    #[inline]
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    /// Skips the orthonormality check outside of debug builds.
    #[inline]
    pub fn new_unchecked(m: Matrix3) -> Self {
        debug_assert!(is_rotation(m), "Matrix3 is not a valid rotation matrix!");
        Self(m)
    }

    #[inline]
    pub(crate) fn from_raw(m: Matrix3) -> Self {
        Self(m)
    }

    #[inline]
    pub fn matrix(self) -> Matrix3 {
        self.0
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self(self.0.transpose())
    }

    /// Transpose, the inverse of an orthonormal matrix.
    #[inline]
    pub fn inv(self) -> Self {
        self.transpose()
    }
}

#[inline]
fn is_rotation(m: Matrix3) -> bool {
    let unit = |v: Vector3| (v.length_squared() - 1.0).abs() < ORTHONORMAL_TOLERANCE;
    let orthogonal = |a: Vector3, b: Vector3| (a * b).abs() < ORTHONORMAL_TOLERANCE;
    m.is_valid()
        && unit(m.i)
        && unit(m.j)
        && unit(m.k)
        && orthogonal(m.i, m.j)
        && orthogonal(m.j, m.k)
        && orthogonal(m.k, m.i)
        && m.det() > 0.0
}

impl TryFrom<Matrix3> for RotationMatrix3 {
    type Error = MathError;

    fn try_from(value: Matrix3) -> MathResult<Self> {
        if is_rotation(value) {
            Ok(Self(value))
        } else {
            Err(MathError::NotOrthonormal)
        }
    }
}

impl From<RotationMatrix3> for Matrix3 {
    #[inline]
    fn from(value: RotationMatrix3) -> Self {
        value.0
    }
}

impl From<RotationMatrix3> for Matrix4 {
    #[inline]
    fn from(value: RotationMatrix3) -> Self {
        value.0.into()
    }
}

impl Mul<Vector3> for RotationMatrix3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        self.0 * rhs
    }
}

impl Mul<RotationMatrix3> for RotationMatrix3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: RotationMatrix3) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<Matrix3> for RotationMatrix3 {
    type Output = Matrix3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Self::Output {
        self.0 * rhs
    }
}

impl Index<usize> for RotationMatrix3 {
    type Output = Vector3;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Display for RotationMatrix3 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
