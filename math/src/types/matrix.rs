use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{Display, Formatter},
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

use super::{Vector3, Vector4, EPS};
use crate::error::{read_le_f32s, MathResult};

#[cfg(test)]
mod test_matrix_3 {
    use super::{Matrix3, Vector3};
    use crate::error::MathError;

    fn get_matrix_3() -> Matrix3 {
        Matrix3::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 4.0, 5.0),
            Vector3::new(0.0, 0.0, 6.0),
        )
    }

    fn get_matrix_3_transposed() -> Matrix3 {
        Matrix3::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(2.0, 4.0, 0.0),
            Vector3::new(3.0, 5.0, 6.0),
        )
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Matrix3::default(), Matrix3::identity());
    }

    #[test]
    fn mul() {
        let m = get_matrix_3();
        assert!(m.approx_equal(m * Matrix3::identity()));
        assert!(m.approx_equal(Matrix3::identity() * m));
    }

    #[test]
    fn mul_vector() {
        let m = get_matrix_3();
        let v = Vector3::new(1.0, -1.0, 2.0);
        assert!((m * v).approx_equal(Vector3::new(1.0, -2.0, 10.0)));
        assert!((Matrix3::identity() * v).approx_equal(v));
    }

    #[test]
    fn trace() {
        let m = get_matrix_3();
        assert_eq!(m.trace(), 11.0);
    }

    #[test]
    fn det() {
        assert_eq!(get_matrix_3().det(), 24.0);
    }

    #[test]
    fn transpose() {
        let m = get_matrix_3();
        let m_t = get_matrix_3_transposed();
        assert!(m.transpose().approx_equal(m_t))
    }

    #[test]
    fn inverse() {
        let m = get_matrix_3();
        let m_inv = m.inv();
        assert!(Matrix3::identity().approx_equal_eps(m * m_inv, 1e-5));
        assert!(Matrix3::identity().approx_equal_eps(m_inv * m, 1e-5));
    }

    #[test]
    fn inverse_singular() {
        let m = Matrix3::new(Vector3::x(), Vector3::x(), Vector3::z());
        assert_eq!(m.inv(), Matrix3::identity());
    }

    #[test]
    fn index() {
        let mut m = get_matrix_3();
        assert_eq!(m[1], Vector3::new(0.0, 4.0, 5.0));
        m[2][0] = 9.0;
        assert_eq!(m.k.x, 9.0);
    }

    #[test]
    fn inverse_small_scale() {
        // det is 2.4e-8, below EPS on its own
        let m = 0.001 * get_matrix_3();
        let m_inv = m.inv();
        assert_ne!(m_inv, Matrix3::identity());
        assert!(Matrix3::identity().approx_equal_eps(m * m_inv, 1e-4));
    }

    #[test]
    fn from_le_bytes() {
        let m = get_matrix_3();
        let bytes: Vec<u8> = [m.i, m.j, m.k]
            .iter()
            .flat_map(|c| [c.x, c.y, c.z])
            .flat_map(|v| v.to_le_bytes())
            .collect();
        assert_eq!(Matrix3::try_from_le_bytes(&bytes), Ok(m));
        assert_eq!(
            Matrix3::try_from_le_bytes(&bytes[..32]),
            Err(MathError::InsufficientBytes {
                expected: 36,
                found: 32
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", get_matrix_3()), "[ 1, 0, 0 ]\n[ 2, 4, 0 ]\n[ 3, 5, 6 ]\n");
    }
}

/// Column-major, `i`, `j`, `k` are the columns.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Matrix3 {
    pub i: Vector3,
    pub j: Vector3,
    pub k: Vector3,
}

impl Default for Matrix3 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Neg for Matrix3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            i: -self.i,
            j: -self.j,
            k: -self.k,
        }
    }
}

impl Add for Matrix3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
        }
    }
}

impl Sub for Matrix3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
        }
    }
}

impl Mul<Matrix3> for f32 {
    type Output = Matrix3;
    #[inline]
    fn mul(self, rhs: Matrix3) -> Self::Output {
        Matrix3 {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
        }
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs.x * self.i + rhs.y * self.j + rhs.z * self.k
    }
}

impl Mul<Matrix3> for Matrix3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
        }
    }
}

impl Index<usize> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 3, "Invalid index {} for Matrix3!", index);
        unsafe {
            (&self.i as *const Vector3)
                .add(index)
                .as_ref()
                .unwrap_unchecked()
        }
    }
}

impl IndexMut<usize> for Matrix3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 3, "Invalid index {} for Matrix3!", index);
        unsafe {
            (&mut self.i as *mut Vector3)
                .add(index)
                .as_mut()
                .unwrap_unchecked()
        }
    }
}

impl From<Matrix4> for Matrix3 {
    #[inline]
    fn from(value: Matrix4) -> Self {
        value.upper3()
    }
}

impl Display for Matrix3 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for row in 0..3 {
            writeln!(f, "[ {}, {}, {} ]", self.i[row], self.j[row], self.k[row])?;
        }
        Ok(())
    }
}

impl Matrix3 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        let v = read_le_f32s::<9>(bytes)?;
        Ok(Self {
            i: Vector3::new(v[0], v[1], v[2]),
            j: Vector3::new(v[3], v[4], v[5]),
            k: Vector3::new(v[6], v[7], v[8]),
        })
    }

    #[inline]
    pub fn new(i: Vector3, j: Vector3, k: Vector3) -> Self {
        Self { i, j, k }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            i: Vector3::x(),
            j: Vector3::y(),
            k: Vector3::z(),
        }
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: Vector3 {
                x: self.i.x,
                y: self.j.x,
                z: self.k.x,
            },
            j: Vector3 {
                x: self.i.y,
                y: self.j.y,
                z: self.k.y,
            },
            k: Vector3 {
                x: self.i.z,
                y: self.j.z,
                z: self.k.z,
            },
        }
    }

    #[inline]
    pub fn det(self) -> f32 {
        self.i * self.j.cross(self.k)
    }

    /// General inverse. Returns identity when `|det|` is within `EPS` of zero
    /// relative to the product of the column lengths, so uniformly scaled
    /// matrices invert at any scale.
    ///
    /// For matrices known to be pure rotations prefer
    /// [`RotationMatrix3::inv`](super::RotationMatrix3::inv).
    #[inline]
    pub fn inv(self) -> Self {
        let det = self.det();
        let volume = self.i.length() * self.j.length() * self.k.length();
        if det.abs() <= EPS * volume {
            return Self::identity();
        }
        let cofactors = Matrix3::new(
            self.j.cross(self.k),
            self.k.cross(self.i),
            self.i.cross(self.j),
        );
        det.recip() * cofactors.transpose()
    }

    #[inline]
    pub fn trace(self) -> f32 {
        self.i.x + self.j.y + self.k.z
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid() && self.k.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.approx_equal_eps(rhs, EPS)
    }

    #[inline]
    pub fn approx_equal_eps(self, rhs: Self, eps: f32) -> bool {
        self.i.approx_equal_eps(rhs.i, eps)
            && self.j.approx_equal_eps(rhs.j, eps)
            && self.k.approx_equal_eps(rhs.k, eps)
    }
}

#[cfg(test)]
mod test_matrix_4 {
    use super::{Matrix3, Matrix4, Vector3, Vector4};

    fn get_matrix_4() -> Matrix4 {
        Matrix4::new(
            Vector4::new(1.0, 2.0, 3.0, 4.0),
            Vector4::new(0.0, 5.0, 6.0, 7.0),
            Vector4::new(0.0, 0.0, 8.0, 9.0),
            Vector4::new(0.0, 0.0, 0.0, 10.0),
        )
    }

    fn get_matrix_4_transposed() -> Matrix4 {
        Matrix4::new(
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(2.0, 5.0, 0.0, 0.0),
            Vector4::new(3.0, 6.0, 8.0, 0.0),
            Vector4::new(4.0, 7.0, 9.0, 10.0),
        )
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(Matrix4::default(), Matrix4::identity());
    }

    #[test]
    fn mul() {
        let m = get_matrix_4();
        assert!(m.approx_equal(m * Matrix4::identity()));
        assert!(m.approx_equal(Matrix4::identity() * m));
    }

    #[test]
    fn identity_mul_vector() {
        let v = Vector4::new(1.0, -2.0, 3.5, 1.0);
        assert_eq!(Matrix4::identity() * v, v);
    }

    #[test]
    fn mul_order() {
        let a = Matrix4::translate(Vector3::new(1.0, 0.0, 0.0));
        let b = Matrix4::scale(Vector3::new(2.0, 2.0, 2.0));
        let p = Vector4::point(Vector3::new(1.0, 1.0, 1.0));
        // b is applied first
        assert!(((a * b) * p).approx_equal(Vector4::new(3.0, 2.0, 2.0, 1.0)));
        assert!(((b * a) * p).approx_equal(Vector4::new(4.0, 2.0, 2.0, 1.0)));
    }

    #[test]
    fn trace() {
        let m = get_matrix_4();
        assert_eq!(m.trace(), 24.0);
    }

    #[test]
    fn transpose() {
        let m = get_matrix_4();
        let m_t = get_matrix_4_transposed();
        assert!(m.transpose().approx_equal(m_t))
    }

    #[test]
    fn upper3() {
        let m = get_matrix_4();
        let u = Matrix3::new(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(0.0, 5.0, 6.0),
            Vector3::new(0.0, 0.0, 8.0),
        );
        assert_eq!(m.upper3(), u);
        let back: Matrix4 = u.into();
        assert_eq!(back.l, Vector4::w());
        assert_eq!(back.i.w, 0.0);
    }

    #[test]
    fn from_le_bytes() {
        let m = get_matrix_4();
        let bytes: Vec<u8> = bytemuck::bytes_of(&m).to_vec();
        if cfg!(target_endian = "little") {
            assert_eq!(Matrix4::try_from_le_bytes(&bytes), Ok(m));
        }
        assert!(Matrix4::try_from_le_bytes(&bytes[..60]).is_err());
    }

    #[test]
    fn display() {
        let m = Matrix4::translate(Vector3::new(1.0, -2.5, 3.0));
        assert_eq!(
            format!("{}", m),
            "[ 1, 0, 0, 1 ]\n[ 0, 1, 0, -2.5 ]\n[ 0, 0, 1, 3 ]\n[ 0, 0, 0, 1 ]\n"
        );
    }
}

/// Column-major homogeneous matrix, `l` holds the translation.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Matrix4 {
    pub i: Vector4,
    pub j: Vector4,
    pub k: Vector4,
    pub l: Vector4,
}

impl Default for Matrix4 {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Neg for Matrix4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            i: -self.i,
            j: -self.j,
            k: -self.k,
            l: -self.l,
        }
    }
}

impl Add for Matrix4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
            l: self.l + rhs.l,
        }
    }
}

impl Sub for Matrix4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
            l: self.l - rhs.l,
        }
    }
}

impl Mul<Matrix4> for f32 {
    type Output = Matrix4;
    #[inline]
    fn mul(self, rhs: Matrix4) -> Self::Output {
        Matrix4 {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
            l: self * rhs.l,
        }
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs.x * self.i + rhs.y * self.j + rhs.z * self.k + rhs.w * self.l
    }
}

/// `(a * b) * v == a * (b * v)`: `b` is applied first.
impl Mul<Matrix4> for Matrix4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
            l: self * rhs.l,
        }
    }
}

impl Index<usize> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Matrix4!", index);
        unsafe {
            (&self.i as *const Vector4)
                .add(index)
                .as_ref()
                .unwrap_unchecked()
        }
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Matrix4!", index);
        unsafe {
            (&mut self.i as *mut Vector4)
                .add(index)
                .as_mut()
                .unwrap_unchecked()
        }
    }
}

impl From<Matrix3> for Matrix4 {
    #[inline]
    fn from(value: Matrix3) -> Self {
        Self {
            i: Vector4::vector(value.i),
            j: Vector4::vector(value.j),
            k: Vector4::vector(value.k),
            l: Vector4::w(),
        }
    }
}

impl Display for Matrix4 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for row in 0..4 {
            writeln!(f, "[ {}, {}, {}, {} ]", self.i[row], self.j[row], self.k[row], self.l[row])?;
        }
        Ok(())
    }
}

impl Matrix4 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        let v = read_le_f32s::<16>(bytes)?;
        Ok(Self {
            i: Vector4::new(v[0], v[1], v[2], v[3]),
            j: Vector4::new(v[4], v[5], v[6], v[7]),
            k: Vector4::new(v[8], v[9], v[10], v[11]),
            l: Vector4::new(v[12], v[13], v[14], v[15]),
        })
    }

    #[inline]
    pub fn new(i: Vector4, j: Vector4, k: Vector4, l: Vector4) -> Self {
        Self { i, j, k, l }
    }

    #[inline]
    pub fn identity() -> Self {
        Self {
            i: Vector4::x(),
            j: Vector4::y(),
            k: Vector4::z(),
            l: Vector4::w(),
        }
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: Vector4 {
                x: self.i.x,
                y: self.j.x,
                z: self.k.x,
                w: self.l.x,
            },
            j: Vector4 {
                x: self.i.y,
                y: self.j.y,
                z: self.k.y,
                w: self.l.y,
            },
            k: Vector4 {
                x: self.i.z,
                y: self.j.z,
                z: self.k.z,
                w: self.l.z,
            },
            l: Vector4 {
                x: self.i.w,
                y: self.j.w,
                z: self.k.w,
                w: self.l.w,
            },
        }
    }

    /// Upper-left 3x3 block.
    #[inline]
    pub fn upper3(self) -> Matrix3 {
        Matrix3::new(self.i.xyz(), self.j.xyz(), self.k.xyz())
    }

    #[inline]
    pub fn trace(self) -> f32 {
        self.i.x + self.j.y + self.k.z + self.l.w
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid() && self.k.is_valid() && self.l.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.approx_equal_eps(rhs, EPS)
    }

    #[inline]
    pub fn approx_equal_eps(self, rhs: Self, eps: f32) -> bool {
        self.i.approx_equal_eps(rhs.i, eps)
            && self.j.approx_equal_eps(rhs.j, eps)
            && self.k.approx_equal_eps(rhs.k, eps)
            && self.l.approx_equal_eps(rhs.l, eps)
    }

    #[inline]
    pub(crate) fn swap_columns(&mut self, a: usize, b: usize) {
        let tmp = self[a];
        self[a] = self[b];
        self[b] = tmp;
    }
}
