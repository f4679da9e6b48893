use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{Display, Formatter},
    ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub},
};

use super::EPS;
use crate::{
    consts::almost_equal,
    error::{read_le_f32s, MathResult},
};

#[cfg(test)]
mod test_vector_2 {
    use super::Vector2;

    #[test]
    fn dot() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a.dot(b), -5.0);
        assert_eq!(a * b, a.dot(b));
    }

    #[test]
    fn normalize() {
        let v = Vector2::new(3.0, 4.0).normalize();
        assert!(v.approx_equal(Vector2::new(0.6, 0.8)));
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_degenerate() {
        let v = Vector2::new(1e-7, 0.0).normalize();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 0.0);
    }
}

#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        rhs.recip() * self
    }
}

impl Mul<Vector2> for Vector2 {
    type Output = f32;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 2, "Invalid index {} for Vector2!", index);
        unsafe {
            (&self.x as *const f32)
                .add(index)
                .as_ref()
                .unwrap_unchecked()
        }
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 2, "Invalid index {} for Vector2!", index);
        unsafe {
            (&mut self.x as *mut f32)
                .add(index)
                .as_mut()
                .unwrap_unchecked()
        }
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "( {}, {} )", self.x, self.y)
    }
}

impl Vector2 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        let [x, y] = read_le_f32s::<2>(bytes)?;
        Ok(Self { x, y })
    }

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn one() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    #[inline]
    pub fn x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    #[inline]
    pub fn y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self * rhs
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self * self
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Zero vector when the length is within `EPS` of zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if almost_equal(len, 0.0, EPS) {
            Self::zero()
        } else {
            len.recip() * self
        }
    }

    /// Unclamped, `t` outside `[0, 1]` extrapolates.
    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        self + (rhs - self) * t
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.approx_equal_eps(rhs, EPS)
    }

    #[inline]
    pub fn approx_equal_eps(self, rhs: Self, eps: f32) -> bool {
        almost_equal(self.x, rhs.x, eps) && almost_equal(self.y, rhs.y, eps)
    }
}


#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        Vector3 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
        }
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        rhs.recip() * self
    }
}

impl Mul<Vector3> for Vector3 {
    type Output = f32;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 3, "Invalid index {} for Vector3!", index);
        unsafe {
            (&self.x as *const f32)
                .add(index)
                .as_ref()
                .unwrap_unchecked()
        }
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 3, "Invalid index {} for Vector3!", index);
        unsafe {
            (&mut self.x as *mut f32)
                .add(index)
                .as_mut()
                .unwrap_unchecked()
        }
    }
}

impl From<Vector2> for Vector3 {
    #[inline]
    fn from(value: Vector2) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: 0.0,
        }
    }
}

impl Display for Vector3 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "( {}, {}, {} )", self.x, self.y, self.z)
    }
}

impl Vector3 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        let [x, y, z] = read_le_f32s::<3>(bytes)?;
        Ok(Self { x, y, z })
    }

    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn x() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn y() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn z() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }

    #[inline]
    pub fn right() -> Self {
        Self::x()
    }

    #[inline]
    pub fn left() -> Self {
        -Self::x()
    }

    #[inline]
    pub fn up() -> Self {
        Self::y()
    }

    #[inline]
    pub fn down() -> Self {
        -Self::y()
    }

    /// +Z points into the screen.
    #[inline]
    pub fn forward() -> Self {
        Self::z()
    }

    #[inline]
    pub fn back() -> Self {
        -Self::z()
    }

    #[inline]
    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self * rhs
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self * self
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Zero vector when the length is within `EPS` of zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if almost_equal(len, 0.0, EPS) {
            Self::zero()
        } else {
            len.recip() * self
        }
    }

    /// Right-handed: `x.cross(y) == z`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        self + (rhs - self) * t
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.approx_equal_eps(rhs, EPS)
    }

    #[inline]
    pub fn approx_equal_eps(self, rhs: Self, eps: f32) -> bool {
        almost_equal(self.x, rhs.x, eps)
            && almost_equal(self.y, rhs.y, eps)
            && almost_equal(self.z, rhs.z, eps)
    }
}


#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        Vector4 {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
            w: self * rhs.w,
        }
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        rhs.recip() * self
    }
}

impl Mul<Vector4> for Vector4 {
    type Output = f32;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Vector4!", index);
        unsafe {
            (&self.x as *const f32)
                .add(index)
                .as_ref()
                .unwrap_unchecked()
        }
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Vector4!", index);
        unsafe {
            (&mut self.x as *mut f32)
                .add(index)
                .as_mut()
                .unwrap_unchecked()
        }
    }
}

impl From<Vector3> for Vector4 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self::vector(value)
    }
}

impl Display for Vector4 {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "( {}, {}, {}, {} )", self.x, self.y, self.z, self.w)
    }
}

impl Vector4 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        let [x, y, z, w] = read_le_f32s::<4>(bytes)?;
        Ok(Self { x, y, z, w })
    }

    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub fn point(p: Vector3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
            w: 1.0,
        }
    }

    #[inline]
    pub fn vector(v: Vector3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: 0.0,
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub fn one() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn x() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[inline]
    pub fn y() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[inline]
    pub fn z() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            w: 0.0,
        }
    }

    #[inline]
    pub fn w() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    #[inline]
    pub fn xy(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    #[inline]
    pub fn xyz(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn wzyx(self) -> Self {
        Self::new(self.w, self.z, self.y, self.x)
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self * rhs
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self * self
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Zero vector when the length is within `EPS` of zero.
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if almost_equal(len, 0.0, EPS) {
            Self::zero()
        } else {
            len.recip() * self
        }
    }

    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        self + (rhs - self) * t
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.approx_equal_eps(rhs, EPS)
    }

    #[inline]
    pub fn approx_equal_eps(self, rhs: Self, eps: f32) -> bool {
        almost_equal(self.x, rhs.x, eps)
            && almost_equal(self.y, rhs.y, eps)
            && almost_equal(self.z, rhs.z, eps)
            && almost_equal(self.w, rhs.w, eps)
    }
}
