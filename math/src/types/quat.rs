use bytemuck::{Pod, Zeroable};
use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

use super::{Vector3, Vector4, EPS};
use crate::{
    consts::{almost_equal, clamp},
    error::{read_le_f32s, MathResult},
};


/// Vector part `(x, y, z)`, scalar part `w`.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Neg for Quat {
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

impl Add for Quat {
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

impl Sub for Quat {
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

impl Mul<Quat> for f32 {
    type Output = Quat;
    #[inline]
    fn mul(self, rhs: Quat) -> Self::Output {
        Quat {
            x: self * rhs.x,
            y: self * rhs.y,
            z: self * rhs.z,
            w: self * rhs.w,
        }
    }
}

impl Mul<f32> for Quat {
    type Output = Quat;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        rhs * self
    }
}

/// Hamilton product. `(a * b) * v` rotates by `b` first, then by `a`.
impl Mul<Quat> for Quat {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Quat) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl Mul<Vector3> for Quat {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        self.rotate(rhs)
    }
}

impl From<Vector4> for Quat {
    #[inline]
    fn from(value: Vector4) -> Self {
        Self::new(value.x, value.y, value.z, value.w)
    }
}

impl From<Quat> for Vector4 {
    #[inline]
    fn from(value: Quat) -> Self {
        Vector4::new(value.x, value.y, value.z, value.w)
    }
}

impl Display for Quat {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "( {}, {}, {} | {} )", self.x, self.y, self.z, self.w)
    }
}

impl Quat {
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
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    /// `axis` must already be unit length, it is not normalized here.
    #[inline]
    pub fn axis_angle(axis: Vector3, rad: f32) -> Self {
        let half = 0.5 * rad;
        let v = half.sin() * axis;
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: half.cos(),
        }
    }

    /// Half-angle Euler expansion, radians. A lone `yaw_z` rotates about Z,
    /// a lone `pitch_x` term about Y and a lone `roll_y` term about X.
    #[inline]
    pub fn from_euler(yaw_z: f32, pitch_x: f32, roll_y: f32) -> Self {
        let cy = (yaw_z * 0.5).cos();
        let sy = (yaw_z * 0.5).sin();
        let cp = (pitch_x * 0.5).cos();
        let sp = (pitch_x * 0.5).sin();
        let cr = (roll_y * 0.5).cos();
        let sr = (roll_y * 0.5).sin();
        Self {
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
            w: cr * cp * cy + sr * sp * sy,
        }
    }

    #[inline]
    pub fn vector_part(self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// General inverse, valid for non-unit quaternions. Falls back to identity
    /// when the squared length is within `EPS` of zero.
    #[inline]
    pub fn inv(self) -> Self {
        let len_sq = self.length_squared();
        if almost_equal(len_sq, 0.0, EPS) {
            return Self::identity();
        }
        len_sq.recip() * self.conjugate()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Same degenerate policy as vectors: a near-zero quaternion becomes all zeros.
    #[inline]
    pub fn normalize(self) -> Self {
        Vector4::from(self).normalize().into()
    }

    #[inline]
    pub fn nlerp(a: Self, b: Self, t: f32) -> Self {
        (a + (b - a) * t).normalize()
    }

    /// Constant angular velocity along the shorter arc. Close inputs
    /// (`dot > 0.9995`) go through `nlerp` instead, where `sin(theta)` is too
    /// small to divide by.
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        let mut d = a.dot(b);
        let mut b = b;
        if d < 0.0 {
            b = -b;
            d = -d;
        }
        if d > 0.9995 {
            return Self::nlerp(a, b, t);
        }
        let theta = clamp(d, -1.0, 1.0).acos();
        let sin = theta.sin();
        let wa = ((1.0 - t) * theta).sin() / sin;
        let wb = (t * theta).sin() / sin;
        a * wa + b * wb
    }

    /// `q * (v, 0) * conjugate(q)`. Assumes `self` is unit length.
    #[inline]
    pub fn rotate(self, v: Vector3) -> Vector3 {
        let p = Quat::new(v.x, v.y, v.z, 0.0);
        (self * p * self.conjugate()).vector_part()
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
        Vector4::from(self).approx_equal_eps(rhs.into(), eps)
    }
}
