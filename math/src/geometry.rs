use crate::{
    consts::{clamp, EPS},
    types::Vector3,
};


/// Mirrors `i` about the plane with unit normal `n`.
#[inline]
pub fn reflect(i: Vector3, n: Vector3) -> Vector3 {
    i - 2.0 * (i * n) * n
}

/// Snell's law with `eta = n1 / n2`. Total internal reflection yields the zero vector.
#[inline]
pub fn refract(i: Vector3, n: Vector3, eta: f32) -> Vector3 {
    let n_dot_i = i * n;
    let k = 1.0 - eta * eta * (1.0 - n_dot_i * n_dot_i);
    if k < 0.0 {
        return Vector3::zero();
    }
    eta * i - (eta * n_dot_i + k.sqrt()) * n
}

/// `n` when `nref` faces against `i`, `-n` otherwise.
#[inline]
pub fn faceforward(n: Vector3, i: Vector3, nref: Vector3) -> Vector3 {
    if nref * i < 0.0 {
        n
    } else {
        -n
    }
}

/// Angle in `[0, PI]`. Zero when either vector has zero length.
#[inline]
pub fn angle_between(a: Vector3, b: Vector3) -> f32 {
    let len_sq = a.length_squared() * b.length_squared();
    if len_sq <= 0.0 {
        return 0.0;
    }
    clamp((a * b) / len_sq.sqrt(), -1.0, 1.0).acos()
}

#[inline]
pub fn angle_between_normalized(a: Vector3, b: Vector3) -> f32 {
    clamp(a * b, -1.0, 1.0).acos()
}

/// Signed distance to the plane `p * n + d == 0`, positive on the side `n` points to.
#[inline]
pub fn distance_point_plane(p: Vector3, n: Vector3, d: f32) -> f32 {
    p * n + d
}

#[inline]
pub fn distance_point_plane_point(p: Vector3, n: Vector3, p0: Vector3) -> f32 {
    (p - p0) * n
}

#[inline]
pub fn project_vector(v: Vector3, onto: Vector3) -> Vector3 {
    let denom = onto * onto;
    if denom <= EPS {
        return Vector3::zero();
    }
    ((v * onto) / denom) * onto
}
