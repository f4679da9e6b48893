use crate::types::{Matrix3, Matrix4, Quat, RotationMatrix3, Vector3};

#[cfg(test)]
mod test_conversion {
    use crate::consts::PI;
    use crate::types::{Matrix3, Matrix4, Quat, RotationMatrix3, Vector3, Vector4};

    fn same_rotation(a: Quat, b: Quat) -> bool {
        a.approx_equal_eps(b, 1e-5) || a.approx_equal_eps(-b, 1e-5)
    }

    #[test]
    fn matrix_matches_rotate() {
        let q = Quat::axis_angle(Vector3::new(-1.0, 2.0, 0.5).normalize(), 2.1);
        let m: Matrix3 = q.into();
        for v in [
            Vector3::x(),
            Vector3::y(),
            Vector3::z(),
            Vector3::new(0.3, -4.0, 2.5),
        ] {
            assert!((m * v).approx_equal_eps(q.rotate(v), 1e-5));
        }
    }

    #[test]
    fn matrix4_embeds_matrix3() {
        let q = Quat::axis_angle(Vector3::new(1.0, 1.0, 0.0).normalize(), 0.6);
        let m3: Matrix3 = q.into();
        let m4: Matrix4 = q.into();
        assert_eq!(m4.upper3(), m3);
        assert_eq!(m4.l, Vector4::w());
        assert_eq!((m4.i.w, m4.j.w, m4.k.w), (0.0, 0.0, 0.0));
    }

    #[test]
    fn half_turn_about_y() {
        let q = Quat::axis_angle(Vector3::y(), PI);
        let m: Matrix3 = q.into();
        let p = m * Vector3::x();
        assert!(p.approx_equal_eps(Vector3::new(-1.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn round_trip() {
        let q = Quat::axis_angle(Vector3::new(1.0, 1.0, 1.0).normalize(), 0.123);
        let m: RotationMatrix3 = q.into();
        assert!(same_rotation(Quat::from(m), q));
    }

    #[test]
    fn round_trip_positive_trace() {
        let q = Quat::from_euler(0.2, -0.4, 0.1);
        let m: RotationMatrix3 = q.into();
        assert!(m.matrix().trace() > 0.0);
        assert!(same_rotation(Quat::from(m), q));
    }

    #[test]
    fn round_trip_half_turns() {
        // each dominant-diagonal branch
        for axis in [Vector3::x(), Vector3::y(), Vector3::z()] {
            let q = Quat::axis_angle(axis, PI);
            let m: RotationMatrix3 = q.into();
            let back = Quat::from(m);
            assert!(same_rotation(back, q));
            assert!(back.vector_part().approx_equal_eps(axis, 1e-5)
                || back.vector_part().approx_equal_eps(-axis, 1e-5));
        }
    }

    #[test]
    fn round_trip_near_half_turn() {
        let q = Quat::axis_angle(Vector3::new(0.2, 0.3, 1.0).normalize(), 0.97 * PI);
        let m: RotationMatrix3 = q.into();
        assert!(same_rotation(Quat::from(m), q));
    }

    #[test]
    fn from_axis_builders() {
        let rad = 1.1;
        let q = Quat::from(RotationMatrix3::rotate_z(rad));
        assert!(same_rotation(q, Quat::axis_angle(Vector3::z(), rad)));
        let q = Quat::from(RotationMatrix3::rotate_x(rad));
        assert!(same_rotation(q, Quat::axis_angle(Vector3::x(), rad)));
    }

    #[test]
    fn identity() {
        let m: Matrix4 = Quat::identity().into();
        assert_eq!(m, Matrix4::identity());
        let q = Quat::from(RotationMatrix3::identity());
        assert!(q.approx_equal(Quat::identity()));
    }
}

/// Columns are the images of the basis vectors, so `Matrix3::from(q) * v`
/// agrees with `q.rotate(v)` for unit `q`.
impl From<Quat> for Matrix3 {
    #[inline]
    fn from(value: Quat) -> Self {
        let Quat { x, y, z, w } = value;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Matrix3::new(
            Vector3::new(1.0 - 2.0 * (yy + zz), 2.0 * (xy + wz), 2.0 * (xz - wy)),
            Vector3::new(2.0 * (xy - wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + wx)),
            Vector3::new(2.0 * (xz + wy), 2.0 * (yz - wx), 1.0 - 2.0 * (xx + yy)),
        )
    }
}

/// `value` is assumed to be unit length.
impl From<Quat> for RotationMatrix3 {
    #[inline]
    fn from(value: Quat) -> Self {
        RotationMatrix3::from_raw(value.into())
    }
}

impl From<Quat> for Matrix4 {
    #[inline]
    fn from(value: Quat) -> Self {
        Matrix3::from(value).into()
    }
}

/// Picks the branch with the largest divisor: the trace when positive,
/// otherwise the dominant diagonal element.
impl From<RotationMatrix3> for Quat {
    fn from(value: RotationMatrix3) -> Self {
        let Matrix3 { i, j, k } = value.matrix();
        let trace = i.x + j.y + k.z;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Quat::new((j.z - k.y) / s, (k.x - i.z) / s, (i.y - j.x) / s, 0.25 * s)
        } else if i.x > j.y && i.x > k.z {
            let s = (1.0 + i.x - j.y - k.z).sqrt() * 2.0;
            Quat::new(0.25 * s, (j.x + i.y) / s, (k.x + i.z) / s, (j.z - k.y) / s)
        } else if j.y > k.z {
            let s = (1.0 + j.y - i.x - k.z).sqrt() * 2.0;
            Quat::new((j.x + i.y) / s, 0.25 * s, (k.y + j.z) / s, (k.x - i.z) / s)
        } else {
            let s = (1.0 + k.z - i.x - j.y).sqrt() * 2.0;
            Quat::new((k.x + i.z) / s, (k.y + j.z) / s, 0.25 * s, (i.y - j.x) / s)
        }
    }
}
