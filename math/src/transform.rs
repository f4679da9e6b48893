pub mod projection;

use crate::types::{Matrix3, Matrix4, Quat, RotationMatrix3, Vector3, Vector4};


impl RotationMatrix3 {
    #[inline]
    pub fn rotate_x(rad: f32) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self::from_raw(Matrix3::new(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, cos, sin),
            Vector3::new(0.0, -sin, cos),
        ))
    }

    #[inline]
    pub fn rotate_y(rad: f32) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self::from_raw(Matrix3::new(
            Vector3::new(cos, 0.0, -sin),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(sin, 0.0, cos),
        ))
    }

    #[inline]
    pub fn rotate_z(rad: f32) -> Self {
        let cos = rad.cos();
        let sin = rad.sin();
        Self::from_raw(Matrix3::new(
            Vector3::new(cos, sin, 0.0),
            Vector3::new(-sin, cos, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ))
    }

    /// `axis` must be unit length.
    #[inline]
    pub fn rotate_axis_angle(axis: Vector3, rad: f32) -> Self {
        Quat::axis_angle(axis, rad).into()
    }
}

#[cfg(test)]
mod test_matrix_4_transforms {
    use crate::consts::PI;
    use crate::types::{Matrix4, Quat, Vector3, Vector4};

    #[test]
    fn rotate_x() {
        let m = Matrix4::rotate_x(std::f32::consts::FRAC_PI_2);
        let p = m * Vector4::point(Vector3::y());
        assert!(p.approx_equal(Vector4::point(Vector3::z())));
    }

    #[test]
    fn rotate_y() {
        let m = Matrix4::rotate_y(std::f32::consts::FRAC_PI_2);
        let p = m * Vector4::point(Vector3::x());
        assert!(p.approx_equal(Vector4::point(-Vector3::z())));
    }

    #[test]
    fn rotate_z() {
        let m = Matrix4::rotate_z(std::f32::consts::FRAC_PI_2);
        let p = m * Vector4::point(Vector3::x());
        assert!(p.approx_equal(Vector4::point(Vector3::y())));
    }

    #[test]
    fn rotate_axis_angle() {
        let axis = Vector3::new(1.0, 1.0, 1.0);
        let m = Matrix4::rotate_axis_angle(axis, 2.0 * PI / 3.0);
        // a third of a turn about the diagonal cycles the basis
        let p = m * Vector4::vector(Vector3::x());
        assert!(p.approx_equal_eps(Vector4::vector(Vector3::y()), 1e-5));
        let q = Quat::axis_angle(axis.normalize(), 2.0 * PI / 3.0);
        let m_q: Matrix4 = q.into();
        assert!(m.approx_equal_eps(m_q, 1e-5));
    }

    #[test]
    fn rotate_axis_angle_matches_axis_builders() {
        let m = Matrix4::rotate_axis_angle(Vector3::new(0.0, 3.0, 0.0), 0.4);
        assert!(m.approx_equal_eps(Matrix4::rotate_y(0.4), 1e-5));
    }

    #[test]
    fn translate() {
        let m = Matrix4::translate(Vector3::new(1.0, 2.0, 3.0));
        let p = m * Vector4::point(Vector3::new(2.0, 3.0, 1.0));
        assert!(p.approx_equal(Vector4::point(Vector3::new(3.0, 5.0, 4.0))));
        let d = m * Vector4::vector(Vector3::new(2.0, 3.0, 1.0));
        assert!(d.approx_equal(Vector4::vector(Vector3::new(2.0, 3.0, 1.0))));
    }

    #[test]
    fn scale() {
        let m = Matrix4::scale(Vector3::new(4.0, 2.0, 0.5));
        let p = m * Vector4::point(Vector3::new(3.0, 2.0, 1.0));
        assert!(p.approx_equal(Vector4::point(Vector3::new(12.0, 4.0, 0.5))));
        let u = Matrix4::scale_uniform(4.0);
        let p = u * Vector4::point(Vector3::new(3.0, 2.0, 1.0));
        assert!(p.approx_equal(Vector4::point(Vector3::new(12.0, 8.0, 4.0))));
    }

    #[test]
    fn translate_rotate_scale_chain() {
        let model = Matrix4::translate(Vector3::new(10.0, 20.0, 30.0))
            * Matrix4::rotate_y(PI / 2.0)
            * Matrix4::scale(Vector3::new(2.0, 2.0, 2.0));
        let world = model * Vector4::new(1.0, 0.0, 0.0, 1.0);
        assert!(world.approx_equal_eps(Vector4::new(10.0, 20.0, 28.0, 1.0), 1e-4));
    }

    #[test]
    fn look_at_lh() {
        let eye = Vector3::new(2.0, 3.0, 4.0);
        let target = Vector3::new(1.0, 1.0, 1.0);
        let m = Matrix4::look_at_lh(eye, target, Vector3::y());
        let p_eye = m * Vector4::point(eye);
        assert!(p_eye.approx_equal_eps(Vector4::point(Vector3::zero()), 1e-5));
        let p_target = m * Vector4::point(target);
        let d = (target - eye).length();
        assert!(p_target.approx_equal_eps(Vector4::point(Vector3::new(0.0, 0.0, d)), 1e-5));
    }

    #[test]
    fn look_at_rh() {
        let eye = Vector3::new(2.0, 3.0, 4.0);
        let target = Vector3::new(1.0, 1.0, 1.0);
        let m = Matrix4::look_at_rh(eye, target, Vector3::y());
        let p_eye = m * Vector4::point(eye);
        assert!(p_eye.approx_equal_eps(Vector4::point(Vector3::zero()), 1e-5));
        let p_target = m * Vector4::point(target);
        let d = (target - eye).length();
        assert!(p_target.approx_equal_eps(Vector4::point(Vector3::new(0.0, 0.0, -d)), 1e-5));
    }

    #[test]
    fn look_at_keeps_up() {
        let eye = Vector3::new(0.0, 0.0, -5.0);
        let m = Matrix4::look_at_lh(eye, Vector3::zero(), Vector3::y());
        let up = m * Vector4::vector(Vector3::y());
        assert!(up.approx_equal_eps(Vector4::vector(Vector3::y()), 1e-5));
        let right = m * Vector4::vector(Vector3::x());
        assert!(right.approx_equal_eps(Vector4::vector(Vector3::x()), 1e-5));
    }
}

impl Matrix4 {
    #[inline]
    pub fn translate(t: Vector3) -> Matrix4 {
        Matrix4::new(
            Vector4::x(),
            Vector4::y(),
            Vector4::z(),
            Vector4::point(t),
        )
    }

    #[inline]
    pub fn scale(s: Vector3) -> Matrix4 {
        Matrix4::new(
            Vector4::new(s.x, 0.0, 0.0, 0.0),
            Vector4::new(0.0, s.y, 0.0, 0.0),
            Vector4::new(0.0, 0.0, s.z, 0.0),
            Vector4::w(),
        )
    }

    #[inline]
    pub fn scale_uniform(s: f32) -> Matrix4 {
        Self::scale(Vector3::new(s, s, s))
    }

    #[inline]
    pub fn rotate_x(rad: f32) -> Matrix4 {
        RotationMatrix3::rotate_x(rad).into()
    }

    #[inline]
    pub fn rotate_y(rad: f32) -> Matrix4 {
        RotationMatrix3::rotate_y(rad).into()
    }

    #[inline]
    pub fn rotate_z(rad: f32) -> Matrix4 {
        RotationMatrix3::rotate_z(rad).into()
    }

    /// Rodrigues' formula. Unlike the quaternion path the axis is normalized here.
    #[inline]
    pub fn rotate_axis_angle(axis: Vector3, rad: f32) -> Matrix4 {
        let Vector3 { x, y, z } = axis.normalize();
        let c = rad.cos();
        let s = rad.sin();
        let t = 1.0 - c;
        Matrix4 {
            i: Vector4::new(t * x * x + c, t * x * y + s * z, t * x * z - s * y, 0.0),
            j: Vector4::new(t * x * y - s * z, t * y * y + c, t * y * z + s * x, 0.0),
            k: Vector4::new(t * x * z + s * y, t * y * z - s * x, t * z * z + c, 0.0),
            l: Vector4::w(),
        }
    }

    /// View matrix looking down +Z.
    #[inline]
    pub fn look_at_lh(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
        Self::view((target - eye).normalize(), eye, up)
    }

    /// View matrix looking down -Z.
    #[inline]
    pub fn look_at_rh(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
        Self::view((eye - target).normalize(), eye, up)
    }

    #[inline]
    fn view(z: Vector3, eye: Vector3, up: Vector3) -> Matrix4 {
        let x = up.cross(z).normalize();
        let y = z.cross(x);
        Matrix4 {
            i: Vector4::new(x.x, y.x, z.x, 0.0),
            j: Vector4::new(x.y, y.y, z.y, 0.0),
            k: Vector4::new(x.z, y.z, z.z, 0.0),
            l: Vector4::new(-(x * eye), -(y * eye), -(z * eye), 1.0),
        }
    }
}
