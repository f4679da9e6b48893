use crate::types::{Matrix4, Vector4};


impl Matrix4 {
    /// Left-handed, +Z forward, depth mapped to `[0, 1]`.
    #[inline]
    pub fn perspective_lh(fov_y_rad: f32, aspect: f32, z_near: f32, z_far: f32) -> Matrix4 {
        let h = (fov_y_rad * 0.5).tan().recip();
        let w = h / aspect;
        let d = z_far / (z_far - z_near);
        Matrix4 {
            i: Vector4::new(w, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, h, 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, d, 1.0),
            l: Vector4::new(0.0, 0.0, -d * z_near, 0.0),
        }
    }

    /// Right-handed, -Z forward, depth mapped to `[0, 1]`.
    #[inline]
    pub fn perspective_rh(fov_y_rad: f32, aspect: f32, z_near: f32, z_far: f32) -> Matrix4 {
        let h = (fov_y_rad * 0.5).tan().recip();
        let w = h / aspect;
        let d = z_far / (z_near - z_far);
        Matrix4 {
            i: Vector4::new(w, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, h, 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, d, -1.0),
            l: Vector4::new(0.0, 0.0, d * z_near, 0.0),
        }
    }

    /// Left-handed box centered on the view axis, depth mapped to `[0, 1]`.
    #[inline]
    pub fn ortho_lh(width: f32, height: f32, z_near: f32, z_far: f32) -> Matrix4 {
        let r = width * 0.5;
        let t = height * 0.5;
        Matrix4 {
            i: Vector4::new(r.recip(), 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, t.recip(), 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, (z_far - z_near).recip(), 0.0),
            l: Vector4::new(0.0, 0.0, z_near / (z_near - z_far), 1.0),
        }
    }

    /// Right-handed box centered on the view axis, depth mapped to `[-1, 1]`.
    #[inline]
    pub fn ortho_rh(width: f32, height: f32, z_near: f32, z_far: f32) -> Matrix4 {
        let r = width * 0.5;
        let t = height * 0.5;
        Matrix4 {
            i: Vector4::new(r.recip(), 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, t.recip(), 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, -2.0 / (z_far - z_near), 0.0),
            l: Vector4::new(0.0, 0.0, (z_far + z_near) / (z_near - z_far), 1.0),
        }
    }
}
