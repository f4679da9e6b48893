use crate::{
    consts::EPS,
    types::{Matrix3, Matrix4, Vector4},
};


impl Matrix4 {
    /// Gauss-Jordan elimination with partial pivoting. Returns identity when a
    /// pivot column has no entry of magnitude `EPS` or more.
    ///
    /// Rows are handled as columns of the transposed matrix.
    pub fn inv(self) -> Matrix4 {
        let mut rows = self.transpose();
        let mut inv_rows = Matrix4::identity();
        for i in 0..4 {
            let mut pivot = i;
            for r in (i + 1)..4 {
                if rows[r][i].abs() > rows[pivot][i].abs() {
                    pivot = r;
                }
            }
            if rows[pivot][i].abs() < EPS {
                return Matrix4::identity();
            }
            if pivot != i {
                rows.swap_columns(i, pivot);
                inv_rows.swap_columns(i, pivot);
            }
            let scale = rows[i][i].recip();
            rows[i] = scale * rows[i];
            inv_rows[i] = scale * inv_rows[i];
            for r in 0..4 {
                if r == i {
                    continue;
                }
                let f = rows[r][i];
                rows[r] = rows[r] - f * rows[i];
                inv_rows[r] = inv_rows[r] - f * inv_rows[i];
            }
        }
        inv_rows.transpose()
    }

    /// Inverse of rotation, uniform scale and translation.
    ///
    /// The upper 3x3 is inverted as `transpose / |i|^2`. Shear, non-uniform
    /// scale or a projective row produce a wrong result without notice, use
    /// [`Matrix4::inv`] for those.
    #[inline]
    pub fn affine_inv(self) -> Matrix4 {
        let rot = self.upper3();
        let rot_inv = rot.i.length_squared().recip() * rot.transpose();
        let t = -(rot_inv * self.l.xyz());
        Matrix4::new(
            rot_inv.i.into(),
            rot_inv.j.into(),
            rot_inv.k.into(),
            Vector4::point(t),
        )
    }

    /// Inverse-transpose of the upper 3x3, for transforming normals.
    #[inline]
    pub fn normal_matrix(self) -> Matrix3 {
        self.upper3().inv().transpose()
    }
}
