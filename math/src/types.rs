mod matrix;
mod quat;
mod rotation;
mod vector;

pub use matrix::{Matrix3, Matrix4};
pub use quat::Quat;
pub use rotation::{RotationMatrix3, ORTHONORMAL_TOLERANCE};
pub use vector::{Vector2, Vector3, Vector4};

pub use crate::consts::EPS;
