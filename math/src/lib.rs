pub mod consts;
pub mod conversion;
pub mod error;
pub mod geometry;
pub mod inverse;
pub mod transform;
pub mod types;

pub use error::{MathError, MathResult};
