use std::{
    error::Error,
    fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    InsufficientBytes { expected: usize, found: usize },
    NotOrthonormal,
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MathError::InsufficientBytes { expected, found } => write!(
                f,
                "Insufficient bytes: expected at least {}, found {}",
                expected, found
            ),
            MathError::NotOrthonormal => write!(f, "Matrix is not a proper orthonormal rotation"),
        }
    }
}

impl Error for MathError {}

pub type MathResult<T> = Result<T, MathError>;

pub(crate) fn read_le_f32s<const N: usize>(bytes: &[u8]) -> MathResult<[f32; N]> {
    let expected = N * std::mem::size_of::<f32>();
    if bytes.len() < expected {
        return Err(MathError::InsufficientBytes {
            expected,
            found: bytes.len(),
        });
    }
    let mut values = [0.0f32; N];
    for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
        *value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(values)
}
