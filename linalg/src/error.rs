use thiserror::Error;

/// Contract violations raised by container operations. These are programming
/// errors on the caller's side, not transient failures; nothing retries them
/// and the operands are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinalgError {
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    Dimension { expected: String, actual: String },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot normalize a vector with zero norm")]
    DegenerateVector,
}

impl LinalgError {
    pub(crate) fn dimension(expected: impl ToString, actual: impl ToString) -> Self {
        LinalgError::Dimension {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, LinalgError>;
