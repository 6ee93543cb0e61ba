use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeowError {
    #[error("unsupported hash width {0} (expected 128, 256 or 512)")]
    InvalidWidth(i64),
    #[error("cannot {op}: stream already finalized")]
    InvalidState { op: &'static str },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, MeowError>;
