use bytemuck::PodCastError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("size mismatch: {0}")]
    SizeMismatch(String),
    #[error("misaligned: {0}")]
    Misaligned(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<PodCastError> for Error {
    #[inline]
    fn from(src: PodCastError) -> Self {
        match src {
            PodCastError::TargetAlignmentGreaterAndInputNotAligned
            | PodCastError::AlignmentMismatch => Error::Misaligned(format!("{:?}", src)),
            PodCastError::OutputSliceWouldHaveSlop | PodCastError::SizeMismatch => {
                Error::SizeMismatch(format!("{:?}", src))
            }
        }
    }
}
