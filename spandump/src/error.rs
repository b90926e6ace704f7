use spandump_common::error::Error as SpanError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Span error: {0}")]
    Span(SpanError),
    #[error("IO error: {0}")]
    IOError(std::io::Error),
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl From<SpanError> for Error {
    #[inline]
    fn from(src: SpanError) -> Self {
        Error::Span(src)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(src: std::io::Error) -> Self {
        Error::IOError(src)
    }
}
