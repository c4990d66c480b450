use std::num::ParseFloatError;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Result type used across the library
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid value for '{0}': '{1}'")]
    InvalidValue(String, String),
    #[error("Document error: {0}")]
    Document(String),
    #[error("{0}")]
    Cli(String),
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn from_err<T>(err: T) -> Self
    where
        T: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(err))
    }
}

impl From<ParseFloatError> for Error {
    fn from(err: ParseFloatError) -> Self {
        Self::Parse(format!("float: {err}"))
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        Self::Parse(format!("utf8: {err}"))
    }
}
