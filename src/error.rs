use std::fmt::{self, Display};
use std::io;

/// Provides `SimError` and maps other errors to
/// convert to a `SimError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum SimError {
    /// An argument outside of its documented domain, raised by a constructor,
    /// a setter, or a parameter file.
    InvalidParameter(String),
    IoError(io::Error),
    JsonError(serde_json::Error),
}

impl From<io::Error> for SimError {
    fn from(error: io::Error) -> Self {
        SimError::IoError(error)
    }
}

impl From<serde_json::Error> for SimError {
    fn from(error: serde_json::Error) -> Self {
        SimError::JsonError(error)
    }
}

impl From<String> for SimError {
    fn from(error: String) -> Self {
        SimError::InvalidParameter(error)
    }
}

impl From<&str> for SimError {
    fn from(error: &str) -> Self {
        SimError::InvalidParameter(error.to_string())
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimError::IoError(error) => Some(error),
            SimError::JsonError(error) => Some(error),
            SimError::InvalidParameter(_) => None,
        }
    }
}

impl Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SimError::InvalidParameter(message) => write!(f, "Invalid parameter: {message}"),
            SimError::IoError(error) => write!(f, "I/O error: {error}"),
            SimError::JsonError(error) => write!(f, "JSON error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_from_str() {
        let error: SimError = "size must be positive".into();
        assert!(matches!(error, SimError::InvalidParameter(ref m) if m == "size must be positive"));
        assert_eq!(error.to_string(), "Invalid parameter: size must be positive");
    }

    #[test]
    fn wraps_io_error() {
        let error: SimError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(error, SimError::IoError(_)));
        assert!(std::error::Error::source(&error).is_some());
    }
}
