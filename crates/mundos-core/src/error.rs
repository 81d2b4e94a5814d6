//! Error types for Mundos

use thiserror::Error;

/// Main error type for Mundos operations
#[derive(Error, Debug)]
pub enum MundosError {
    /// Sign-in rejected by the session provider
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// No world in the catalog has this id
    #[error("World not found: {0}")]
    WorldNotFound(u32),

    /// Error reading or writing preferences
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using MundosError
pub type MundosResult<T> = Result<T, MundosError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MundosError::WorldNotFound(7);
        assert_eq!(format!("{}", err), "World not found: 7");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MundosError = io_err.into();
        assert!(matches!(err, MundosError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: MundosError = json_err.into();
        assert!(matches!(err, MundosError::Serialization(_)));
    }
}
