//! Error types for Starfolio

use thiserror::Error;

/// Main error type for Starfolio operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// A configuration value cannot drive the site (empty phrase list, zero interval, ...)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Site content failed validation
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config or content file is not valid JSON for the expected shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::InvalidConfiguration("phrase list is empty".to_string());
        assert_eq!(
            format!("{}", err),
            "Invalid configuration: phrase list is empty"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Json(_)));
    }
}
