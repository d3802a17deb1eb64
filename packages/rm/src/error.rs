//! Error types for the CliniRec reference model

use thiserror::Error;

/// Main error type for reference model operations
#[derive(Error, Debug)]
pub enum RmError {
    /// Structural invariant violated during construction
    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    /// Path does not resolve to any node; carries the path as supplied
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Declared operation whose contract is not implemented yet
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),
}

/// Result type alias for reference model operations
pub type Result<T> = std::result::Result<T, RmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_display() {
        let err = RmError::InvalidPath("/bad/path".to_string());
        assert_eq!(err.to_string(), "Invalid path: /bad/path");
    }

    #[test]
    fn test_invalid_structure_display() {
        let err = RmError::InvalidStructure("empty items".to_string());
        assert_eq!(err.to_string(), "Invalid structure: empty items");
    }

    #[test]
    fn test_unimplemented_display() {
        let err = RmError::Unimplemented("path_of_item");
        assert_eq!(err.to_string(), "Not implemented: path_of_item");
    }
}
