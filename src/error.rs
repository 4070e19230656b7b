//! Error types for path algebra
//!
//! The algebra itself is total. Errors only arise at the edges of the crate,
//! when text has to be turned into one of its typed values.

use thiserror::Error;

/// The error type for path algebra operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A platform name that is none of `posix`, `windows` or `url`
    #[error("Unknown platform: {name} - expected one of posix, windows, url")]
    UnknownPlatform { name: String },
}

/// Result type for path algebra operations
pub type Result<T> = std::result::Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_platform_message() {
        let err = PathError::UnknownPlatform {
            name: "amiga".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown platform: amiga - expected one of posix, windows, url"
        );
    }
}
