//! Error types for loading map files

use std::path::PathBuf;
use thiserror::Error;

/// Result type for map loading
pub type Result<T> = std::result::Result<T, LoadError>;

/// Failures that stop an invocation before validation runs.
///
/// The `Display` output is the exact message shown to the user.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Error resolving path: {0}")]
    Resolve(#[source] std::io::Error),

    #[error("Error reading file: {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl LoadError {
    /// Name of the loader phase that failed
    pub fn phase(&self) -> &'static str {
        match self {
            LoadError::Resolve(_) => "resolving path",
            LoadError::Read { .. } => "reading file",
            LoadError::Parse(_) => "parsing JSON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_read_error_message_includes_path_and_cause() {
        let err = LoadError::Read {
            path: PathBuf::from("/maps/level1.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "Error reading file: /maps/level1.json: no such file"
        );
        assert_eq!(err.phase(), "reading file");
    }

    #[test]
    fn test_parse_error_prefix() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::from(json_err);
        assert!(err.to_string().starts_with("Error parsing JSON: "));
        assert_eq!(err.phase(), "parsing JSON");
    }
}
