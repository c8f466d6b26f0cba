use std::path::PathBuf;
use thiserror::Error;

use super::RegistryError;

#[derive(Error, Debug)]
pub enum RuleFileError {
    #[error("failed to read rules file '{path}': {message}")]
    ReadError { path: PathBuf, message: String },

    #[error("failed to parse rules file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("unsupported rules format: {format} (expected json or yaml)")]
    UnsupportedFormat { format: String },

    #[error("rules file '{path}' rejected: {source}")]
    Rejected {
        path: PathBuf,
        source: RegistryError,
    },
}

impl RuleFileError {
    pub fn read_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ReadError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            format: format.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display() {
        let err = RuleFileError::read_error("/path/to/rules.json", "file not found");
        assert_eq!(
            err.to_string(),
            "failed to read rules file '/path/to/rules.json': file not found"
        );
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = RuleFileError::unsupported_format("xml");
        assert_eq!(
            err.to_string(),
            "unsupported rules format: xml (expected json or yaml)"
        );
    }
}
