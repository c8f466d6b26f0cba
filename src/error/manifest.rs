use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("failed to read manifest '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {kind} '{path}': {message}")]
    Parse {
        kind: &'static str,
        path: PathBuf,
        message: String,
    },
}

impl ManifestError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(kind: &'static str, path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            path: path.into(),
            message: message.into(),
        }
    }
}
