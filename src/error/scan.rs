use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("failed to scan directory at {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl ScanError {
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }
}
