mod manifest;
mod registry;
mod rule_file;
mod scan;

pub use manifest::ManifestError;
pub use registry::RegistryError;
pub use rule_file::RuleFileError;
pub use scan::ScanError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    RuleFile(#[from] RuleFileError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_transparent() {
        let err: Error = ScanError::directory_not_found("/missing").into();
        assert_eq!(err.to_string(), "directory not found: /missing");

        let err: Error = RegistryError::duplicate_tech("selenium", "Selenium").into();
        assert!(matches!(err, Error::Registry(_)));
        assert_eq!(err.to_string(), "already registered: selenium (Selenium)");
    }
}
