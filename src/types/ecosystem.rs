use serde::{Deserialize, Serialize};
use std::fmt;

/// Package ecosystem a dependency belongs to.
///
/// The set is open: values not known to this crate are kept verbatim in
/// [`Ecosystem::Other`] so user rules can target any package manager.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Ecosystem {
    Npm,
    Php,
    Ruby,
    Rust,
    Golang,
    Python,
    Docker,
    GithubAction,
    Deno,
    Terraform,
    TerraformResource,
    Other(String),
}

impl Ecosystem {
    /// Ecosystems that always have a slot in the rule index.
    pub const KNOWN: [Ecosystem; 11] = [
        Ecosystem::Npm,
        Ecosystem::Php,
        Ecosystem::Ruby,
        Ecosystem::Rust,
        Ecosystem::Golang,
        Ecosystem::Python,
        Ecosystem::Docker,
        Ecosystem::GithubAction,
        Ecosystem::Deno,
        Ecosystem::Terraform,
        Ecosystem::TerraformResource,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Ecosystem::Npm => "npm",
            Ecosystem::Php => "php",
            Ecosystem::Ruby => "ruby",
            Ecosystem::Rust => "rust",
            Ecosystem::Golang => "golang",
            Ecosystem::Python => "python",
            Ecosystem::Docker => "docker",
            Ecosystem::GithubAction => "githubAction",
            Ecosystem::Deno => "deno",
            Ecosystem::Terraform => "terraform",
            Ecosystem::TerraformResource => "terraform.resource",
            Ecosystem::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Ecosystem::Other(_))
    }
}

impl From<&str> for Ecosystem {
    fn from(value: &str) -> Self {
        match value {
            "npm" => Ecosystem::Npm,
            "php" => Ecosystem::Php,
            "ruby" => Ecosystem::Ruby,
            "rust" => Ecosystem::Rust,
            "golang" => Ecosystem::Golang,
            "python" => Ecosystem::Python,
            "docker" => Ecosystem::Docker,
            "githubAction" => Ecosystem::GithubAction,
            "deno" => Ecosystem::Deno,
            "terraform" => Ecosystem::Terraform,
            "terraform.resource" => Ecosystem::TerraformResource,
            other => Ecosystem::Other(other.to_string()),
        }
    }
}

impl From<String> for Ecosystem {
    fn from(value: String) -> Self {
        Ecosystem::from(value.as_str())
    }
}

impl From<Ecosystem> for String {
    fn from(value: Ecosystem) -> Self {
        match value {
            Ecosystem::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
