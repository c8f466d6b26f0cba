use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::types::Ecosystem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "techrules")]
#[command(about = "Technology rules registry - detect tools, languages and services from dependencies", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Extra rules file (JSON or YAML). Can be specified multiple times.
    #[arg(long, value_name = "FILE", global = true)]
    pub rules: Vec<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every registered technology
    List,

    /// Show one technology and its dependencies
    Show {
        /// Technology key (e.g. selenium)
        tech: String,
    },

    /// Find technologies matching package names
    Match {
        /// Package ecosystem (npm, php, ruby, rust, golang, python, docker, githubAction, ...)
        #[arg(short, long, value_parser = parse_ecosystem)]
        ecosystem: Ecosystem,

        /// Package names
        #[arg(required = true)]
        packages: Vec<String>,
    },

    /// Scan a directory for technologies
    Scan {
        /// Directory to scan
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        for rules_path in &self.rules {
            if !rules_path.exists() {
                anyhow::bail!("Rules file does not exist: {}", rules_path.display());
            }
        }
        if let Command::Scan { path } = &self.command {
            validate_dir(path)?;
        }
        Ok(())
    }
}

pub fn parse_ecosystem(value: &str) -> std::result::Result<Ecosystem, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err("ecosystem must not be empty".to_string());
    }
    Ok(Ecosystem::from(value))
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    std::fs::read_dir(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}
