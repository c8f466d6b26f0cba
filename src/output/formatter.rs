use std::collections::BTreeMap;
use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::matcher::Matches;
use crate::scanner::ScanReport;
use crate::types::{Ecosystem, Rule, RuleType};

#[derive(Debug, Serialize)]
pub struct RuleSummary<'a> {
    pub tech: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a RuleType,
    pub dependencies: usize,
}

impl<'a> From<&'a Rule> for RuleSummary<'a> {
    fn from(rule: &'a Rule) -> Self {
        Self {
            tech: &rule.tech,
            name: &rule.name,
            kind: &rule.kind,
            dependencies: rule.dependencies.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchOutput<'a> {
    pub ecosystem: &'a Ecosystem,
    pub packages: &'a [String],
    pub matches: &'a Matches,
}

pub struct OutputFormatter;

impl OutputFormatter {
    pub fn list(rules: &[Rule], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => {
                let summaries: Vec<RuleSummary> = rules.iter().map(RuleSummary::from).collect();
                Ok(serde_json::to_string_pretty(&summaries)?)
            }
            OutputFormat::Text => {
                let width = rules.iter().map(|r| r.tech.len()).max().unwrap_or(0);
                let mut out = String::new();
                for rule in rules {
                    writeln!(
                        out,
                        "{:<width$}  {} ({}, {} dependencies)",
                        rule.tech,
                        rule.name,
                        rule.kind,
                        rule.dependencies.len()
                    )?;
                }
                Ok(out)
            }
        }
    }

    pub fn rule(rule: &Rule, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rule)?),
            OutputFormat::Text => {
                let mut out = String::new();
                writeln!(out, "{} ({})", rule.name, rule.tech)?;
                writeln!(out, "type: {}", rule.kind)?;

                if !rule.extensions.is_empty() {
                    writeln!(out, "extensions: {}", rule.extensions.join(", "))?;
                }

                for ecosystem in rule.ecosystems() {
                    writeln!(out, "{ecosystem}:")?;
                    for dep in rule.dependencies.iter().filter(|d| &d.ecosystem == ecosystem) {
                        writeln!(out, "  {}", dep.name)?;
                    }
                }
                Ok(out)
            }
        }
    }

    pub fn matches(
        ecosystem: &Ecosystem,
        packages: &[String],
        matches: &Matches,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&MatchOutput {
                ecosystem,
                packages,
                matches,
            })?),
            OutputFormat::Text => Self::techs_text(matches, "no match"),
        }
    }

    pub fn scan(report: &ScanReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Text => {
                let mut out = Self::techs_text(&report.techs, "no technologies detected")?;
                if !report.manifests.is_empty() {
                    writeln!(out)?;
                    writeln!(out, "manifests:")?;
                    for manifest in &report.manifests {
                        writeln!(
                            out,
                            "  {} ({} dependencies)",
                            manifest.path,
                            manifest.dependencies.len()
                        )?;
                    }
                }
                writeln!(out)?;
                writeln!(out, "{} files scanned", report.files_scanned)?;
                Ok(out)
            }
        }
    }

    fn techs_text(techs: &BTreeMap<String, Vec<String>>, empty: &str) -> Result<String> {
        let mut out = String::new();
        if techs.is_empty() {
            writeln!(out, "{empty}")?;
            return Ok(out);
        }
        for (tech, reasons) in techs {
            writeln!(out, "{tech}")?;
            for reason in reasons {
                writeln!(out, "  {reason}")?;
            }
        }
        Ok(out)
    }
}
