use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use tracing::{debug, warn};

use techrules::cli::{self, Command};
use techrules::logging::{self, Verbosity};
use techrules::matcher::{Matcher, RuleIndex};
use techrules::output::OutputFormatter;
use techrules::registry::Registry;
use techrules::scanner::Scanner;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    debug!(format = args.format.as_str(), command = ?args.command, "starting");

    let registry = Registry::load(&args.rules).context("Failed to load rules")?;

    let output = match &args.command {
        Command::List => OutputFormatter::list(registry.rules(), args.format)?,
        Command::Show { tech } => {
            let rule = registry
                .get(tech)
                .or_else(|| registry.get_by_name(tech))
                .with_context(|| format!("Unknown technology: {tech}"))?;
            OutputFormatter::rule(rule, args.format)?
        }
        Command::Match {
            ecosystem,
            packages,
        } => {
            if !ecosystem.is_known() {
                warn!(%ecosystem, "unknown ecosystem, only user rules can match it");
            }
            let index = RuleIndex::build(&registry).context("Failed to compile rules")?;
            let matches = index.match_dependencies(packages, ecosystem);
            OutputFormatter::matches(ecosystem, packages, &matches, args.format)?
        }
        Command::Scan { path } => {
            let index = RuleIndex::build(&registry).context("Failed to compile rules")?;
            let report = Scanner::new(&index)
                .scan(path)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            OutputFormatter::scan(&report, args.format)?
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
