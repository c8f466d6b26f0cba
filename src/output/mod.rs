mod formatter;

pub use formatter::{MatchOutput, OutputFormatter, RuleSummary};
