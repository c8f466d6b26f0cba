//! Diagnostics on stderr, so command output on stdout stays parseable.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// How much the CLI logs, from `-q` / `-v` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Directive limited to this crate's events.
    fn directive(self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.level())
    }

    /// `RUST_LOG` when set, otherwise the flag-derived directive.
    fn filter(self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }

    fn shows_source_location(self) -> bool {
        self >= Self::Debug
    }
}

pub fn init(verbosity: Verbosity) {
    let builder = fmt::Subscriber::builder()
        .with_env_filter(verbosity.filter())
        .with_target(false)
        .with_file(verbosity.shows_source_location())
        .with_line_number(verbosity.shows_source_location())
        .compact();

    match verbosity {
        Verbosity::Quiet => builder.with_writer(std::io::sink).init(),
        Verbosity::Normal => builder.with_writer(std::io::stderr).without_time().init(),
        _ => builder.with_writer(std::io::stderr).init(),
    }
}
